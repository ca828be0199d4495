//! Tracing subscriber setup

use crate::config::{ConfigError, LoggingConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Safe to call more than once; only the first successful call installs a
/// subscriber.
///
/// # Returns
/// `true` if this call installed the subscriber
///
/// # Errors
/// - `ConfigError::Invalid` if `logging.filter` is not a valid directive
pub fn init(config: &LoggingConfig) -> Result<bool, ConfigError> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| ConfigError::invalid("logging.filter", e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .is_ok()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::debug!(filter = %config.filter, json = config.json, "logging initialised");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_filter_is_a_config_error() {
        let config = LoggingConfig {
            filter: "brew_store=loud".to_string(),
            json: false,
        };
        assert!(matches!(
            init(&config),
            Err(ConfigError::Invalid {
                field: "logging.filter",
                ..
            })
        ));
    }

    #[test]
    fn second_init_is_a_no_op() {
        let config = LoggingConfig::default();
        let _ = init(&config).unwrap();
        assert!(!init(&config).unwrap());
    }
}
