//! Application configuration
//!
//! Loaded from TOML; every section and field is optional:
//!
//! ```toml
//! [storage]
//! dir = "/var/lib/brew"        # omit for an in-memory store
//!
//! [persistence]
//! debounce_ms = 300
//!
//! [roster]
//! defaults = ["Abdul", "Michael", "Doug"]
//!
//! [timer]
//! default_secs = 600
//! presets_secs = [300, 600, 900]
//!
//! [logging]
//! filter = "info"
//! json = false
//! ```

use brew_store::{RosterOptions, DEFAULT_DEBOUNCE, DEFAULT_ROSTER};
use brew_timer::{Countdown, DEFAULT_DURATION_SECS, DEFAULT_PRESETS_SECS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid TOML for [`BrewConfig`]
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Dotted field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigError {
    /// Create invalid value error
    #[inline]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Storage location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding one file per key; `None` keeps everything in memory
    pub dir: Option<PathBuf>,
}

/// Roster persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PersistenceConfig {
    /// Quiet period before a roster write, in milliseconds
    pub debounce_ms: u64,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            debounce_ms: u64::try_from(DEFAULT_DEBOUNCE.as_millis()).unwrap_or(300),
        }
    }
}

/// Roster seeding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Names used when no roster is stored
    pub defaults: Vec<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            defaults: DEFAULT_ROSTER.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Countdown settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerConfig {
    /// Initial countdown length in seconds
    pub default_secs: u32,
    /// Selectable lengths in seconds
    pub presets_secs: Vec<u32>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_secs: DEFAULT_DURATION_SECS,
            presets_secs: DEFAULT_PRESETS_SECS.to_vec(),
        }
    }
}

/// Log output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info,brew_store=debug`
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrewConfig {
    /// Storage location
    pub storage: StorageConfig,
    /// Roster persistence
    pub persistence: PersistenceConfig,
    /// Roster seeding
    pub roster: RosterConfig,
    /// Countdown settings
    pub timer: TimerConfig,
    /// Log output
    pub logging: LoggingConfig,
}

impl BrewConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// - `ConfigError::Parse` on malformed TOML or unknown fields
    /// - `ConfigError::Invalid` if a value is out of range
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - otherwise as [`BrewConfig::from_toml_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// - `ConfigError::Invalid` naming the first offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer.default_secs == 0 {
            return Err(ConfigError::invalid("timer.default_secs", "must be positive"));
        }
        if self.timer.presets_secs.is_empty() {
            return Err(ConfigError::invalid("timer.presets_secs", "must not be empty"));
        }
        if self.timer.presets_secs.contains(&0) {
            return Err(ConfigError::invalid("timer.presets_secs", "presets must be positive"));
        }
        if let Some(blank) = self.roster.defaults.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "roster.defaults",
                format!("entry {blank} is blank"),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::invalid("logging.filter", "must not be empty"));
        }
        Ok(())
    }

    /// With storage directory
    #[inline]
    #[must_use]
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.dir = Some(dir.into());
        self
    }

    /// With roster debounce in milliseconds
    #[inline]
    #[must_use]
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.persistence.debounce_ms = debounce_ms;
        self
    }

    /// With default roster names
    #[must_use]
    pub fn with_default_roster<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roster.defaults = names.into_iter().map(Into::into).collect();
        self
    }

    /// With countdown length in seconds
    #[inline]
    #[must_use]
    pub fn with_timer_secs(mut self, default_secs: u32) -> Self {
        self.timer.default_secs = default_secs;
        self
    }

    /// With log filter directive
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.filter = filter.into();
        self
    }

    /// With JSON log output
    #[inline]
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.logging.json = json;
        self
    }

    /// Roster debounce period
    #[inline]
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.persistence.debounce_ms)
    }

    /// Options for the roster store
    #[must_use]
    pub fn roster_options(&self) -> RosterOptions {
        RosterOptions::new()
            .with_debounce(self.debounce())
            .with_default_names(self.roster.defaults.iter().cloned())
    }

    /// Idle countdown with the configured length and presets
    #[must_use]
    pub fn countdown(&self) -> Countdown {
        Countdown::new(self.timer.default_secs).with_presets(self.timer.presets_secs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_default() {
        let config = BrewConfig::from_toml_str("").unwrap();
        assert_eq!(config, BrewConfig::default());
        assert_eq!(config.persistence.debounce_ms, 300);
        assert_eq!(config.timer.presets_secs, vec![300, 600, 900]);
        assert_eq!(config.roster.defaults, vec!["Abdul", "Michael", "Doug"]);
        assert!(config.storage.dir.is_none());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = BrewConfig::from_toml_str(
            r#"
            [timer]
            default_secs = 300

            [logging]
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.timer.default_secs, 300);
        assert_eq!(config.timer.presets_secs, vec![300, 600, 900]);
        assert!(config.logging.json);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = BrewConfig::from_toml_str("[timer]\nminutes = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_timer_is_invalid() {
        let err = BrewConfig::new().with_timer_secs(0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "timer.default_secs",
                ..
            }
        ));
    }

    #[test]
    fn blank_default_name_is_invalid() {
        let err = BrewConfig::new()
            .with_default_roster(["Abdul", "  "])
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid roster.defaults: entry 1 is blank");
    }

    #[test]
    fn roster_options_follow_config() {
        let options = BrewConfig::new()
            .with_debounce_ms(0)
            .with_default_roster(["Kim"])
            .roster_options();
        assert!(options.debounce.is_zero());
        assert_eq!(options.default_names, vec!["Kim"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = BrewConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
