//! Wall clock seam
//!
//! History bucketing depends on "today"; stores take the current time from a
//! [`Clock`] so the day boundary can be driven from tests.

use chrono::{DateTime, Local};
use std::fmt::Debug;

/// Source of the current local time
pub trait Clock: Send + Sync + Debug + 'static {
    /// Current local time
    fn now(&self) -> DateTime<Local>;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
