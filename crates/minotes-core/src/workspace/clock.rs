//! Time source for note timestamps

use chrono::{DateTime, SubsecRound, Utc};

/// Supplies the current time to the workspace
pub trait Clock {
    /// Current time in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock, truncated to the millisecond precision notes are stored with
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}
