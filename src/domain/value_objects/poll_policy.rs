//! Bounds for the wait-until-active loop

use std::time::Duration;

/// Fixed-interval polling bounded by a total wait budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub timeout: Duration,
}

impl PollPolicy {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    /// Number of status queries allowed before giving up.
    ///
    /// Always at least one, so a zero timeout still checks once.
    pub fn max_attempts(&self) -> u64 {
        let interval = self.interval.as_millis().max(1);
        let attempts = self.timeout.as_millis() / interval;
        (attempts as u64).saturating_add(1)
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            timeout: Duration::from_secs(600),
        }
    }
}
