//! Sleep Port
//!
//! The polling loop's only suspension point, injectable so tests don't wait.

use std::time::Duration;

pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Real sleeper backed by `std::thread::sleep`
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Sleeper that returns immediately
pub struct NoopSleeper;

impl Sleeper for NoopSleeper {
    fn sleep(&self, _duration: Duration) {}
}
