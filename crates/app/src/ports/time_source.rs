//! Time source port: where the current wall-clock time comes from.

use berlin_clock_domain::time::TimeOfDay;

/// Provides the current time of day.
pub trait TimeSource {
    fn now(&self) -> TimeOfDay;
}

/// Local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::now()
    }
}

/// A fixed time always reports itself.
impl TimeSource for TimeOfDay {
    fn now(&self) -> TimeOfDay {
        *self
    }
}
