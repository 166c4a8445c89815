use time::{macros::time, Time};

/// The instant the bundled dataset was captured at.
pub const SIMULATED_NOW: Time = time!(14:12);

pub trait Clock {
    fn now(&self) -> Time;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Time);

impl Default for FixedClock {
    fn default() -> Self {
        Self(SIMULATED_NOW)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Time {
        self.0
    }
}
