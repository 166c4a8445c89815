use shared::{Clock, FixedClock};
use time::Time;
use crate::config::{ClockMode, CONFIG};

/// Local wall-clock time of day from the browser.
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> Time {
        let date = js_sys::Date::new_0();
        Time::from_hms(date.get_hours() as u8, date.get_minutes() as u8, date.get_seconds() as u8)
            .unwrap_or(Time::MIDNIGHT)
    }
}

/// The one "now" used for status colors and the header clock alike.
pub fn current_time() -> Time {
    match CONFIG.clock {
        ClockMode::Simulated(at) => FixedClock(at).now(),
        ClockMode::System => BrowserClock.now(),
    }
}
