use shared::clock::SIMULATED_NOW;
use time::Time;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClockMode {
    /// Pinned to the instant the bundled dataset describes.
    Simulated(Time),
    System,
}

pub struct Config {
    pub title: &'static str,
    pub constituency: &'static str,
    pub clock: ClockMode,
    pub clock_tick_ms: u32,
    pub refresh_interval_ms: u32,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            title: "Bihar Elections Dashboard",
            constituency: "Muzaffarpur Vidhan Sabha Constituency",
            clock: ClockMode::Simulated(SIMULATED_NOW),
            clock_tick_ms: 60_000,
            refresh_interval_ms: 2 * 60 * 60 * 1000,
        }
    }
}

pub const CONFIG: Config = Config::new();
