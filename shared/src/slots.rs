use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use time::{macros::time, Time};
use crate::error::{Error, ErrorCode};

/// One of the six fixed points in the polling day at which a booth reports
/// its cumulative tally. Variants are declared in chronological order, so the
/// derived `Ord` is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "08:00")] Am8,
    #[serde(rename = "10:00")] Am10,
    #[serde(rename = "12:00")] Pm12,
    #[serde(rename = "14:00")] Pm2,
    #[serde(rename = "16:00")] Pm4,
    #[serde(rename = "18:00")] Pm6,
}

pub const SLOT_COUNT: usize = 6;

impl TimeSlot {
    pub const ALL: [TimeSlot; SLOT_COUNT] = [
        TimeSlot::Am8,
        TimeSlot::Am10,
        TimeSlot::Pm12,
        TimeSlot::Pm2,
        TimeSlot::Pm4,
        TimeSlot::Pm6,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn key(self) -> &'static str {
        match self {
            TimeSlot::Am8 => "08:00",
            TimeSlot::Am10 => "10:00",
            TimeSlot::Pm12 => "12:00",
            TimeSlot::Pm2 => "14:00",
            TimeSlot::Pm4 => "16:00",
            TimeSlot::Pm6 => "18:00",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TimeSlot::Am8 => "8 AM",
            TimeSlot::Am10 => "10 AM",
            TimeSlot::Pm12 => "12 PM",
            TimeSlot::Pm2 => "2 PM",
            TimeSlot::Pm4 => "4 PM",
            TimeSlot::Pm6 => "6 PM",
        }
    }

    pub const fn starts_at(self) -> Time {
        match self {
            TimeSlot::Am8 => time!(8:00),
            TimeSlot::Am10 => time!(10:00),
            TimeSlot::Pm12 => time!(12:00),
            TimeSlot::Pm2 => time!(14:00),
            TimeSlot::Pm4 => time!(16:00),
            TimeSlot::Pm6 => time!(18:00),
        }
    }

    pub fn previous(self) -> Option<TimeSlot> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter()
            .copied()
            .find(|slot| slot.key() == s)
            .ok_or_else(|| Error::new(ErrorCode::InvalidInput, format!("Unknown time slot: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_chronological() {
        assert!(TimeSlot::ALL.windows(2).all(|w| w[0] < w[1] && w[0].starts_at() < w[1].starts_at()));
        assert_eq!(TimeSlot::Pm2.previous(), Some(TimeSlot::Pm12));
        assert_eq!(TimeSlot::Am8.previous(), None);
    }

    #[test]
    fn keys_parse_back() {
        for slot in TimeSlot::ALL {
            assert_eq!(slot.key().parse::<TimeSlot>().unwrap(), slot);
        }
        assert!("09:00".parse::<TimeSlot>().is_err());
    }
}
