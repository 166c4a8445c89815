use serde::{Serialize, Deserialize};
use time::{Duration, Time};
use crate::models::Booth;
use crate::slots::TimeSlot;

/// Minutes after a slot boundary before a missing report counts as overdue.
pub const OVERDUE_AFTER_MINUTES: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Received,
    Pending,
    Overdue,
    Future,
}

impl SlotStatus {
    pub const ALL: [SlotStatus; 4] = [
        SlotStatus::Received,
        SlotStatus::Pending,
        SlotStatus::Overdue,
        SlotStatus::Future,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            SlotStatus::Received => "received",
            SlotStatus::Pending => "pending",
            SlotStatus::Overdue => "overdue",
            SlotStatus::Future => "future",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SlotStatus::Received => "Reported",
            SlotStatus::Pending => "Pending",
            SlotStatus::Overdue => "Overdue",
            SlotStatus::Future => "Future",
        }
    }

    pub const fn legend_label(self) -> &'static str {
        match self {
            SlotStatus::Received => "Data Received",
            SlotStatus::Pending => "Awaiting Data",
            SlotStatus::Overdue => "Overdue (15+ min)",
            SlotStatus::Future => "Future Slot",
        }
    }

    pub fn from_key(key: &str) -> Option<SlotStatus> {
        Self::ALL.into_iter().find(|status| status.key() == key)
    }
}

/// Classifies a single booth cell. A recorded value is always `Received`;
/// otherwise the answer depends only on how far `now` is past the slot time.
pub fn classify(slot: TimeSlot, votes: Option<u32>, now: Time) -> SlotStatus {
    if votes.is_some() {
        return SlotStatus::Received;
    }

    let elapsed = now - slot.starts_at();
    if elapsed.is_negative() {
        SlotStatus::Future
    } else if elapsed > Duration::minutes(OVERDUE_AFTER_MINUTES) {
        SlotStatus::Overdue
    } else {
        SlotStatus::Pending
    }
}

pub fn booth_statuses(booth: &Booth, now: Time) -> impl Iterator<Item = (TimeSlot, SlotStatus)> + '_ {
    booth.votes.iter().map(move |(slot, votes)| (slot, classify(slot, votes, now)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    #[test]
    fn recorded_values_are_received_at_any_time() {
        for now in [time!(0:00), time!(8:00), time!(14:12), time!(23:59)] {
            for slot in TimeSlot::ALL {
                assert_eq!(classify(slot, Some(0), now), SlotStatus::Received);
            }
        }
    }

    #[test]
    fn missing_values_follow_elapsed_time() {
        assert_eq!(classify(TimeSlot::Pm4, None, time!(14:12)), SlotStatus::Future);
        assert_eq!(classify(TimeSlot::Pm2, None, time!(13:59:59)), SlotStatus::Future);
        assert_eq!(classify(TimeSlot::Pm2, None, time!(14:00)), SlotStatus::Pending);
        assert_eq!(classify(TimeSlot::Pm2, None, time!(14:12)), SlotStatus::Pending);
        assert_eq!(classify(TimeSlot::Pm2, None, time!(14:15)), SlotStatus::Pending);
        assert_eq!(classify(TimeSlot::Pm2, None, time!(14:15:01)), SlotStatus::Overdue);
        assert_eq!(classify(TimeSlot::Pm12, None, time!(14:12)), SlotStatus::Overdue);
    }

    #[test]
    fn status_keys_round_trip() {
        for status in SlotStatus::ALL {
            assert_eq!(SlotStatus::from_key(status.key()), Some(status));
        }
        assert_eq!(SlotStatus::from_key("late"), None);
    }
}
