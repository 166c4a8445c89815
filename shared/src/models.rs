use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use crate::slots::{TimeSlot, SLOT_COUNT};

/// Cumulative tallies for the six reporting slots, `None` meaning no data yet.
///
/// On the wire this is a JSON object keyed by slot (`"08:00"` .. `"18:00"`).
/// Missing keys read as `None`; serialization always writes all six.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<TimeSlot, Option<u32>>", into = "BTreeMap<TimeSlot, Option<u32>>")]
pub struct SlotVotes([Option<u32>; SLOT_COUNT]);

impl SlotVotes {
    pub const fn new(values: [Option<u32>; SLOT_COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, slot: TimeSlot) -> Option<u32> {
        self.0[slot.index()]
    }

    pub fn set(&mut self, slot: TimeSlot, value: Option<u32>) {
        self.0[slot.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeSlot, Option<u32>)> + '_ {
        TimeSlot::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Slots that have a recorded value, in chronological order.
    pub fn recorded(&self) -> impl Iterator<Item = (TimeSlot, u32)> + '_ {
        self.iter().filter_map(|(slot, value)| value.map(|v| (slot, v)))
    }
}

impl From<BTreeMap<TimeSlot, Option<u32>>> for SlotVotes {
    fn from(map: BTreeMap<TimeSlot, Option<u32>>) -> Self {
        let mut votes = SlotVotes::default();
        for (slot, value) in map {
            votes.set(slot, value);
        }
        votes
    }
}

impl From<SlotVotes> for BTreeMap<TimeSlot, Option<u32>> {
    fn from(votes: SlotVotes) -> Self {
        votes.iter().collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booth {
    pub id: u32,
    pub name: String,
    pub total_voters: u32,
    pub votes: SlotVotes,
}

impl Booth {
    pub fn vote_at(&self, slot: TimeSlot) -> Option<u32> {
        self.votes.get(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_keys_read_as_no_data() {
        let booth: Booth = serde_json::from_str(
            r#"{"id":3,"name":"Kanti","totalVoters":500,"votes":{"08:00":40,"12:00":90}}"#,
        ).unwrap();
        assert_eq!(booth.vote_at(TimeSlot::Am8), Some(40));
        assert_eq!(booth.vote_at(TimeSlot::Am10), None);
        assert_eq!(booth.vote_at(TimeSlot::Pm12), Some(90));
    }

    #[test]
    fn serializes_every_slot_in_order() {
        let booth = Booth {
            id: 1,
            name: "Brahmpura".into(),
            total_voters: 10,
            votes: SlotVotes::new([Some(1), None, None, None, None, None]),
        };
        let json = serde_json::to_string(&booth).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Brahmpura","totalVoters":10,"votes":{"08:00":1,"10:00":null,"12:00":null,"14:00":null,"16:00":null,"18:00":null}}"#
        );
    }

    #[test]
    fn unknown_slot_keys_are_malformed() {
        let parsed = serde_json::from_str::<SlotVotes>(r#"{"09:00":4}"#);
        assert!(parsed.is_err());
        assert!(serde_json::from_str::<SlotVotes>(r#"{"08:00":-4}"#).is_err());
    }
}
