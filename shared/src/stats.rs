use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use time::Time;
use crate::models::Booth;
use crate::slots::TimeSlot;
use crate::status::{booth_statuses, SlotStatus};

pub fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) * 100.0 / f64::from(whole)
    }
}

impl Booth {
    /// Highest recorded cumulative value, or 0 before the first report.
    pub fn votes_cast(&self) -> u32 {
        self.votes.recorded().map(|(_, v)| v).max().unwrap_or(0)
    }

    /// Most recent report in slot order, or 0 before the first report.
    pub fn latest_reported(&self) -> u32 {
        self.votes.recorded().last().map(|(_, v)| v).unwrap_or(0)
    }

    pub fn turnout_percent(&self) -> f64 {
        percent(self.votes_cast(), self.total_voters)
    }

    pub fn remaining_voters(&self) -> u32 {
        self.total_voters.saturating_sub(self.votes_cast())
    }

    pub fn slot_breakdown(&self) -> Vec<SlotBreakdown> {
        self.votes.iter()
            .map(|(slot, votes)| {
                let cumulative = votes.unwrap_or(0);
                let previous = slot.previous()
                    .and_then(|p| self.vote_at(p))
                    .unwrap_or(0);
                let increment = if cumulative == 0 { 0 } else { cumulative.saturating_sub(previous) };
                SlotBreakdown {
                    slot,
                    votes,
                    cumulative,
                    increment,
                    turnout_percent: percent(cumulative, self.total_voters),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotBreakdown {
    pub slot: TimeSlot,
    pub votes: Option<u32>,
    pub cumulative: u32,
    pub increment: u32,
    pub turnout_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub booth_count: usize,
    pub total_voters: u64,
    pub votes_cast: u64,
    pub status_counts: HashMap<SlotStatus, usize>,
}

impl DashboardSummary {
    pub fn from_booths(booths: &[Booth], now: Time) -> Self {
        let mut summary = Self {
            booth_count: booths.len(),
            ..Self::default()
        };
        for booth in booths {
            summary.total_voters += u64::from(booth.total_voters);
            summary.votes_cast += u64::from(booth.votes_cast());
            for (_, status) in booth_statuses(booth, now) {
                *summary.status_counts.entry(status).or_insert(0) += 1;
            }
        }
        summary
    }

    pub fn turnout_percent(&self) -> f64 {
        if self.total_voters == 0 {
            0.0
        } else {
            self.votes_cast as f64 * 100.0 / self.total_voters as f64
        }
    }

    pub fn count(&self, status: SlotStatus) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotVotes;
    use time::macros::time;

    fn booth(total_voters: u32, votes: [Option<u32>; 6]) -> Booth {
        Booth { id: 1, name: "Kudhani".into(), total_voters, votes: SlotVotes::new(votes) }
    }

    #[test]
    fn empty_booth_has_zero_stats() {
        let b = booth(0, [None; 6]);
        assert_eq!(b.votes_cast(), 0);
        assert_eq!(b.latest_reported(), 0);
        assert_eq!(b.turnout_percent(), 0.0);
        assert_eq!(b.remaining_voters(), 0);
    }

    #[test]
    fn breakdown_uses_previous_slot_value() {
        let b = booth(1000, [Some(100), Some(250), None, Some(400), None, None]);
        let rows = b.slot_breakdown();
        let increments: Vec<u32> = rows.iter().map(|r| r.increment).collect();
        assert_eq!(increments, vec![100, 150, 0, 400, 0, 0]);
        assert_eq!(rows[1].turnout_percent, 25.0);
        assert_eq!(b.remaining_voters(), 600);
    }

    #[test]
    fn summary_counts_every_cell() {
        let booths = vec![
            booth(1000, [Some(100), Some(250), Some(400), Some(400), None, None]),
            booth(500, [Some(50), Some(80), None, None, None, None]),
        ];
        let summary = DashboardSummary::from_booths(&booths, time!(14:12));
        assert_eq!(summary.booth_count, 2);
        assert_eq!(summary.total_voters, 1500);
        assert_eq!(summary.votes_cast, 480);
        assert_eq!(summary.count(SlotStatus::Received), 6);
        assert_eq!(summary.count(SlotStatus::Overdue), 1);
        assert_eq!(summary.count(SlotStatus::Pending), 1);
        assert_eq!(summary.count(SlotStatus::Future), 4);
        assert_eq!(summary.turnout_percent(), 32.0);
    }
}
