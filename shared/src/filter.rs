use time::Time;
use crate::models::Booth;
use crate::status::{booth_statuses, SlotStatus};

/// Dashboard search: free text against name or id, plus an optional status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoothFilter {
    pub query: String,
    pub status: Option<SlotStatus>,
}

impl BoothFilter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.status.is_none()
    }

    pub fn matches(&self, booth: &Booth, now: Time) -> bool {
        self.matches_query(booth) && self.matches_status(booth, now)
    }

    pub fn apply<'a>(&self, booths: &'a [Booth], now: Time) -> Vec<&'a Booth> {
        booths.iter().filter(|b| self.matches(b, now)).collect()
    }

    fn matches_query(&self, booth: &Booth) -> bool {
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        if let Ok(id) = query.parse::<u32>() {
            return booth.id == id;
        }
        booth.name.to_lowercase().contains(&query.to_lowercase())
    }

    fn matches_status(&self, booth: &Booth, now: Time) -> bool {
        match self.status {
            None => true,
            Some(wanted) => booth_statuses(booth, now).any(|(_, s)| s == wanted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotVotes;
    use time::macros::time;

    fn booths() -> Vec<Booth> {
        vec![
            Booth {
                id: 4,
                name: "Primary School, Kanti".into(),
                total_voters: 876,
                votes: SlotVotes::new([Some(60), Some(130), Some(200), None, None, None]),
            },
            Booth {
                id: 14,
                name: "Town Hall, Kalyani Chowk".into(),
                total_voters: 1160,
                votes: SlotVotes::new([Some(90), None, None, None, None, None]),
            },
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let booths = booths();
        let filter = BoothFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&booths, time!(14:12)).len(), 2);
    }

    #[test]
    fn numeric_query_matches_id_exactly() {
        let booths = booths();
        let filter = BoothFilter { query: "4".into(), status: None };
        let ids: Vec<u32> = filter.apply(&booths, time!(14:12)).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn text_query_is_case_insensitive() {
        let booths = booths();
        let filter = BoothFilter { query: "KALYANI".into(), status: None };
        assert_eq!(filter.apply(&booths, time!(14:12))[0].id, 14);
    }

    #[test]
    fn status_filter_checks_any_slot() {
        let booths = booths();
        let filter = BoothFilter { query: String::new(), status: Some(SlotStatus::Overdue) };
        let ids: Vec<u32> = filter.apply(&booths, time!(14:12)).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![14]);

        let pending = BoothFilter { query: String::new(), status: Some(SlotStatus::Pending) };
        assert_eq!(pending.apply(&booths, time!(14:12)).len(), 2);
    }
}
