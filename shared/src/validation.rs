use crate::error::{Error, ErrorCode};
use crate::models::{Booth, SlotVotes};
use crate::slots::TimeSlot;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{later} votes ({later_votes}) cannot be less than {earlier} votes ({earlier_votes}). Votes are cumulative.")]
    NotCumulative {
        earlier: TimeSlot,
        earlier_votes: u32,
        later: TimeSlot,
        later_votes: u32,
    },
    #[error("Cannot exceed maximum voters ({total_voters}); highest entry is {max_votes}")]
    ExceedsElectorate { max_votes: u32, total_voters: u32 },
    #[error("{slot} votes must be a whole number, got \"{input}\"")]
    InvalidCount { slot: TimeSlot, input: String },
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::new(ErrorCode::ValidationFailed, e.to_string())
    }
}

/// Checks a proposed six-slot tally before it is committed.
///
/// Recorded values must never decrease from one reported slot to the next,
/// and none may exceed the registered electorate. The first cumulative
/// violation wins over the electorate check.
pub fn validate_votes(votes: &SlotVotes, total_voters: u32) -> Result<(), ValidationError> {
    let mut previous: Option<(TimeSlot, u32)> = None;
    for (slot, value) in votes.recorded() {
        if let Some((earlier, earlier_votes)) = previous {
            if value < earlier_votes {
                return Err(ValidationError::NotCumulative {
                    earlier,
                    earlier_votes,
                    later: slot,
                    later_votes: value,
                });
            }
        }
        previous = Some((slot, value));
    }

    let max_votes = votes.recorded().map(|(_, v)| v).max().unwrap_or(0);
    if max_votes > total_voters {
        return Err(ValidationError::ExceedsElectorate { max_votes, total_voters });
    }

    Ok(())
}

pub fn validate_booth(booth: &Booth) -> Result<(), ValidationError> {
    validate_votes(&booth.votes, booth.total_voters)
}

/// Parses one editor field. Blank input means "no data yet".
pub fn parse_slot_input(slot: TimeSlot, input: &str) -> Result<Option<u32>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<u32>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidCount { slot, input: input.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_flat_and_gapped_sequences() {
        let votes = SlotVotes::new([Some(10), None, Some(10), Some(25), None, Some(25)]);
        assert_eq!(validate_votes(&votes, 25), Ok(()));
        assert_eq!(validate_votes(&SlotVotes::default(), 0), Ok(()));
    }

    #[test]
    fn decrease_across_a_gap_names_both_slots() {
        let votes = SlotVotes::new([Some(50), None, None, Some(40), None, None]);
        assert_eq!(
            validate_votes(&votes, 100),
            Err(ValidationError::NotCumulative {
                earlier: TimeSlot::Am8,
                earlier_votes: 50,
                later: TimeSlot::Pm2,
                later_votes: 40,
            })
        );
    }

    #[test]
    fn electorate_cap_reports_the_maximum() {
        let votes = SlotVotes::new([Some(5), Some(1200), None, None, None, None]);
        let err = validate_votes(&votes, 1000).unwrap_err();
        assert_eq!(err, ValidationError::ExceedsElectorate { max_votes: 1200, total_voters: 1000 });
        assert_eq!(err.to_string(), "Cannot exceed maximum voters (1000); highest entry is 1200");
    }

    #[test]
    fn cumulative_violation_is_reported_first() {
        let votes = SlotVotes::new([Some(2000), Some(5), None, None, None, None]);
        assert!(matches!(validate_votes(&votes, 1000), Err(ValidationError::NotCumulative { .. })));
    }

    #[test]
    fn parses_editor_fields() {
        assert_eq!(parse_slot_input(TimeSlot::Am8, ""), Ok(None));
        assert_eq!(parse_slot_input(TimeSlot::Am8, "  "), Ok(None));
        assert_eq!(parse_slot_input(TimeSlot::Am8, " 42 "), Ok(Some(42)));
        assert!(matches!(
            parse_slot_input(TimeSlot::Am10, "-3"),
            Err(ValidationError::InvalidCount { slot: TimeSlot::Am10, .. })
        ));
        assert!(parse_slot_input(TimeSlot::Am10, "4.5").is_err());
    }
}
