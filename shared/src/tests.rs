#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use time::macros::{datetime, time};
    use crate::dataset::{default_booths, BUNDLED_BOOTHS};
    use crate::store::{officer_booth_key, BOOTH_DATA_KEY, USER_KEY};
    use crate::{
        authenticate, classify, validate_booth, validate_votes, Booth, BoothStore, ErrorCode,
        KeyValueStore, MemoryStore, Role, SlotStatus, SlotVotes, StoreEvent, TimeSlot,
        ValidationError, SIMULATED_NOW,
    };

    fn sample_booth() -> Booth {
        Booth {
            id: 1,
            name: "Government Middle School, Brahmpura".into(),
            total_voters: 1000,
            votes: SlotVotes::new([Some(100), Some(250), Some(400), Some(400), None, None]),
        }
    }

    fn store() -> BoothStore<MemoryStore> {
        BoothStore::new(MemoryStore::default())
    }

    #[test]
    fn worked_example() {
        let booth = sample_booth();
        let now = time!(14:12);
        assert_eq!(classify(TimeSlot::Pm4, booth.vote_at(TimeSlot::Pm4), now), SlotStatus::Future);
        assert_eq!(classify(TimeSlot::Pm12, booth.vote_at(TimeSlot::Pm12), now), SlotStatus::Received);

        let mut proposed = booth.votes;
        proposed.set(TimeSlot::Pm2, Some(300));
        let err = validate_votes(&proposed, booth.total_voters).unwrap_err();
        assert_eq!(err, ValidationError::NotCumulative {
            earlier: TimeSlot::Pm12,
            earlier_votes: 400,
            later: TimeSlot::Pm2,
            later_votes: 300,
        });
        assert_eq!(
            err.to_string(),
            "2 PM votes (300) cannot be less than 12 PM votes (400). Votes are cumulative."
        );
    }

    #[test]
    fn bundled_dataset_is_consistent() {
        let booths = default_booths();
        assert!(!booths.is_empty());
        assert!(booths.iter().all(|b| b.id > 0 && validate_booth(b).is_ok()));

        let mut ids: Vec<u32> = booths.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), booths.len(), "booth ids must be unique");
        assert!(BUNDLED_BOOTHS.contains("\"totalVoters\""));
    }

    #[test]
    fn empty_storage_falls_back_to_bundled() {
        assert_eq!(store().load_booths(), default_booths());
    }

    #[test]
    fn malformed_storage_falls_back_to_bundled() {
        let store = store();
        store.storage().set(BOOTH_DATA_KEY, "{not json").unwrap();
        assert_eq!(store.load_booths(), default_booths());

        store.storage().set(BOOTH_DATA_KEY, r#"[{"id":1,"name":"x","totalVoters":5,"votes":{"07:00":1}}]"#).unwrap();
        assert_eq!(store.load_booths(), default_booths());
    }

    #[test]
    fn persisted_list_round_trips() {
        let store = store();
        let mut booths = default_booths();
        booths[0].votes.set(TimeSlot::Pm6, None);
        booths[1].name = "Renamed Booth".into();
        store.save_booths(&booths).unwrap();

        let reloaded = store.load_booths();
        assert_eq!(reloaded, booths);
        for (a, b) in reloaded.iter().zip(&booths) {
            assert_eq!(a.id, b.id);
            for slot in TimeSlot::ALL {
                assert_eq!(a.vote_at(slot), b.vote_at(slot));
            }
        }
    }

    #[test]
    fn commit_edit_persists_and_notifies() {
        let store = store();
        let events = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let events = events.clone();
            store.subscribe(move |e| events.borrow_mut().push(*e))
        };

        let mut booth = store.find_booth(2).unwrap();
        let reported = booth.votes_cast();
        booth.votes.set(TimeSlot::Pm4, Some(reported + 10));
        store.commit_edit(booth.clone()).unwrap();

        assert_eq!(store.find_booth(2), Some(booth));
        assert_eq!(*events.borrow(), vec![StoreEvent::BoothsUpdated { booth_id: Some(2) }]);
        assert!(store.storage().get(BOOTH_DATA_KEY).unwrap().is_some());
    }

    #[test]
    fn rejected_edit_leaves_state_unchanged() {
        let store = store();
        let before = store.find_booth(1).unwrap();
        let mut edit = before.clone();
        edit.votes.set(TimeSlot::Am10, Some(0));

        let err = store.commit_edit(edit).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("10 AM votes (0) cannot be less than 8 AM votes"));
        assert_eq!(store.storage().get(BOOTH_DATA_KEY).unwrap(), None);
        assert_eq!(store.find_booth(1), Some(before));

        let mut over = store.find_booth(1).unwrap();
        over.votes.set(TimeSlot::Pm6, Some(over.total_voters + 1));
        let err = store.commit_edit(over).unwrap_err();
        assert!(err.message.starts_with("Cannot exceed maximum voters"));
    }

    #[test]
    fn editing_unknown_booth_is_not_found() {
        let mut booth = sample_booth();
        booth.id = 9999;
        let err = store().commit_edit(booth).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn officer_assignment_is_stable() {
        let store = store();
        let first = store.assigned_booth("officer").unwrap();
        let second = store.assigned_booth("officer").unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(
            store.storage().get(&officer_booth_key("officer")).unwrap(),
            Some(first.id.to_string())
        );
    }

    #[test]
    fn stale_assignment_is_replaced() {
        let store = store();
        store.storage().set(&officer_booth_key("officer"), "9999").unwrap();
        let booth = store.assigned_booth("officer").unwrap();
        assert_ne!(booth.id, 9999);

        store.storage().set(&officer_booth_key("other"), "3").unwrap();
        assert_eq!(store.assigned_booth("other").unwrap().id, 3);
    }

    #[test]
    fn session_survives_reload_and_logout() {
        let store = store();
        let user = authenticate("officer", "1234", Role::PresidingOfficer, datetime!(2025-11-06 8:30 UTC)).unwrap();
        store.save_user(&user).unwrap();
        assert_eq!(store.current_user(), Some(user));

        store.clear_user().unwrap();
        assert_eq!(store.current_user(), None);
    }

    #[test]
    fn malformed_session_is_discarded() {
        let store = store();
        store.storage().set(USER_KEY, "{\"username\":").unwrap();
        assert_eq!(store.current_user(), None);
        assert_eq!(store.storage().get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn bundled_data_matches_simulated_time() {
        let pending = default_booths().iter()
            .filter(|b| classify(TimeSlot::Pm2, b.vote_at(TimeSlot::Pm2), SIMULATED_NOW) == SlotStatus::Pending)
            .count();
        assert!(pending > 0);
        assert!(default_booths().iter()
            .all(|b| classify(TimeSlot::Pm6, b.vote_at(TimeSlot::Pm6), SIMULATED_NOW) == SlotStatus::Future));
    }
}
