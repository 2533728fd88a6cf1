#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::error::Rejection;
    use crate::models::*;
    use crate::poll::{render_results, tally, PollController, PollMessage};
    use crate::store::{JsonVoteStore, MemorySlot, StorageSlot, VoteStore, STORAGE_KEY};
    use proptest::prelude::*;

    type Controller = PollController<JsonVoteStore<MemorySlot>>;

    fn controller() -> Controller {
        PollController::new(JsonVoteStore::new(MemorySlot::new()))
    }

    fn record(name: &str, email: &str, choice: &str, timestamp: i64) -> VoteRecord {
        VoteRecord {
            name: name.into(),
            email: email.into(),
            choice: Choice::from(choice),
            timestamp,
        }
    }

    fn raw_slot(c: &Controller) -> Option<String> {
        c.store().slot().raw(STORAGE_KEY)
    }

    #[test]
    fn test_submit_records_normalized_vote() {
        let c = controller();
        let recorded = c
            .submit_at(&SubmitForm::new("  Ana  ", "  Ana@ISU.edu ", "more_evening"), 1_700_000_000_000)
            .unwrap();

        assert_eq!(recorded.total_votes, 1);
        assert_eq!(recorded.record, record("Ana", "ana@isu.edu", "more_evening", 1_700_000_000_000));
        assert_eq!(c.votes(), vec![recorded.record]);
    }

    #[test]
    fn test_submit_uses_current_time() {
        let c = controller();
        let before = crate::poll::now_millis();
        let recorded = c.submit(&SubmitForm::new("Ana", "ana@isu.edu", "more_daytime")).unwrap();
        assert!(recorded.record.timestamp >= before);
    }

    #[test]
    fn test_missing_fields_rejected_without_persisting() {
        let c = controller();
        let forms = [
            SubmitForm::new("", "ana@isu.edu", "more_daytime"),
            SubmitForm::new("Ana", "   ", "more_daytime"),
            SubmitForm::new("Ana", "ana@isu.edu", ""),
            SubmitForm::default(),
        ];
        for form in &forms {
            assert!(matches!(c.submit_at(form, 1), Err(Rejection::MissingFields)));
        }
        assert_eq!(raw_slot(&c), None);
        assert!(c.votes().is_empty());
    }

    #[test]
    fn test_duplicate_email_rejected_case_insensitively() {
        let c = controller();
        c.submit_at(&SubmitForm::new("Ana", "ana@isu.edu", "more_daytime"), 1).unwrap();
        let before = raw_slot(&c);

        let outcome = c.submit_at(&SubmitForm::new("Someone Else", " ANA@Isu.Edu", "better_frequency"), 2);
        assert!(matches!(outcome, Err(Rejection::DuplicateEmail)));
        assert_eq!(raw_slot(&c), before);
        assert_eq!(c.votes().len(), 1);
    }

    #[test]
    fn test_missing_fields_checked_before_duplicates() {
        let c = controller();
        c.submit_at(&SubmitForm::new("Ana", "ana@isu.edu", "more_daytime"), 1).unwrap();
        let outcome = c.submit_at(&SubmitForm::new("", "ana@isu.edu", "more_daytime"), 2);
        assert!(matches!(outcome, Err(Rejection::MissingFields)));
    }

    #[test]
    fn test_percentages_round_against_known_total() {
        let tally = Tally::from_counts([3, 1, 0, 0]);
        let results = render_results(&tally, &[]);
        let percents: Vec<_> = results.options.iter().map(|o| o.percent).collect();
        assert_eq!(percents, vec![75, 25, 0, 0]);
        assert_eq!(results.options[0].width(), "75%");
        assert_eq!(results.options[1].votes_title(), "1 vote(s)");
    }

    #[test]
    fn test_percentages_zero_when_no_votes() {
        let c = controller();
        let results = c.results();
        assert_eq!(results.total, 0);
        assert_eq!(results.options.len(), 4);
        assert!(results.options.iter().all(|o| o.percent == 0 && o.count == 0));
        assert!(results.voters.is_empty());
    }

    #[test]
    fn test_percentages_round_half_up() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(0, 0), 0);
    }

    #[test]
    fn test_unrecognized_choice_stored_and_rendered_but_not_tallied() {
        let c = controller();
        c.submit_at(&SubmitForm::new("Ana", "ana@isu.edu", "free_rides"), 1).unwrap();
        c.submit_at(&SubmitForm::new("Bo", "bo@isu.edu", "more_coverage"), 2).unwrap();

        let raw = raw_slot(&c).unwrap();
        assert!(raw.contains("\"choice\":\"free_rides\""));

        let t = c.tally();
        assert_eq!(t.total(), 1);
        assert_eq!(t.count(PollOption::MoreCoverage), 1);

        let results = c.results();
        assert_eq!(results.voters.len(), 2);
        assert_eq!(results.voters[0].choice_label, "free_rides");
        assert_eq!(results.voters[1].choice_label, "More coverage on weekends");
        assert_eq!(results.options[PollOption::MoreCoverage.index()].percent, 100);
    }

    #[test]
    fn test_voter_rows_keep_insertion_order() {
        let c = controller();
        for (i, (name, email)) in [("Cy", "cy@isu.edu"), ("Ana", "ana@isu.edu"), ("Bo", "bo@isu.edu")]
            .iter()
            .enumerate()
        {
            c.submit_at(&SubmitForm::new(*name, *email, "more_evening"), i as i64).unwrap();
        }
        let names: Vec<_> = c.results().voters.into_iter().map(|row| row.name).collect();
        assert_eq!(names, vec!["Cy", "Ana", "Bo"]);
    }

    #[test]
    fn test_voter_row_formats_timestamp() {
        let row = VoterRow::from(&record("Ana", "ana@isu.edu", "more_daytime", 0));
        assert_eq!(row.cast_at, "1970-01-01 00:00:00 UTC");
        assert_eq!(row.choice_label, "More daytime buses");
        assert_eq!(format_timestamp(1_700_000_000_000), "2023-11-14 22:13:20 UTC");
    }

    #[test]
    fn test_store_round_trip_preserves_order() {
        let store = JsonVoteStore::new(MemorySlot::new());
        let votes = vec![
            record("Bo", "bo@isu.edu", "better_frequency", 5),
            record("Ana", "ana@isu.edu", "whatever", 3),
        ];
        store.save(&votes);
        assert_eq!(store.load(), votes);
    }

    #[test]
    fn test_store_absent_slot_loads_empty() {
        let store = JsonVoteStore::new(MemorySlot::new());
        assert!(store.load().is_empty());

        store.slot().set(STORAGE_KEY, "").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupted_slot_loads_empty_and_recovers() {
        let c = controller();
        c.store().slot().set(STORAGE_KEY, "{not json").unwrap();
        assert!(c.votes().is_empty());
        assert!(c.store().try_load().is_err());

        c.store().slot().set(STORAGE_KEY, r#"{"name":"Ana"}"#).unwrap();
        assert!(c.votes().is_empty());

        c.submit_at(&SubmitForm::new("Ana", "ana@isu.edu", "more_daytime"), 1).unwrap();
        assert_eq!(c.votes().len(), 1);
    }

    #[test]
    fn test_quota_exceeded_save_is_dropped() {
        let c = PollController::new(JsonVoteStore::new(MemorySlot::with_quota(150)));
        c.submit_at(&SubmitForm::new("Ana", "ana@isu.edu", "more_daytime"), 1).unwrap();
        let before = c.store().slot().raw(STORAGE_KEY);

        let outcome = c.submit_at(&SubmitForm::new("Bo", "bo@isu.edu", "more_evening"), 2);
        assert!(outcome.is_ok());
        assert!(c.store().try_save(&[
            record("Ana", "ana@isu.edu", "more_daytime", 1),
            record("Bo", "bo@isu.edu", "more_evening", 2),
        ]).is_err());
        assert_eq!(c.store().slot().raw(STORAGE_KEY), before);
        assert_eq!(c.votes().len(), 1);
    }

    #[test]
    fn test_clear_then_load_is_empty() {
        let c = controller();
        c.submit_at(&SubmitForm::new("Ana", "ana@isu.edu", "more_daytime"), 1).unwrap();
        c.store().clear();
        assert!(c.votes().is_empty());
        assert_eq!(raw_slot(&c), None);
        c.store().clear();
        assert!(c.votes().is_empty());
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let c = controller();
        c.submit_at(&SubmitForm::new("Ana", "ana@isu.edu", "more_daytime"), 1).unwrap();

        assert!(!c.reset(false));
        assert_eq!(c.votes().len(), 1);

        assert!(c.reset(true));
        assert!(c.votes().is_empty());
        assert_eq!(c.results().total, 0);
    }

    #[test]
    fn test_email_reusable_after_reset() {
        let c = controller();
        c.submit_at(&SubmitForm::new("Ana", "ana@isu.edu", "more_daytime"), 1).unwrap();
        c.reset(true);
        assert!(c.submit_at(&SubmitForm::new("Ana", "ana@isu.edu", "more_evening"), 2).is_ok());
    }

    #[test]
    fn test_poll_messages() {
        assert_eq!(
            PollMessage::from(Rejection::MissingFields),
            PollMessage::error("Please fill out your name, email, and select an option.")
        );
        let duplicate: PollMessage = Rejection::DuplicateEmail.into();
        assert!(duplicate.is_error);
        assert!(duplicate.text.starts_with("This ISU email has already voted"));

        let c = controller();
        let outcome = c.submit_at(&SubmitForm::new("Ana", "ana@isu.edu", "more_daytime"), 1);
        assert_eq!(PollMessage::from(&outcome), PollMessage::recorded());
        assert!(!PollMessage::cleared().is_error);
    }

    #[test]
    fn test_choice_keys_and_labels() {
        for option in PollOption::ALL {
            assert_eq!(PollOption::from_key(option.key()), Some(option));
            assert_eq!(Choice::from(option.key()), Choice::Known(option));
        }
        assert_eq!(Choice::from("more_daytime ").option(), None);
        assert_eq!(Choice::from("x").label(), "x");
        assert_eq!(
            serde_json::to_string(&Choice::Known(PollOption::BetterFrequency)).unwrap(),
            "\"better_frequency\""
        );
    }

    #[test]
    fn test_counter_reaches_target_in_configured_steps() {
        let mut counter = CounterAnimation::new(1500.0);
        let mut last = String::new();
        for _ in 0..39 {
            last = counter.tick();
        }
        assert!(!counter.is_done());
        assert_eq!(last, "1,463");
        assert_eq!(counter.tick(), "1,500");
        assert!(counter.is_done());
        assert_eq!(counter.tick(), "1,500");
    }

    #[test]
    fn test_counter_small_target_clamps() {
        let mut counter = CounterAnimation::new(12.0);
        let mut ticks = 0;
        while !counter.is_done() && ticks < 100 {
            counter.tick();
            ticks += 1;
        }
        assert!(ticks <= COUNTER_STEPS + 1);
        assert_eq!(counter.display(), "12");
        assert_eq!(CounterAnimation::step_interval_ms(COUNTER_DURATION_MS, COUNTER_STEPS), 30);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-1200), "-1,200");
    }

    #[test]
    fn test_chart_fill_percents() {
        assert_eq!(leading_number("12 routes"), Some(12));
        assert_eq!(leading_number("Weekend: 4 routes"), Some(4));
        assert_eq!(leading_number("none"), None);

        let fills = chart_fill_percents(&["10 routes", "5 routes", "n/a"]);
        assert_eq!(fills, vec![Some(100.0), Some(50.0), None]);
        assert_eq!(chart_fill_percents(&["0 routes"]), vec![Some(0.0)]);
        assert_eq!(toggle_label(false), "Show more");
        assert_eq!(toggle_label(true), "Show less");
    }

    fn arb_choice() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("more_daytime".to_string()),
            Just("more_evening".to_string()),
            Just("more_coverage".to_string()),
            Just("better_frequency".to_string()),
            "[a-z_]{1,12}",
        ]
    }

    fn arb_votes() -> impl Strategy<Value = Vec<VoteRecord>> {
        prop::collection::btree_set("[a-z0-9]{1,8}", 0..20).prop_flat_map(|locals| {
            let n = locals.len();
            (
                Just(locals),
                prop::collection::vec(("[A-Za-z]{1,10}", arb_choice(), 0i64..4_000_000_000_000), n),
            )
                .prop_map(|(locals, fields)| {
                    locals.into_iter()
                        .zip(fields)
                        .map(|(local, (name, choice, timestamp))| VoteRecord {
                            name,
                            email: format!("{local}@isu.edu"),
                            choice: Choice::from(choice),
                            timestamp,
                        })
                        .collect::<Vec<_>>()
                })
        })
    }

    proptest! {
        #[test]
        fn fresh_email_grows_store_by_one(votes in arb_votes(), choice in arb_choice()) {
            let c = controller();
            c.store().save(&votes);
            let recorded = c.submit_at(&SubmitForm::new("New Voter", "fresh-voter@isu.edu", choice), 7);
            prop_assert!(recorded.is_ok());
            prop_assert_eq!(c.votes().len(), votes.len() + 1);
        }

        #[test]
        fn reused_email_leaves_store_unchanged(votes in arb_votes(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!votes.is_empty());
            let c = controller();
            c.store().save(&votes);
            let before = c.votes();

            let email = format!("  {} ", votes[pick.index(votes.len())].email.to_uppercase());
            let outcome = c.submit_at(&SubmitForm::new("Again", email, "more_daytime"), 9);
            prop_assert_eq!(outcome, Err(Rejection::DuplicateEmail));
            prop_assert_eq!(c.votes(), before);
        }

        #[test]
        fn tally_total_is_sum_of_counts(votes in arb_votes()) {
            let t = tally(&votes);
            let sum: u32 = PollOption::ALL.iter().map(|&o| t.count(o)).sum();
            prop_assert_eq!(t.total(), sum);
            for option in PollOption::ALL {
                prop_assert!(t.count(option) as usize <= votes.len());
            }
            let known = votes.iter().filter(|v| v.choice.option().is_some()).count();
            prop_assert_eq!(t.total() as usize, known);
        }

        #[test]
        fn store_round_trip(votes in arb_votes()) {
            let store = JsonVoteStore::new(MemorySlot::new());
            store.save(&votes);
            prop_assert_eq!(store.load(), votes);
        }
    }
}
