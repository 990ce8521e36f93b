use almanac_core::model::RepeatType;
use almanac_repeat::{
    RecurrenceExpander, base_event_id, collapse_to_next_occurrence, resolve_base_event,
    split_instance_id,
};
use almanac_test::{date, make_event, make_repeating};
use chrono::{TimeZone, Utc};

/// ## Summary
/// One row per series, ids rewritten, base records untouched.
#[test_log::test]
fn collapse_projects_one_row_per_series() {
    let events = vec![
        make_repeating("e1", "2025-01-01", RepeatType::Daily, 1, None),
        make_repeating("e2", "2025-01-01", RepeatType::Weekly, 1, None),
        make_repeating("e3", "2024-02-29", RepeatType::Yearly, 1, None),
        make_event("single", "2024-12-24"),
    ];
    let now = Utc.with_ymd_and_hms(2025, 2, 28, 8, 0, 0).unwrap();

    let rows = collapse_to_next_occurrence(&events, now);
    let ids: Vec<_> = rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(
        ids,
        ["e1:2025-02-28", "e2:2025-03-05", "e3:2028-02-29", "single"]
    );

    assert_eq!(rows[3], events[3]);
    for (row, base) in rows.iter().zip(&events).take(3) {
        assert_eq!(row.title, base.title);
        assert_eq!(row.repeat, base.repeat);
        assert_eq!(base_event_id(&row.id), base.id);
    }
}

/// ## Summary
/// A collapsed row resolves back to its stored event for edit and delete.
#[test_log::test]
fn collapsed_ids_resolve_to_base_event() {
    let events = vec![
        make_repeating("weekly", "2025-01-01", RepeatType::Weekly, 2, None),
        make_event("other", "2025-01-01"),
    ];
    let now = Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0).unwrap();

    let rows = collapse_to_next_occurrence(&events, now);
    let (base, occurrence) = split_instance_id(&rows[0].id);
    assert_eq!(base, "weekly");
    assert_eq!(occurrence, Some(date("2025-01-15")));
    assert_eq!(resolve_base_event(&events, &rows[0].id), Some(&events[0]));
}

/// ## Summary
/// The collapsed date is the first instance a window starting today would show.
#[test_log::test]
fn collapse_matches_first_expanded_instance() {
    let expander = RecurrenceExpander::new(date("2030-12-31"));
    let now = Utc.with_ymd_and_hms(2025, 4, 1, 23, 59, 59).unwrap();
    let today = now.date_naive();

    for kind in [
        RepeatType::Daily,
        RepeatType::Weekly,
        RepeatType::Monthly,
        RepeatType::Yearly,
    ] {
        for interval in [1, 2, 3] {
            let event = make_repeating("s", "2024-01-31", kind.clone(), interval, None);
            let rows = collapse_to_next_occurrence(std::slice::from_ref(&event), now);
            let first = expander.generate_until_cap(&event, today);
            assert_eq!(Some(rows[0].date), first.first().map(|i| i.date), "{kind} / {interval}");
        }
    }
}
