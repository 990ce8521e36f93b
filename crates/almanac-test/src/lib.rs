//! Almanac - integration test support.
//!
//! Fixtures shared by the integration tests: event builders, date helpers and
//! the invariants every expansion result must satisfy.

use almanac_core::model::{Event, RepeatRule, RepeatType};
use almanac_repeat::calendar::{format_date, parse_date};
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` literal; panics on malformed test input.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixture, malformed literals should panic")]
pub fn date(value: &str) -> NaiveDate {
    parse_date(value).expect("test date literal should be valid")
}

/// Event with the defaults the form layer fills in.
#[must_use]
pub fn make_event(id: &str, anchor: &str) -> Event {
    Event {
        id: id.to_string(),
        title: "Test event".to_string(),
        date: date(anchor),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        description: String::new(),
        location: String::new(),
        category: String::new(),
        notification_time: 10,
        repeat: RepeatRule::default(),
    }
}

/// Repeating event with an optional inclusive end date.
#[must_use]
pub fn make_repeating(
    id: &str,
    anchor: &str,
    kind: RepeatType,
    interval: i64,
    end_date: Option<&str>,
) -> Event {
    let mut event = make_event(id, anchor);
    event.repeat = RepeatRule {
        kind,
        interval: Some(interval),
        end_date: end_date.map(date),
    };
    event
}

#[must_use]
pub fn dates_of(events: &[Event]) -> Vec<String> {
    events.iter().map(|event| format_date(event.date)).collect()
}

/// ## Summary
/// Asserts the ordering and bounds every expansion must honour.
///
/// # Panics
/// Panics with a description of the first violated property.
pub fn assert_expansion_invariants(
    event: &Event,
    instances: &[Event],
    range_start: NaiveDate,
    range_end: NaiveDate,
    stop_at: NaiveDate,
) {
    for pair in instances.windows(2) {
        assert!(
            pair[0].date < pair[1].date,
            "{}: {} is not before {}",
            event.id,
            pair[0].date,
            pair[1].date
        );
    }

    for instance in instances {
        assert!(instance.date >= range_start, "{}: {} before window", event.id, instance.date);
        assert!(instance.date <= range_end, "{}: {} after window", event.id, instance.date);
        assert!(instance.date >= event.date, "{}: {} before anchor", event.id, instance.date);
        assert!(instance.date <= stop_at, "{}: {} after stop date", event.id, instance.date);
        assert_eq!(instance.id, event.id);
        assert_eq!(instance.repeat, event.repeat);
    }
}
