//! Cross-check against the `rrule` crate.
//!
//! RFC 5545 drops occurrences that fall on dates a month does not have, which
//! is the same skip-never-clamp rule the engine follows, so the two must
//! agree for plain daily, weekly, monthly and yearly rules.

use almanac_core::model::{Frequency, RepeatType};
use almanac_repeat::RecurrenceExpander;
use almanac_test::{date, make_repeating};
use chrono::{NaiveDate, Utc};

fn rfc_occurrences(
    frequency: Frequency,
    anchor: NaiveDate,
    interval: i64,
    until: NaiveDate,
    window: (NaiveDate, NaiveDate),
) -> anyhow::Result<Vec<NaiveDate>> {
    let rule = format!(
        "DTSTART:{}T000000Z\nRRULE:FREQ={};INTERVAL={interval};UNTIL={}T000000Z",
        anchor.format("%Y%m%d"),
        frequency.as_str().to_uppercase(),
        until.format("%Y%m%d"),
    );
    let set = rule.parse::<rrule::RRuleSet>()?;

    Ok(set
        .all(u16::MAX)
        .dates
        .into_iter()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .filter(|day| (window.0..=window.1).contains(day))
        .collect())
}

fn engine_occurrences(
    expander: &RecurrenceExpander,
    kind: RepeatType,
    anchor: &str,
    interval: i64,
    window: (NaiveDate, NaiveDate),
) -> Vec<NaiveDate> {
    let event = make_repeating("oracle", anchor, kind, interval, None);
    expander
        .generate_instances(&event, window.0, window.1)
        .into_iter()
        .map(|instance| instance.date)
        .collect()
}

/// ## Summary
/// Engine expansions equal RFC 5545 expansions across anchors, intervals and
/// windows.
#[test_log::test]
fn expansions_agree_with_rfc5545() {
    let cap = date("2031-12-31");
    let expander = RecurrenceExpander::new(cap);
    let anchors = ["2024-01-31", "2024-03-29", "2024-05-30", "2025-01-01", "2025-08-15"];
    let windows = [
        (date("2024-01-01"), date("2024-12-31")),
        (date("2025-02-01"), date("2025-03-31")),
        (date("2027-06-10"), date("2031-12-31")),
    ];

    for anchor in anchors {
        for frequency in [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Monthly,
            Frequency::Yearly,
        ] {
            for interval in [1, 2, 3, 7] {
                for window in windows {
                    let expected = rfc_occurrences(frequency, date(anchor), interval, cap, window)
                        .expect("rrule should expand");
                    let actual =
                        engine_occurrences(&expander, frequency.into(), anchor, interval, window);
                    assert_eq!(
                        actual, expected,
                        "{frequency} every {interval} from {anchor} in {window:?}"
                    );
                }
            }
        }
    }
}

/// ## Summary
/// A yearly 29 February rule recurs on every leap day, as RFC 5545 does for
/// an interval of one.
#[test_log::test]
fn leap_day_yearly_agrees_with_rfc5545() {
    let cap = date("2040-12-31");
    let expander = RecurrenceExpander::new(cap);
    let window = (date("2023-01-01"), cap);

    let expected = rfc_occurrences(Frequency::Yearly, date("2024-02-29"), 1, cap, window)
        .expect("rrule should expand");
    let actual = engine_occurrences(&expander, RepeatType::Yearly, "2024-02-29", 1, window);

    assert_eq!(
        actual,
        [
            date("2024-02-29"),
            date("2028-02-29"),
            date("2032-02-29"),
            date("2036-02-29"),
            date("2040-02-29"),
        ]
    );
    assert_eq!(actual, expected);
}
