//! Next-occurrence calculators.
//!
//! Every calculator returns the earliest date that is on or after the anchor,
//! aligned to the interval, and on or after `from`. When `from` is not after
//! the anchor the anchor itself is returned. An interval of 0 is treated as 1.
//! `None` means the answer lies outside the range `NaiveDate` can represent.

use almanac_core::model::Frequency;
use chrono::{Datelike, NaiveDate};

use crate::calendar::{
    GREGORIAN_CYCLE_MONTHS, add_days, date_in_month, month_index, next_leap_year_at_or_after,
};

/// ## Summary
/// Dispatches to the calculator for `frequency`.
#[must_use]
pub fn next_occurrence(
    frequency: Frequency,
    anchor: NaiveDate,
    from: NaiveDate,
    interval: u32,
) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => next_daily(anchor, from, interval),
        Frequency::Weekly => next_weekly(anchor, from, interval),
        Frequency::Monthly => next_monthly(anchor, from, interval),
        Frequency::Yearly => next_yearly(anchor, from, interval),
    }
}

/// Occurrences are `anchor + k * interval` days.
#[must_use]
pub fn next_daily(anchor: NaiveDate, from: NaiveDate, interval: u32) -> Option<NaiveDate> {
    if from <= anchor {
        return Some(anchor);
    }

    let interval = u64::from(interval.max(1));
    let elapsed = u64::try_from((from - anchor).num_days()).ok()?;
    let steps = elapsed.div_ceil(interval);
    add_days(anchor, steps.checked_mul(interval)?)
}

/// Occurrences keep the anchor's weekday, every `interval` weeks.
#[must_use]
pub fn next_weekly(anchor: NaiveDate, from: NaiveDate, interval: u32) -> Option<NaiveDate> {
    if from <= anchor {
        return Some(anchor);
    }

    let interval = u64::from(interval.max(1));
    let shift = (7 + anchor.weekday().num_days_from_sunday()
        - from.weekday().num_days_from_sunday())
        % 7;
    let candidate = add_days(from, u64::from(shift))?;

    let weeks = u64::try_from((candidate - anchor).num_days()).ok()? / 7;
    match weeks % interval {
        0 => Some(candidate),
        rem => add_days(candidate, (interval - rem) * 7),
    }
}

/// ## Summary
/// Occurrences fall on the anchor's day-of-month, every `interval` months.
///
/// Months that do not contain that day produce nothing; a 31st anchor never
/// lands on the 30th.
#[must_use]
pub fn next_monthly(anchor: NaiveDate, from: NaiveDate, interval: u32) -> Option<NaiveDate> {
    if from <= anchor {
        return Some(anchor);
    }

    let interval = i64::from(interval.max(1));
    let day = anchor.day();
    let anchor_index = month_index(anchor);

    let mut index = month_index(from);
    let rem = (index - anchor_index).rem_euclid(interval);
    if rem != 0 {
        index += interval - rem;
    }

    for _ in 0..GREGORIAN_CYCLE_MONTHS {
        if let Some(candidate) = date_in_month(index, day) {
            if candidate >= from {
                return Some(candidate);
            }
        }
        index += interval;
    }
    None
}

/// ## Summary
/// Occurrences fall on the anchor's month and day, every `interval` years.
///
/// A 29 February anchor ignores the interval and recurs on every leap day.
#[must_use]
pub fn next_yearly(anchor: NaiveDate, from: NaiveDate, interval: u32) -> Option<NaiveDate> {
    if from <= anchor {
        return Some(anchor);
    }

    if anchor.month() == 2 && anchor.day() == 29 {
        return next_leap_day(from);
    }

    let interval = i32::try_from(interval.max(1)).unwrap_or(i32::MAX);
    let mut year = from.year();
    let rem = (year - anchor.year()).rem_euclid(interval);
    if rem != 0 {
        year = year.checked_add(interval - rem)?;
    }

    let candidate = NaiveDate::from_ymd_opt(year, anchor.month(), anchor.day())?;
    if candidate >= from {
        return Some(candidate);
    }
    NaiveDate::from_ymd_opt(year.checked_add(interval)?, anchor.month(), anchor.day())
}

fn next_leap_day(from: NaiveDate) -> Option<NaiveDate> {
    let mut year = next_leap_year_at_or_after(from.year())?;
    let leap_day = NaiveDate::from_ymd_opt(year, 2, 29)?;
    if leap_day >= from {
        return Some(leap_day);
    }

    year = next_leap_year_at_or_after(year.checked_add(1)?)?;
    NaiveDate::from_ymd_opt(year, 2, 29)
}
