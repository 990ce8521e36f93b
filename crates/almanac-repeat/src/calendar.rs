//! UTC calendar-date arithmetic.
//!
//! All values are `NaiveDate`s read as UTC calendar days; two values are
//! equal iff they name the same day.

use almanac_core::constants::DATE_FORMAT;
use almanac_core::error::{CoreError, CoreResult};
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

pub use almanac_core::model::sanitize_interval;

/// Months in one 400-year Gregorian cycle. After this many months every
/// calendar pattern has repeated.
pub const GREGORIAN_CYCLE_MONTHS: u32 = 400 * 12;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Normalizes an instant to its UTC calendar date.
#[must_use]
pub fn to_date_only(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// ## Summary
/// Parses a `YYYY-MM-DD` date.
///
/// ## Errors
/// Returns `CoreError::ParseError` if `value` is not a valid calendar date.
pub fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|err| CoreError::ParseError(format!("invalid date '{value}': {err}")))
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Adds whole days; `None` only past the representable range.
#[must_use]
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// First leap year that is `year` or later; `None` past `i32::MAX`.
#[must_use]
pub const fn next_leap_year_at_or_after(year: i32) -> Option<i32> {
    let mut candidate = year;
    while !is_leap_year(candidate) {
        candidate = match candidate.checked_add(1) {
            Some(next) => next,
            None => return None,
        };
    }
    Some(candidate)
}

/// ## Summary
/// Number of days in a month.
///
/// `month0` is zero-based (0 = January). Out-of-range months wrap into the
/// following years.
#[must_use]
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (year, month0) = from_month_index(i64::from(year) * 12 + i64::from(month0));
    if month0 == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[month0 as usize]
    }
}

/// Earlier of the rule's end date and the cap; the cap when there is no end date.
#[must_use]
pub fn clamp_end_date(end_date: Option<NaiveDate>, cap: NaiveDate) -> NaiveDate {
    end_date.map_or(cap, |end| end.min(cap))
}

/// Months elapsed since year 0, January.
#[must_use]
pub fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Splits a month index back into `(year, month0)`. Saturates at `i32` years.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "year is clamped to i32 and rem_euclid(12) is in 0..12"
)]
fn from_month_index(index: i64) -> (i32, u32) {
    let year = index.div_euclid(12).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    let month0 = index.rem_euclid(12) as u32;
    (year, month0)
}

/// Date with `day` in the month at `index`, if that month has the day.
#[must_use]
pub fn date_in_month(index: i64, day: u32) -> Option<NaiveDate> {
    let (year, month0) = from_month_index(index);
    if day > days_in_month(year, month0) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, day)
}

/// ## Summary
/// Advances `date` by blocks of `months` until a month contains `day`.
///
/// Months without the day are skipped, never clamped: 31 January stepped by
/// one month lands on 31 March. Returns `None` if no month within one
/// Gregorian cycle qualifies or the result is not representable.
#[must_use]
pub fn add_months_until_has_day(date: NaiveDate, months: u32, day: u32) -> Option<NaiveDate> {
    let step = i64::from(months.max(1));
    let mut index = month_index(date);

    for _ in 0..GREGORIAN_CYCLE_MONTHS {
        index += step;
        if let Some(next) = date_in_month(index, day) {
            return Some(next);
        }
    }
    None
}
