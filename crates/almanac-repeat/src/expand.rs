//! Range enumeration of repeating events.
//!
//! Expansion starts at the first occurrence inside the window rather than at
//! the anchor, so the work is proportional to the window length divided by
//! the period. Every loop is bounded by the effective stop date.

use almanac_core::config::RecurrenceConfig;
use almanac_core::constants::GLOBAL_REPEAT_CAP;
use almanac_core::model::{Event, Frequency, Instance, RepeatRule};
use chrono::{Datelike, NaiveDate};

use crate::calendar::{add_days, add_months_until_has_day, clamp_end_date};
use crate::occurrence::{next_occurrence, next_yearly};

/// ## Summary
/// Expands repeat rules into instances, never past the global horizon.
///
/// The horizon is fixed per expander; build one from configuration with
/// [`RecurrenceExpander::from_config`] or pin a date with
/// [`RecurrenceExpander::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceExpander {
    cap: NaiveDate,
}

impl Default for RecurrenceExpander {
    fn default() -> Self {
        Self::new(GLOBAL_REPEAT_CAP)
    }
}

impl RecurrenceExpander {
    #[must_use]
    pub const fn new(cap: NaiveDate) -> Self {
        Self { cap }
    }

    #[must_use]
    pub const fn from_config(config: &RecurrenceConfig) -> Self {
        Self::new(config.global_repeat_cap)
    }

    #[must_use]
    pub const fn cap(&self) -> NaiveDate {
        self.cap
    }

    /// Last date a rule may produce: its end date, clamped to the horizon.
    #[must_use]
    pub fn stop_at(&self, rule: &RepeatRule) -> NaiveDate {
        clamp_end_date(rule.end_date, self.cap)
    }

    /// ## Summary
    /// Instances of `event` inside `[range_start, range_end]`.
    ///
    /// Non-recurring and unrecognized kinds yield nothing; those events are
    /// shown by their stored date elsewhere. The result is strictly ascending
    /// and every date lies in the window, on or after the anchor and on or
    /// before [`stop_at`](Self::stop_at).
    #[must_use]
    #[tracing::instrument(
        level = "debug",
        skip(self, event),
        fields(event_id = %event.id, kind = %event.repeat.kind, cap = %self.cap)
    )]
    pub fn generate_instances(
        &self,
        event: &Event,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Vec<Instance> {
        let Some(frequency) = event.repeat.kind.frequency() else {
            tracing::trace!("Not a recurring event, nothing to expand");
            return Vec::new();
        };

        let upper = self.stop_at(&event.repeat).min(range_end);
        if range_start > upper {
            tracing::trace!(%upper, "Window ends before the first possible occurrence");
            return Vec::new();
        }

        let anchor = event.anchor();
        let interval = event.repeat.effective_interval();

        let mut instances = Vec::new();
        let mut cursor = next_occurrence(frequency, anchor, range_start, interval);

        while let Some(date) = cursor {
            if date > upper {
                break;
            }
            instances.push(event.with_date(date));

            cursor = step(frequency, anchor, date, interval).filter(|next| *next > date);
        }

        tracing::debug!(count = instances.len(), %upper, "Expanded recurring event");
        instances
    }

    /// ## Summary
    /// Instances from `range_start` up to the stop date, for callers without a
    /// window end.
    #[must_use]
    pub fn generate_until_cap(&self, event: &Event, range_start: NaiveDate) -> Vec<Instance> {
        self.generate_instances(event, range_start, self.cap)
    }
}

/// Occurrence that follows `current`, which is itself an occurrence.
fn step(
    frequency: Frequency,
    anchor: NaiveDate,
    current: NaiveDate,
    interval: u32,
) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => add_days(current, u64::from(interval)),
        Frequency::Weekly => add_days(current, 7 * u64::from(interval)),
        Frequency::Monthly => add_months_until_has_day(current, interval, anchor.day()),
        Frequency::Yearly => next_yearly(anchor, add_days(current, 1)?, interval),
    }
}

/// ## Summary
/// [`RecurrenceExpander::generate_instances`] with the default horizon.
#[must_use]
pub fn generate_instances(
    event: &Event,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<Instance> {
    RecurrenceExpander::default().generate_instances(event, range_start, range_end)
}
