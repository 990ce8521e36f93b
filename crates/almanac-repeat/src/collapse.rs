//! Series collapse and instance identifiers.
//!
//! Collapsing rewrites each repeating event into one row dated at its next
//! occurrence, for lists that show one row per series. Collapsed rows carry
//! an instance id `"{baseId}:{YYYY-MM-DD}"` so the editing and deletion
//! layers can find the stored event again.

use almanac_core::constants::INSTANCE_ID_SEPARATOR;
use almanac_core::model::Event;
use chrono::{DateTime, NaiveDate, Utc};

use crate::calendar::{format_date, parse_date, to_date_only};
use crate::occurrence::next_occurrence;

/// ## Summary
/// One row per input event, repeating events moved to their next occurrence
/// on or after `now`'s UTC date.
///
/// Non-recurring rows pass through unchanged, as do rows whose next
/// occurrence cannot be represented.
#[must_use]
#[tracing::instrument(level = "debug", skip(events), fields(count = events.len()))]
pub fn collapse_to_next_occurrence(events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
    let today = to_date_only(now);

    events
        .iter()
        .map(|event| {
            let Some(frequency) = event.repeat.kind.frequency() else {
                return event.clone();
            };

            match next_occurrence(
                frequency,
                event.anchor(),
                today,
                event.repeat.effective_interval(),
            ) {
                Some(next) => with_next_date(event, next),
                None => {
                    tracing::warn!(event_id = %event.id, "No representable next occurrence");
                    event.clone()
                }
            }
        })
        .collect()
}

fn with_next_date(event: &Event, next: NaiveDate) -> Event {
    Event {
        id: instance_id(&event.id, next),
        ..event.with_date(next)
    }
}

/// Builds `"{base_id}:{YYYY-MM-DD}"`.
#[must_use]
pub fn instance_id(base_id: &str, date: NaiveDate) -> String {
    format!("{base_id}{INSTANCE_ID_SEPARATOR}{}", format_date(date))
}

/// ## Summary
/// Splits an instance id into base id and occurrence date.
///
/// Only a trailing `:YYYY-MM-DD` counts; any other id is returned whole as
/// the base with no date.
#[must_use]
pub fn split_instance_id(id: &str) -> (&str, Option<NaiveDate>) {
    id.rsplit_once(INSTANCE_ID_SEPARATOR)
        .and_then(|(base, suffix)| parse_date(suffix).ok().map(|date| (base, Some(date))))
        .unwrap_or((id, None))
}

#[must_use]
pub fn base_event_id(id: &str) -> &str {
    split_instance_id(id).0
}

/// Stored event that an id (base or instance) refers to.
#[must_use]
pub fn resolve_base_event<'a>(events: &'a [Event], id: &str) -> Option<&'a Event> {
    events
        .iter()
        .find(|event| event.id == id)
        .or_else(|| {
            let base = base_event_id(id);
            events.iter().find(|event| event.id == base)
        })
}
