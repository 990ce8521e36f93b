//! Week and month views over a mixed list of single and repeating events.

use almanac_core::model::Event;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::days_in_month;
use crate::expand::RecurrenceExpander;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    /// Sunday through Saturday.
    Week,
    Month,
}

/// ## Summary
/// Closed date range shown by `view` around `current`.
///
/// Weeks start on Sunday. Returns `current` alone if the range would leave
/// the representable dates.
#[must_use]
pub fn view_window(current: NaiveDate, view: CalendarView) -> (NaiveDate, NaiveDate) {
    let window = match view {
        CalendarView::Week => {
            let offset = u64::from(current.weekday().num_days_from_sunday());
            current
                .checked_sub_days(Days::new(offset))
                .zip(current.checked_add_days(Days::new(6 - offset)))
        }
        CalendarView::Month => {
            let last = days_in_month(current.year(), current.month0());
            current.with_day(1).zip(current.with_day(last))
        }
    };
    window.unwrap_or((current, current))
}

fn matches_search(event: &Event, needle: &str) -> bool {
    [&event.title, &event.description, &event.location]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

impl RecurrenceExpander {
    /// ## Summary
    /// Rows displayed by a calendar view, optionally narrowed by a search term.
    ///
    /// Repeating events are expanded over the view window; single events are
    /// kept when their stored date is inside it. The search is a
    /// case-insensitive substring match on title, description and location;
    /// a blank term keeps everything. Rows are ordered by date, ties in input
    /// order.
    #[must_use]
    #[tracing::instrument(level = "debug", skip(self, events), fields(count = events.len()))]
    pub fn filtered_events(
        &self,
        events: &[Event],
        search: &str,
        current: NaiveDate,
        view: CalendarView,
    ) -> Vec<Event> {
        let (start, end) = view_window(current, view);
        let needle = search.trim().to_lowercase();

        let mut rows: Vec<Event> = events
            .iter()
            .flat_map(|event| {
                if event.is_recurring() {
                    self.generate_instances(event, start, end)
                } else if (start..=end).contains(&event.date) {
                    vec![event.clone()]
                } else {
                    Vec::new()
                }
            })
            .filter(|event| needle.is_empty() || matches_search(event, &needle))
            .collect();

        rows.sort_by_key(|event| event.date);
        tracing::debug!(%start, %end, shown = rows.len(), "Filtered events for view");
        rows
    }
}
