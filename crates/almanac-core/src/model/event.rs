use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::repeat::RepeatRule;

/// ## Summary
/// Calendar event as created by the form layer and stored by persistence.
///
/// `date` is the recurrence anchor for repeating events. Times are local
/// `HH:MM` strings and are not interpreted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    /// Minutes before start.
    #[serde(default)]
    pub notification_time: u32,
    #[serde(default)]
    pub repeat: RepeatRule,
}

/// A materialized occurrence: the owning event with `date` replaced.
pub type Instance = Event;

impl Event {
    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.repeat.kind.is_recurring()
    }

    /// Copy of this event moved to `date`; every other field is kept.
    #[must_use]
    pub fn with_date(&self, date: NaiveDate) -> Instance {
        Self {
            date,
            ..self.clone()
        }
    }
}
