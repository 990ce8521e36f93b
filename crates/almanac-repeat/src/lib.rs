//! Recurrence expansion for calendar events.
//!
//! This crate computes the next occurrence of a repeating event and expands
//! repeat rules into the ordered instances that intersect a date window,
//! bounded by a global horizon. Everything works on UTC calendar dates and
//! is pure: "now" is always an argument.

pub mod calendar;
pub mod collapse;
pub mod expand;
pub mod occurrence;
pub mod view;

pub use collapse::{
    base_event_id, collapse_to_next_occurrence, instance_id, resolve_base_event, split_instance_id,
};
pub use expand::{RecurrenceExpander, generate_instances};
pub use occurrence::{next_daily, next_monthly, next_occurrence, next_weekly, next_yearly};
pub use view::{CalendarView, view_window};
