//! Plain event records exchanged with the persistence and UI layers.

pub mod event;
pub mod repeat;

pub use event::{Event, Instance};
pub use repeat::{Frequency, RepeatRule, RepeatType, sanitize_interval};
