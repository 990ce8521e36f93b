//! Almanac core - event data model, configuration, errors and logging shared
//! by the recurrence engine and its consumers.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod model;

pub use error::{CoreError, CoreResult};
pub use model::{Event, Frequency, Instance, RepeatRule, RepeatType};
