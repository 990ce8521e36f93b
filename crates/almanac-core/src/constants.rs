use chrono::NaiveDate;

/// ## Summary
/// Absolute ceiling for generated occurrences.
///
/// No occurrence is produced after this date, whatever the rule's own end
/// date says. Deployments override it through
/// [`RecurrenceConfig`](crate::config::RecurrenceConfig).
pub const GLOBAL_REPEAT_CAP: NaiveDate = match NaiveDate::from_ymd_opt(2025, 10, 30) {
    Some(date) => date,
    None => panic!("GLOBAL_REPEAT_CAP is not a valid calendar date"),
};

/// Separator between the base event id and the occurrence date in an instance id.
pub const INSTANCE_ID_SEPARATOR: char = ':';

/// Wire format of calendar dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prefix of environment variables read by [`Settings::load`](crate::config::Settings::load).
pub const ENV_PREFIX: &str = "ALMANAC";

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "almanac.toml";
