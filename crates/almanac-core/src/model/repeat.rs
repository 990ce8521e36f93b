use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// ## Summary
/// Repeat kind as stored on an event.
///
/// Kinds this engine does not know are kept verbatim in `Other` and behave
/// like `None`, so rows written by newer producers pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Other(String),
}

impl RepeatType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Other(raw) => raw,
        }
    }

    /// Returns the recurrence frequency, or `None` for non-recurring kinds.
    #[must_use]
    pub const fn frequency(&self) -> Option<Frequency> {
        match self {
            Self::Daily => Some(Frequency::Daily),
            Self::Weekly => Some(Frequency::Weekly),
            Self::Monthly => Some(Frequency::Monthly),
            Self::Yearly => Some(Frequency::Yearly),
            Self::None | Self::Other(_) => None,
        }
    }

    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.frequency().is_some()
    }
}

impl From<&str> for RepeatType {
    fn from(raw: &str) -> Self {
        match raw {
            "none" => Self::None,
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<Frequency> for RepeatType {
    fn from(frequency: Frequency) -> Self {
        match frequency {
            Frequency::Daily => Self::Daily,
            Frequency::Weekly => Self::Weekly,
            Frequency::Monthly => Self::Monthly,
            Frequency::Yearly => Self::Yearly,
        }
    }
}

impl std::fmt::Display for RepeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RepeatType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RepeatType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// Recurrence frequency of a repeating event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ## Summary
/// Periodic repeat rule attached to an event.
///
/// `interval` keeps whatever integer the producer sent; it is sanitized to at
/// least 1 wherever it is read and whenever it is written back out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRule {
    #[serde(rename = "type", default)]
    pub kind: RepeatType,

    #[serde(
        default,
        deserialize_with = "deserialize_interval",
        serialize_with = "serialize_interval"
    )]
    pub interval: Option<i64>,

    /// Inclusive last date chosen by the rule's author.
    #[serde(
        default,
        deserialize_with = "deserialize_end_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
}

impl RepeatRule {
    #[must_use]
    pub fn new(kind: RepeatType, interval: i64) -> Self {
        Self {
            kind,
            interval: Some(interval),
            end_date: None,
        }
    }

    #[must_use]
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Interval sanitized to at least 1.
    #[must_use]
    pub fn effective_interval(&self) -> u32 {
        sanitize_interval(self.interval)
    }
}

/// ## Summary
/// Corrects a missing or non-positive interval to 1.
///
/// Values beyond `u32::MAX` saturate.
#[must_use]
pub fn sanitize_interval(interval: Option<i64>) -> u32 {
    let interval = interval.unwrap_or(1).max(1);
    u32::try_from(interval).unwrap_or(u32::MAX)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInterval {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(#[expect(dead_code, reason = "only the variant match matters")] IgnoredAny),
}

/// Accepts any JSON value; only whole numbers survive.
#[expect(
    clippy::cast_possible_truncation,
    reason = "whole floats outside i64 saturate, which sanitizing clamps anyway"
)]
fn deserialize_interval<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    let raw = Option::<RawInterval>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawInterval::Integer(value)) => Some(value),
        Some(RawInterval::Float(value)) if value.is_finite() && value.fract() == 0.0 => {
            Some(value as i64)
        }
        Some(RawInterval::Text(text)) => text.trim().parse().ok(),
        Some(RawInterval::Float(_) | RawInterval::Other(_)) | None => None,
    })
}

#[expect(clippy::ref_option, reason = "signature required by serialize_with")]
fn serialize_interval<S: Serializer>(
    interval: &Option<i64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(sanitize_interval(*interval))
}

/// Form layers send `""` for "no end date".
fn deserialize_end_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
