//! Event domain models.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::group::Group;

/// Represents an event, optionally scoped to a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Event {
    pub id: i64,
    pub title: Option<String>,
    #[serde(default, with = "local_date_time")]
    pub date: Option<NaiveDateTime>,
    /// Reference to the owning group, if any.
    pub group_id: Option<i64>,
    /// The referenced group, resolved by identity.
    #[serde(default)]
    pub group: Option<Group>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating an event.
///
/// The group reference is never taken from the body; it comes from the route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct NewEvent {
    pub title: Option<String>,
    #[serde(with = "local_date_time")]
    pub date: Option<NaiveDateTime>,
}

/// Serde helpers for zone-less local date-times.
///
/// Serializes as `YYYY-MM-DDTHH:MM:SS`. Accepts browser `datetime-local`
/// values (`YYYY-MM-DDTHH:MM`) as well as full seconds with optional fraction.
pub mod local_date_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    const INPUT_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    /// Parses a local date-time in any of the accepted input formats.
    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        INPUT_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    }

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(OUTPUT_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => parse(&raw).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid local date-time: {}", raw))
            }),
            None => Ok(None),
        }
    }
}
