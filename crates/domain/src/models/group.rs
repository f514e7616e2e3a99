//! Group domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a group. Groups are the parent side of the group → events relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Group {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct NewGroup {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_group_deserialization() {
        let json = r#"{"name": "Climbers", "description": "Weekend bouldering"}"#;
        let group: NewGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.name.as_deref(), Some("Climbers"));
        assert_eq!(group.description.as_deref(), Some("Weekend bouldering"));
    }

    #[test]
    fn test_new_group_partial() {
        let group: NewGroup = serde_json::from_str(r#"{"name": "A"}"#).unwrap();
        assert_eq!(group.name.as_deref(), Some("A"));
        assert!(group.description.is_none());
    }

    #[test]
    fn test_group_round_trips_through_json() {
        let group = Group {
            id: 1,
            name: Some("A".to_string()),
            description: Some("first".to_string()),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "A");

        let parsed: Group = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, group);
    }
}
