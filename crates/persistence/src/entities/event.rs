//! Event entity (database row mapping).

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::FromRow;

use domain::models::{Event, Group};

/// Database row mapping for the events table.
#[derive(Debug, Clone, FromRow)]
pub struct EventEntity {
    pub id: i64,
    pub title: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub group_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl EventEntity {
    /// Convert to the domain model, attaching the already-loaded group.
    pub fn into_event(self, group: Option<Group>) -> Event {
        Event {
            id: self.id,
            title: self.title,
            date: self.date,
            group_id: self.group_id,
            group,
            created_at: self.created_at,
        }
    }
}

/// Event row joined with its (optional) group.
#[derive(Debug, Clone, FromRow)]
pub struct EventWithGroupEntity {
    pub id: i64,
    pub title: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub group_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub group_name: Option<String>,
    pub group_description: Option<String>,
    pub group_created_at: Option<DateTime<Utc>>,
}

impl From<EventWithGroupEntity> for Event {
    fn from(entity: EventWithGroupEntity) -> Self {
        // group_created_at is NOT NULL in the groups table, so it is present
        // exactly when the join matched.
        let group = match (entity.group_id, entity.group_created_at) {
            (Some(id), Some(created_at)) => Some(Group {
                id,
                name: entity.group_name,
                description: entity.group_description,
                created_at,
            }),
            _ => None,
        };

        Self {
            id: entity.id,
            title: entity.title,
            date: entity.date,
            group_id: entity.group_id,
            group,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(group_id: Option<i64>, group_created_at: Option<DateTime<Utc>>) -> EventWithGroupEntity {
        EventWithGroupEntity {
            id: 10,
            title: Some("X".to_string()),
            date: None,
            group_id,
            created_at: Utc::now(),
            group_name: group_created_at.map(|_| "A".to_string()),
            group_description: None,
            group_created_at,
        }
    }

    #[test]
    fn test_joined_row_with_group() {
        let event: Event = joined(Some(1), Some(Utc::now())).into();
        assert_eq!(event.id, 10);
        assert_eq!(event.group_id, Some(1));
        let group = event.group.unwrap();
        assert_eq!(group.id, 1);
        assert_eq!(group.name.as_deref(), Some("A"));
    }

    #[test]
    fn test_joined_row_without_group() {
        let event: Event = joined(None, None).into();
        assert!(event.group_id.is_none());
        assert!(event.group.is_none());
    }

    #[test]
    fn test_into_event_attaches_group() {
        let group = Group {
            id: 4,
            name: Some("B".to_string()),
            description: None,
            created_at: Utc::now(),
        };
        let entity = EventEntity {
            id: 2,
            title: None,
            date: None,
            group_id: Some(4),
            created_at: Utc::now(),
        };

        let event = entity.into_event(Some(group.clone()));
        assert_eq!(event.group_id, Some(4));
        assert_eq!(event.group, Some(group));
    }
}
