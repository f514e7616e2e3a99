//! Event repository for database operations.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use domain::models::{Event, Group, NewEvent};
use domain::services::EventStore;
use domain::DomainResult;
use sqlx::PgPool;

use crate::entities::{EventEntity, EventWithGroupEntity};
use crate::metrics::QueryTimer;

/// Repository for event-related database operations.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Creates a new EventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new event. `group_id` is checked by the foreign key on `events.group_id`.
    pub async fn create_event(
        &self,
        title: Option<&str>,
        date: Option<NaiveDateTime>,
        group_id: Option<i64>,
    ) -> Result<EventEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_event");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            INSERT INTO events (title, date, group_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, date, group_id, created_at
            "#,
        )
        .bind(title)
        .bind(date)
        .bind(group_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Get all events joined with their groups.
    pub async fn find_all_events(&self) -> Result<Vec<EventWithGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_events");
        let result = sqlx::query_as::<_, EventWithGroupEntity>(
            r#"
            SELECT e.id, e.title, e.date, e.group_id, e.created_at,
                   g.name AS group_name,
                   g.description AS group_description,
                   g.created_at AS group_created_at
            FROM events e
            LEFT JOIN groups g ON g.id = e.group_id
            ORDER BY e.id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn insert(&self, event: NewEvent, group: Option<&Group>) -> DomainResult<Event> {
        let entity = self
            .create_event(event.title.as_deref(), event.date, group.map(|g| g.id))
            .await?;
        Ok(entity.into_event(group.cloned()))
    }

    async fn list_all(&self) -> DomainResult<Vec<Event>> {
        let entities = self.find_all_events().await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }
}
