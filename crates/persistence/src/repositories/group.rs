//! Group repository for database operations.

use async_trait::async_trait;
use domain::models::{Group, NewGroup};
use domain::services::GroupStore;
use domain::DomainResult;
use sqlx::PgPool;

use crate::entities::GroupEntity;
use crate::metrics::QueryTimer;

/// Repository for group-related database operations.
#[derive(Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    /// Creates a new GroupRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new group.
    pub async fn create_group(
        &self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<GroupEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_group");
        let result = sqlx::query_as::<_, GroupEntity>(
            r#"
            INSERT INTO groups (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Get all groups.
    pub async fn find_all_groups(&self) -> Result<Vec<GroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_groups");
        let result = sqlx::query_as::<_, GroupEntity>(
            r#"
            SELECT id, name, description, created_at
            FROM groups
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a group by its id.
    pub async fn find_group_by_id(&self, id: i64) -> Result<Option<GroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_group_by_id");
        let result = sqlx::query_as::<_, GroupEntity>(
            r#"
            SELECT id, name, description, created_at
            FROM groups
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[async_trait]
impl GroupStore for GroupRepository {
    async fn insert(&self, group: NewGroup) -> DomainResult<Group> {
        let entity = self
            .create_group(group.name.as_deref(), group.description.as_deref())
            .await?;
        Ok(entity.into())
    }

    async fn list_all(&self) -> DomainResult<Vec<Group>> {
        let entities = self.find_all_groups().await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Group>> {
        Ok(self.find_group_by_id(id).await?.map(Into::into))
    }
}
