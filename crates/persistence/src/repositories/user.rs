//! User repository for database operations.

use async_trait::async_trait;
use domain::models::{NewUser, User};
use domain::services::UserStore;
use domain::DomainResult;
use sqlx::PgPool;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user.
    pub async fn create_user(
        &self,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Get all users.
    pub async fn find_all_users(&self) -> Result<Vec<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_users");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let entity = self
            .create_user(user.name.as_deref(), user.email.as_deref())
            .await?;
        Ok(entity.into())
    }

    async fn list_all(&self) -> DomainResult<Vec<User>> {
        let entities = self.find_all_users().await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }
}
