//! User management service.

use std::sync::Arc;

use tracing::info;

use super::store::UserStore;
use crate::error::DomainResult;
use crate::models::{NewUser, User};

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Persist a new user. No validation and no duplicate detection.
    pub async fn create(&self, user: NewUser) -> DomainResult<User> {
        let user = self.store.insert(user).await?;
        info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.store.list_all().await
    }
}
