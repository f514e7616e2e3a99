//! Group management service.

use std::sync::Arc;

use tracing::info;

use super::store::GroupStore;
use crate::error::DomainResult;
use crate::models::{Group, NewGroup};

#[derive(Clone)]
pub struct GroupService {
    store: Arc<dyn GroupStore>,
}

impl GroupService {
    pub fn new(store: Arc<dyn GroupStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, group: NewGroup) -> DomainResult<Group> {
        let group = self.store.insert(group).await?;
        info!(group_id = group.id, "Group created");
        Ok(group)
    }

    pub async fn list(&self) -> DomainResult<Vec<Group>> {
        self.store.list_all().await
    }
}
