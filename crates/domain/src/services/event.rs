//! Event management service.
//!
//! Events are created either standalone or scoped to an existing group. The
//! group-scoped path is the only place where a create can be refused.

use std::sync::Arc;

use tracing::{info, warn};

use super::store::{EventStore, GroupStore};
use crate::error::{DomainError, DomainResult};
use crate::models::{Event, NewEvent};

#[derive(Clone)]
pub struct EventService {
    events: Arc<dyn EventStore>,
    groups: Arc<dyn GroupStore>,
}

impl EventService {
    pub fn new(events: Arc<dyn EventStore>, groups: Arc<dyn GroupStore>) -> Self {
        Self { events, groups }
    }

    /// Persist an event with no group reference.
    pub async fn create(&self, event: NewEvent) -> DomainResult<Event> {
        let event = self.events.insert(event, None).await?;
        info!(event_id = event.id, "Event created");
        Ok(event)
    }

    /// Persist an event referencing the group identified by `group_id`.
    ///
    /// Fails with [`DomainError::GroupNotFound`] without writing anything when
    /// the group does not exist.
    pub async fn create_for_group(&self, group_id: i64, event: NewEvent) -> DomainResult<Event> {
        let Some(group) = self.groups.find_by_id(group_id).await? else {
            warn!(group_id, "Refusing to create event for unknown group");
            return Err(DomainError::GroupNotFound(group_id));
        };

        let event = self.events.insert(event, Some(&group)).await?;
        info!(event_id = event.id, group_id, "Event created for group");
        Ok(event)
    }

    pub async fn list(&self) -> DomainResult<Vec<Event>> {
        self.events.list_all().await
    }
}
