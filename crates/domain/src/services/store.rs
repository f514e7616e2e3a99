//! Storage gateway traits.
//!
//! One gateway per entity kind. Implementations assign identities on insert
//! and never update or delete.

use async_trait::async_trait;

use crate::error::DomainResult;
use crate::models::{Event, Group, NewEvent, NewGroup, NewUser, User};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return the stored record.
    async fn insert(&self, user: NewUser) -> DomainResult<User>;

    /// All users ordered by identity.
    async fn list_all(&self) -> DomainResult<Vec<User>>;
}

#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Insert a new group and return the stored record.
    async fn insert(&self, group: NewGroup) -> DomainResult<Group>;

    /// All groups ordered by identity.
    async fn list_all(&self) -> DomainResult<Vec<Group>>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Group>>;
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Insert a new event, referencing `group` when given.
    ///
    /// The returned event carries the group reference and the group record.
    async fn insert(&self, event: NewEvent, group: Option<&Group>) -> DomainResult<Event>;

    /// All events ordered by identity, with their groups resolved.
    async fn list_all(&self) -> DomainResult<Vec<Event>>;
}
