//! In-memory storage for dev mode and tests.
//!
//! Implements every storage gateway on top of plain vectors guarded by a
//! single lock. Identities start at 1 and increase per table. All data is
//! lost when the store is dropped.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use domain::models::{Event, Group, NewEvent, NewGroup, NewUser, User};
use domain::services::{EventStore, GroupStore, UserStore};
use domain::DomainResult;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    groups: Vec<Group>,
    events: Vec<Event>,
    next_user_id: i64,
    next_group_id: i64,
    next_event_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

/// In-memory database for dev mode.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let mut tables = self.tables.write();
        let user = User {
            id: next_id(&mut tables.next_user_id),
            name: user.name,
            email: user.email,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn list_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.tables.read().users.clone())
    }
}

#[async_trait]
impl GroupStore for InMemoryStore {
    async fn insert(&self, group: NewGroup) -> DomainResult<Group> {
        let mut tables = self.tables.write();
        let group = Group {
            id: next_id(&mut tables.next_group_id),
            name: group.name,
            description: group.description,
            created_at: Utc::now(),
        };
        tables.groups.push(group.clone());
        Ok(group)
    }

    async fn list_all(&self) -> DomainResult<Vec<Group>> {
        Ok(self.tables.read().groups.clone())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Group>> {
        Ok(self.tables.read().groups.iter().find(|g| g.id == id).cloned())
    }
}

#[async_trait]
impl EventStore for InMemoryStore {
    async fn insert(&self, event: NewEvent, group: Option<&Group>) -> DomainResult<Event> {
        let mut tables = self.tables.write();
        // Events are stored without the group snapshot; list_all resolves it.
        let stored = Event {
            id: next_id(&mut tables.next_event_id),
            title: event.title,
            date: event.date,
            group_id: group.map(|g| g.id),
            group: None,
            created_at: Utc::now(),
        };
        tables.events.push(stored.clone());
        Ok(Event {
            group: group.cloned(),
            ..stored
        })
    }

    async fn list_all(&self) -> DomainResult<Vec<Event>> {
        let tables = self.tables.read();
        let events = tables
            .events
            .iter()
            .map(|event| {
                let group = event
                    .group_id
                    .and_then(|id| tables.groups.iter().find(|g| g.id == id).cloned());
                Event {
                    group,
                    ..event.clone()
                }
            })
            .collect();
        Ok(events)
    }
}
