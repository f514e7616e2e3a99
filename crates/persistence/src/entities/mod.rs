//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod event;
pub mod group;
pub mod user;

pub use event::{EventEntity, EventWithGroupEntity};
pub use group::GroupEntity;
pub use user::UserEntity;
