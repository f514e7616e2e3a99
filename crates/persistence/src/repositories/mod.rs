//! Repository implementations for database operations.

pub mod event;
pub mod group;
pub mod user;

pub use event::EventRepository;
pub use group::GroupRepository;
pub use user::UserRepository;
