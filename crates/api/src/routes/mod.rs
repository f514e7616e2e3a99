//! HTTP route handlers.

pub mod events;
pub mod groups;
pub mod health;
pub mod users;
