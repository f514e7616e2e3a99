//! Domain models for ConnectHub.

pub mod event;
pub mod group;
pub mod user;

pub use event::{Event, NewEvent};
pub use group::{Group, NewGroup};
pub use user::{NewUser, User};
