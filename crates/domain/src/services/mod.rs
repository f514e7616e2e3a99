//! Domain services for ConnectHub.
//!
//! Services contain business logic that operates on domain models and talk
//! to storage only through the gateway traits in [`store`].

pub mod event;
pub mod group;
pub mod store;
pub mod user;

pub use event::EventService;
pub use group::GroupService;
pub use store::{EventStore, GroupStore, UserStore};
pub use user::UserService;
