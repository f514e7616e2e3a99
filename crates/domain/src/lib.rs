//! Domain layer for the ConnectHub backend.
//!
//! This crate contains:
//! - Domain models (User, Group, Event) and their create payloads
//! - Storage gateway traits implemented by the persistence crate
//! - Business logic services
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;

pub use error::{DomainError, DomainResult};
