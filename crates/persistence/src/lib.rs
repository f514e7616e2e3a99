//! Persistence layer for the ConnectHub backend.
//!
//! This crate contains:
//! - Database connection management and migrations
//! - Entity definitions (database row mappings)
//! - PostgreSQL repository implementations of the domain storage gateways
//! - An in-memory store for dev mode

pub mod db;
pub mod entities;
pub mod memory;
pub mod metrics;
pub mod repositories;
