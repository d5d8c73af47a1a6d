//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Persistence gateways for each resource

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{Gateway, GatewayError, GatewayResult, RoomStore, UserStore};
