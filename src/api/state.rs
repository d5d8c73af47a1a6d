//! Application state - Dependency injection container.
//!
//! Holds one gateway per resource. Production wiring builds SeaORM stores
//! from a [`Database`]; tests inject fakes through [`AppState::new`].

use std::sync::Arc;

use crate::domain::{RoomResource, UserResource};
use crate::infra::{Database, Gateway, RoomStore, UserStore};

/// Application state containing all gateways (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User persistence gateway
    pub users: Arc<dyn Gateway<UserResource>>,
    /// Room persistence gateway
    pub rooms: Arc<dyn Gateway<RoomResource>>,
}

impl AppState {
    /// Create application state backed by the given database.
    pub fn from_database(database: &Database) -> Self {
        Self {
            users: Arc::new(UserStore::new(database.get_connection())),
            rooms: Arc::new(RoomStore::new(database.get_connection())),
        }
    }

    /// Create new application state with manually injected gateways.
    pub fn new(
        users: Arc<dyn Gateway<UserResource>>,
        rooms: Arc<dyn Gateway<RoomResource>>,
    ) -> Self {
        Self { users, rooms }
    }
}
