//! Resource API - REST CRUD service for users and rooms.
//!
//! One generic handler set serves every resource; each resource supplies a
//! [`domain::Resource`] description and a [`infra::Gateway`] implementation.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Records, payloads and resource descriptions
//! - **infra**: Database, migrations and persistence gateways
//! - **api**: Generic handlers, extractors and routes
//! - **types**: Response envelope
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Resource, Room, RoomResource, User, UserResource};
pub use errors::{AppError, AppResult};
pub use infra::{Database, Gateway, GatewayError, GatewayResult};
