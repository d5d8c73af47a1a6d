//! API layer - HTTP handlers and routes
//!
//! This module contains all HTTP-related concerns:
//! - Generic resource handlers
//! - Custom extractors
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
