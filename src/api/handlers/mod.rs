//! HTTP request handlers.

pub mod resource_handler;

pub use resource_handler::{resource_routes, ResourceState};
