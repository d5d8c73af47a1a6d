//! Domain layer - Core business entities and logic
//!
//! This module contains the records served by the API, the payloads that
//! create or replace them, and the [`Resource`] description that lets a
//! single generic handler set serve every record kind.

pub mod resource;
pub mod room;
pub mod user;

pub use resource::{Descriptor, Resource};
pub use room::{Room, RoomFields, RoomPayload, RoomResource};
pub use user::{User, UserFields, UserPayload, UserResource};
