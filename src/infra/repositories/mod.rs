//! Repository layer - Data access abstraction
//!
//! Each resource gets a [`Gateway`] implementation over a SeaORM
//! connection; handlers only ever see the trait.

pub(crate) mod entities;
mod gateway;
mod room_repository;
mod user_repository;

pub use gateway::{Gateway, GatewayError, GatewayResult};
pub use room_repository::RoomStore;
pub use user_repository::UserStore;
