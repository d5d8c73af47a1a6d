//! Resource-shape descriptions for the generic CRUD handler set.

use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

/// Names and fixed wording for one resource kind.
///
/// All response messages are derived from these strings so every resource
/// answers with the same vocabulary.
#[derive(Debug)]
pub struct Descriptor {
    /// Lowercase singular, e.g. `user`
    pub singular: &'static str,
    /// Lowercase plural, e.g. `users`
    pub plural: &'static str,
    /// Capitalized singular, e.g. `User`
    pub title: &'static str,
    /// Capitalized plural, e.g. `Users`
    pub plural_title: &'static str,
    /// Detail returned when a body misses a required field
    pub required_fields: &'static str,
    /// Message returned when a create hits a uniqueness rule
    pub conflict_message: &'static str,
    /// Detail returned alongside `conflict_message`
    pub conflict_detail: &'static str,
}

impl Descriptor {
    pub fn invalid_id(&self) -> String {
        format!("Invalid {} id", self.singular)
    }

    pub fn not_found(&self) -> String {
        format!("{} not found", self.title)
    }
}

/// A record kind served by the CRUD handler set.
///
/// `Payload` is the request body as received (every field optional so that
/// presence is checked by validation, not by deserialization). `Fields` is
/// the normalized set of writable columns handed to the gateway, with
/// defaults already applied.
pub trait Resource: Send + Sync + 'static {
    type Record: Serialize + Send + Sync + 'static;
    type Payload: DeserializeOwned + Validate + Send + 'static;
    type Fields: Send + 'static;

    fn descriptor() -> &'static Descriptor;

    /// Convert a payload that already passed validation.
    fn into_fields(payload: Self::Payload) -> Self::Fields;
}

/// Treat empty strings like absent values.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
