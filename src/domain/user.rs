//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::resource::{non_empty, Descriptor, Resource};
use crate::config::ROLE_USER;

static DESCRIPTOR: Descriptor = Descriptor {
    singular: "user",
    plural: "users",
    title: "User",
    plural_title: "Users",
    required_fields: "name, email, and password are required",
    conflict_message: "Email already exists",
    conflict_detail: "A user with this email already exists",
};

/// User record as stored and returned by the API.
///
/// The password is kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    /// Phone number
    pub tel: Option<String>,
    pub role: String,
}

/// Writable user columns, defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub tel: Option<String>,
    pub role: String,
}

/// User create/replace request body
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    pub tel: Option<String>,
    pub role: Option<String>,
}

/// Marker type describing the `/users` resource
pub struct UserResource;

impl Resource for UserResource {
    type Record = User;
    type Payload = UserPayload;
    type Fields = UserFields;

    fn descriptor() -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn into_fields(payload: UserPayload) -> UserFields {
        UserFields {
            name: payload.name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            password: payload.password.unwrap_or_default(),
            tel: non_empty(payload.tel),
            role: non_empty(payload.role).unwrap_or_else(|| ROLE_USER.to_string()),
        }
    }
}
