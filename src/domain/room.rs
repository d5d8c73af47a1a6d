//! Room domain entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::resource::{non_empty, Descriptor, Resource};

static DESCRIPTOR: Descriptor = Descriptor {
    singular: "room",
    plural: "rooms",
    title: "Room",
    plural_title: "Rooms",
    required_fields: "name is required",
    conflict_message: "Room name already exists",
    conflict_detail: "A room with this name already exists",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomFields {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct RoomPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Marker type describing the `/rooms` resource
pub struct RoomResource;

impl Resource for RoomResource {
    type Record = Room;
    type Payload = RoomPayload;
    type Fields = RoomFields;

    fn descriptor() -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn into_fields(payload: RoomPayload) -> RoomFields {
        RoomFields {
            name: payload.name.unwrap_or_default(),
            description: non_empty(payload.description),
        }
    }
}
