//! Custom request extractors.
//!
//! Both extractors reject with the owning resource's wording, so handlers
//! never see malformed input.

mod resource_id;
mod validated_json;

pub use resource_id::{parse_id, ResourceId};
pub use validated_json::ValidatedJson;
