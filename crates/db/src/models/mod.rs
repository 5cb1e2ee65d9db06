//! Catalog entities and list requests.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct returned to callers (with derived status)
//! - The resource's sort key enumeration
//! - A `Deserialize` list request

pub mod event;
pub mod race;
