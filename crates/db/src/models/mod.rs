//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//! - A `Deserialize` list-params struct for the query string

pub mod blob_ref;
pub mod contact;
pub mod gallery;
pub mod hero_image;
pub mod message;
pub mod notice;
pub mod user;
pub mod youtube_video;
