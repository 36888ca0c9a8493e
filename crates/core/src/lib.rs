//! Domain types and rules for the student association backend.
//!
//! Pure logic only: error taxonomy, field-level validation helpers,
//! pagination math, and the closed value sets each resource enforces.

pub mod contact;
pub mod error;
pub mod gallery;
pub mod hero_image;
pub mod member;
pub mod message;
pub mod notice;
pub mod pagination;
pub mod roles;
pub mod types;
pub mod validation;
pub mod youtube;
