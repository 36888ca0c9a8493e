//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- any valid Bearer token.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//!
//! Both read only request headers, so they run before any body extractor.

pub mod auth;
pub mod rbac;
