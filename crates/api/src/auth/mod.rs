//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing and the registration password rule.
//! - [`jwt`] -- HS256 access tokens.

pub mod jwt;
pub mod password;
