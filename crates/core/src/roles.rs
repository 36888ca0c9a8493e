//! Well-known role name constants.
//!
//! These must match the `ck_users_role` check constraint in the users migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";

/// All valid user roles.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MEMBER];
