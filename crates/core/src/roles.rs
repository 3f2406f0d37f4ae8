//! Account tier constants.
//!
//! These must match the `ck_users_role` check constraint in
//! `20260301000001_create_users.sql`.

use crate::error::CoreError;

pub const ROLE_PRO: &str = "pro";
pub const ROLE_SIMPLE: &str = "simple";

/// Role assigned at registration when none is supplied.
pub const DEFAULT_ROLE: &str = ROLE_SIMPLE;

pub const VALID_ROLES: &[&str] = &[ROLE_PRO, ROLE_SIMPLE];

/// Validate that a role (or movie status) is one of the accepted tiers.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        )))
    }
}
