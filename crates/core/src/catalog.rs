//! Catalog constants and validation for movies and their related entities.
//!
//! Resolution tiers and movie access tiers are stored as plain columns, so
//! the API layer validates them here before they reach the database check
//! constraints.

use crate::error::CoreError;
use crate::roles;

/* --------------------------------------------------------------------------
Resolution tiers
-------------------------------------------------------------------------- */

/// Accepted vertical resolutions for a movie, in ascending order.
pub const RESOLUTION_TIERS: &[i16] = &[144, 360, 480, 720, 1080];

/// Human-readable label for a resolution tier (e.g. `720p`).
pub fn resolution_label(tier: i16) -> String {
    format!("{tier}p")
}

/// Validate that `tier` is one of [`RESOLUTION_TIERS`].
pub fn validate_resolution(tier: i16) -> Result<(), CoreError> {
    if RESOLUTION_TIERS.contains(&tier) {
        Ok(())
    } else {
        let valid: Vec<String> = RESOLUTION_TIERS.iter().map(|t| t.to_string()).collect();
        Err(CoreError::Validation(format!(
            "Invalid resolution {tier}. Must be one of: {}",
            valid.join(", ")
        )))
    }
}

/* --------------------------------------------------------------------------
Movie fields
-------------------------------------------------------------------------- */

/// Default access tier for new movies.
pub const DEFAULT_MOVIE_STATUS: &str = roles::ROLE_SIMPLE;

/// Movies share the account tier vocabulary (`pro` / `simple`).
pub fn validate_movie_status(status: &str) -> Result<(), CoreError> {
    roles::validate_role(status)
        .map_err(|_| CoreError::Validation(format!("Invalid movie status '{status}'")))
}

/// Validate a release year. Years are stored as non-negative smallints.
pub fn validate_year(year: i16) -> Result<(), CoreError> {
    if year < 0 {
        return Err(CoreError::Validation(format!(
            "Year must not be negative (got {year})"
        )));
    }
    Ok(())
}

/// Validate a running time in seconds.
pub fn validate_duration_secs(secs: i32) -> Result<(), CoreError> {
    if secs <= 0 {
        return Err(CoreError::Validation(
            "Duration must be greater than 0 seconds".to_string(),
        ));
    }
    Ok(())
}

/// Validate a person's age (directors, actors, users).
pub fn validate_age(age: i16) -> Result<(), CoreError> {
    if age < 0 {
        return Err(CoreError::Validation(format!(
            "Age must not be negative (got {age})"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
