//! Genre entity model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A genre row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenre {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// DTO for updating an existing genre.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGenre {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
}
