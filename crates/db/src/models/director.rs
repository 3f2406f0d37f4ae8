//! Director entity model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A director row from the `directors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: String,
    pub bio: String,
    pub age: Option<i16>,
    /// Storage path of the portrait; files themselves live outside the database.
    pub image_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new director.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDirector {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 10000))]
    pub bio: Option<String>,
    #[validate(range(min = 0, max = 150))]
    pub age: Option<i16>,
    pub image_path: Option<String>,
}

/// DTO for updating an existing director. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDirector {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 10000))]
    pub bio: Option<String>,
    #[validate(range(min = 0, max = 150))]
    pub age: Option<i16>,
    pub image_path: Option<String>,
}
