//! Actor entity model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An actor row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub bio: String,
    pub age: Option<i16>,
    pub image_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new actor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActor {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 10000))]
    pub bio: Option<String>,
    #[validate(range(min = 0, max = 150))]
    pub age: Option<i16>,
    pub image_path: Option<String>,
}

/// DTO for updating an existing actor. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateActor {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 10000))]
    pub bio: Option<String>,
    #[validate(range(min = 0, max = 150))]
    pub age: Option<i16>,
    pub image_path: Option<String>,
}
