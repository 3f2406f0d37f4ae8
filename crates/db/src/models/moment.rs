//! Moment (short clip) model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A moment row from the `moments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Moment {
    pub id: DbId,
    pub movie_id: DbId,
    pub clip_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new moment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMoment {
    pub movie_id: DbId,
    pub clip_path: Option<String>,
}

/// DTO for updating a moment. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMoment {
    pub movie_id: Option<DbId>,
    pub clip_path: Option<String>,
}
