//! Movie language track model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A language track row from the `movie_languages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieLanguage {
    pub id: DbId,
    pub movie_id: DbId,
    pub language: String,
    pub video_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new language track.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovieLanguage {
    pub movie_id: DbId,
    #[validate(length(min = 1, max = 64))]
    pub language: String,
    pub video_path: Option<String>,
}

/// DTO for updating a language track. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMovieLanguage {
    pub movie_id: Option<DbId>,
    #[validate(length(min = 1, max = 64))]
    pub language: Option<String>,
    pub video_path: Option<String>,
}
