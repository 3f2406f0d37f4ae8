//! Rating model and DTOs.

use marquee_core::rating::Threaded;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A rating row from the `ratings` table.
///
/// `parent_id` links a reply to the rating it answers; both always belong
/// to the same movie.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub parent_id: Option<DbId>,
    pub stars: i16,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Threaded for Rating {
    fn thread_id(&self) -> DbId {
        self.id
    }

    fn thread_parent_id(&self) -> Option<DbId> {
        self.parent_id
    }
}

/// DTO for inserting a rating. The author comes from the authenticated caller.
#[derive(Debug, Clone)]
pub struct CreateRating {
    pub user_id: DbId,
    pub movie_id: DbId,
    pub parent_id: Option<DbId>,
    pub stars: i16,
    pub text: String,
}

/// DTO for editing a rating. Movie and parent are fixed after creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRating {
    #[validate(range(min = 1, max = 10))]
    pub stars: Option<i16>,
    #[validate(length(max = 5000))]
    pub text: Option<String>,
}
