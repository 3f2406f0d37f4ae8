//! Favorites collection and item models.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::movie::{MovieSummary, MovieSummaryRow};

/// A user's favorites collection from the `favorites` table. One per user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// A membership row from the `favorite_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavoriteItem {
    pub id: DbId,
    pub favorite_id: DbId,
    pub movie_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for adding a movie to the caller's collection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFavoriteItem {
    pub movie_id: DbId,
}

/// DTO for repointing an item at another movie.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFavoriteItem {
    pub movie_id: DbId,
}

/// A favorites item joined with its movie summary columns.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteItemRow {
    pub id: DbId,
    pub movie_id: DbId,
    pub created_at: Timestamp,
    pub movie_name: String,
    pub movie_description: String,
    pub movie_year: Option<i16>,
    pub rating_sum: i64,
    pub rating_count: i64,
}

/// A favorites item with its movie embedded, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteItemWithMovie {
    pub id: DbId,
    pub movie_id: DbId,
    pub created_at: Timestamp,
    pub movie: MovieSummary,
}

impl From<FavoriteItemRow> for FavoriteItemWithMovie {
    fn from(row: FavoriteItemRow) -> Self {
        let movie = MovieSummary::from(MovieSummaryRow {
            id: row.movie_id,
            name: row.movie_name,
            description: row.movie_description,
            year: row.movie_year,
            rating_sum: row.rating_sum,
            rating_count: row.rating_count,
        });
        Self {
            id: row.id,
            movie_id: row.movie_id,
            created_at: row.created_at,
            movie,
        }
    }
}

/// A collection with all of its items.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteWithItems {
    #[serde(flatten)]
    pub favorite: Favorite,
    pub items: Vec<FavoriteItemWithMovie>,
}
