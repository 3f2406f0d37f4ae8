//! Movie entity model, DTOs, and list/detail projections.

use marquee_core::rating::{RatingTotals, ThreadNode};
use marquee_core::search::MovieOrdering;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::actor::Actor;
use crate::models::country::Country;
use crate::models::director::Director;
use crate::models::genre::Genre;
use crate::models::moment::Moment;
use crate::models::movie_language::MovieLanguage;
use crate::models::rating::Rating;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub name: String,
    pub year: Option<i16>,
    pub country_id: DbId,
    pub director_id: DbId,
    pub genre_id: DbId,
    /// Vertical resolution tier (144, 360, 480, 720 or 1080).
    pub resolution: i16,
    pub duration_secs: i32,
    pub description: String,
    pub trailer_path: Option<String>,
    pub image_path: Option<String>,
    /// Access tier: `pro` or `simple`.
    pub status: String,
    /// User who created the movie. `None` once that account is deleted.
    pub owner_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie. The owner is taken from the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(range(min = 0))]
    pub year: Option<i16>,
    pub country_id: DbId,
    pub director_id: DbId,
    pub genre_id: DbId,
    #[serde(default)]
    pub actor_ids: Vec<DbId>,
    pub resolution: i16,
    #[validate(range(min = 1))]
    pub duration_secs: i32,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    pub trailer_path: Option<String>,
    pub image_path: Option<String>,
    /// Defaults to `simple` if omitted.
    pub status: Option<String>,
}

/// DTO for updating an existing movie. All fields are optional.
///
/// `actor_ids`, when present, replaces the full cast.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub year: Option<i16>,
    pub country_id: Option<DbId>,
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
    pub actor_ids: Option<Vec<DbId>>,
    pub resolution: Option<i16>,
    #[validate(range(min = 1))]
    pub duration_secs: Option<i32>,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    pub trailer_path: Option<String>,
    pub image_path: Option<String>,
    pub status: Option<String>,
}

/// Filters, search and ordering for the movie list.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    pub country_id: Option<DbId>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
    pub status: Option<String>,
    /// Exclusive lower bound on `year`.
    pub year_gt: Option<i16>,
    /// Exclusive upper bound on `year`.
    pub year_lt: Option<i16>,
    /// Already-escaped `ILIKE` pattern for the movie name.
    pub name_pattern: Option<String>,
    pub ordering: MovieOrdering,
    pub limit: i64,
    pub offset: i64,
}

/// Raw list row: movie summary columns plus SQL-side rating totals.
#[derive(Debug, Clone, FromRow)]
pub struct MovieSummaryRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub year: Option<i16>,
    pub rating_sum: i64,
    pub rating_count: i64,
}

/// Lightweight movie projection used by list endpoints and favorites.
#[derive(Debug, Clone, Serialize)]
pub struct MovieSummary {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub year: Option<i16>,
    pub average_rating: f64,
}

impl From<MovieSummaryRow> for MovieSummary {
    fn from(row: MovieSummaryRow) -> Self {
        let average_rating = RatingTotals::new(row.rating_sum, row.rating_count).average();
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            year: row.year,
            average_rating,
        }
    }
}

/// Full movie representation with every relation embedded.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    /// Display label for `resolution`, e.g. `1080p`.
    pub resolution_label: String,
    pub country: Country,
    pub director: Director,
    pub genre: Genre,
    pub actors: Vec<Actor>,
    pub languages: Vec<MovieLanguage>,
    pub moments: Vec<Moment>,
    pub average_rating: f64,
    /// Every rating on the movie, oldest first.
    pub ratings: Vec<Rating>,
    /// The same ratings grouped into reply trees.
    pub rating_threads: Vec<ThreadNode<Rating>>,
}
