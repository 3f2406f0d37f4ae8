//! Repository for the `ratings` table.

use marquee_core::rating::RatingTotals;
use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::rating::{CreateRating, Rating, UpdateRating};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, movie_id, parent_id, stars, text, created_at, updated_at";

/// Provides CRUD and aggregation for ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert a new rating, returning the created row.
    ///
    /// The caller is responsible for checking that `parent_id` (if any) is a
    /// rating on the same movie.
    pub async fn create(pool: &PgPool, input: &CreateRating) -> Result<Rating, sqlx::Error> {
        let query = format!(
            "INSERT INTO ratings (user_id, movie_id, parent_id, stars, text)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(input.user_id)
            .bind(input.movie_id)
            .bind(input.parent_id)
            .bind(input.stars)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// Find a rating by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rating>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ratings WHERE id = $1");
        sqlx::query_as::<_, Rating>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List ratings oldest first, optionally restricted to one movie.
    pub async fn list(pool: &PgPool, movie_id: Option<DbId>) -> Result<Vec<Rating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ratings
             WHERE ($1::BIGINT IS NULL OR movie_id = $1)
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Sum and count of every star score on a movie, replies included.
    pub async fn totals_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<RatingTotals, sqlx::Error> {
        let (sum, count) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COALESCE(SUM(stars), 0)::BIGINT, COUNT(*)
             FROM ratings WHERE movie_id = $1",
        )
        .bind(movie_id)
        .fetch_one(pool)
        .await?;
        Ok(RatingTotals::new(sum, count))
    }

    /// Update a rating's stars or text.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRating,
    ) -> Result<Option<Rating>, sqlx::Error> {
        let query = format!(
            "UPDATE ratings SET
                stars = COALESCE($2, stars),
                text = COALESCE($3, text)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(id)
            .bind(input.stars)
            .bind(&input.text)
            .fetch_optional(pool)
            .await
    }

    /// Delete a rating and, through cascade, its replies.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ratings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
