//! Repository for the `movie_languages` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie_language::{CreateMovieLanguage, MovieLanguage, UpdateMovieLanguage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, movie_id, language, video_path, created_at, updated_at";

/// Provides CRUD operations for movie language tracks.
pub struct MovieLanguageRepo;

impl MovieLanguageRepo {
    /// Insert a new language track, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMovieLanguage,
    ) -> Result<MovieLanguage, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_languages (movie_id, language, video_path)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieLanguage>(&query)
            .bind(input.movie_id)
            .bind(&input.language)
            .bind(&input.video_path)
            .fetch_one(pool)
            .await
    }

    /// Find a language track by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieLanguage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_languages WHERE id = $1");
        sqlx::query_as::<_, MovieLanguage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List language tracks, optionally restricted to one movie.
    pub async fn list(
        pool: &PgPool,
        movie_id: Option<DbId>,
    ) -> Result<Vec<MovieLanguage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movie_languages
             WHERE ($1::BIGINT IS NULL OR movie_id = $1)
             ORDER BY movie_id, language, id"
        );
        sqlx::query_as::<_, MovieLanguage>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Update a language track. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovieLanguage,
    ) -> Result<Option<MovieLanguage>, sqlx::Error> {
        let query = format!(
            "UPDATE movie_languages SET
                movie_id = COALESCE($2, movie_id),
                language = COALESCE($3, language),
                video_path = COALESCE($4, video_path)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieLanguage>(&query)
            .bind(id)
            .bind(input.movie_id)
            .bind(&input.language)
            .bind(&input.video_path)
            .fetch_optional(pool)
            .await
    }

    /// Delete a language track. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_languages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
