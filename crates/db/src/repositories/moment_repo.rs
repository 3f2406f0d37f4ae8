//! Repository for the `moments` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::moment::{CreateMoment, Moment, UpdateMoment};

const COLUMNS: &str = "id, movie_id, clip_path, created_at, updated_at";

/// Provides CRUD operations for moments.
pub struct MomentRepo;

impl MomentRepo {
    pub async fn create(pool: &PgPool, input: &CreateMoment) -> Result<Moment, sqlx::Error> {
        let query = format!(
            "INSERT INTO moments (movie_id, clip_path) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Moment>(&query)
            .bind(input.movie_id)
            .bind(&input.clip_path)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Moment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM moments WHERE id = $1");
        sqlx::query_as::<_, Moment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List moments in insertion order, optionally restricted to one movie.
    pub async fn list(pool: &PgPool, movie_id: Option<DbId>) -> Result<Vec<Moment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM moments
             WHERE ($1::BIGINT IS NULL OR movie_id = $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Moment>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMoment,
    ) -> Result<Option<Moment>, sqlx::Error> {
        let query = format!(
            "UPDATE moments SET
                movie_id = COALESCE($2, movie_id),
                clip_path = COALESCE($3, clip_path)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Moment>(&query)
            .bind(id)
            .bind(input.movie_id)
            .bind(&input.clip_path)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM moments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
