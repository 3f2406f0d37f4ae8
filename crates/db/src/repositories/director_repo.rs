//! Repository for the `directors` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::director::{CreateDirector, Director, UpdateDirector};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, bio, age, image_path, created_at, updated_at";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDirector) -> Result<Director, sqlx::Error> {
        let query = format!(
            "INSERT INTO directors (name, bio, age, image_path)
             VALUES ($1, COALESCE($2, ''), $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(input.age)
            .bind(&input.image_path)
            .fetch_one(pool)
            .await
    }

    /// Find a director by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE id = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all directors alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors ORDER BY name, id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Update a director. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDirector,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!(
            "UPDATE directors SET
                name = COALESCE($2, name),
                bio = COALESCE($3, bio),
                age = COALESCE($4, age),
                image_path = COALESCE($5, image_path)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(input.age)
            .bind(&input.image_path)
            .fetch_optional(pool)
            .await
    }

    /// Delete a director and, through cascade, their movies.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
