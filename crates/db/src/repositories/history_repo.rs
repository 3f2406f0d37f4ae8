//! Repository for the `view_history` table. Insert and read only.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::history::HistoryEntry;

const COLUMNS: &str = "id, user_id, movie_id, viewed_at";

/// Provides the append-only view log.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Record that `user_id` viewed `movie_id` now. Repeat views are kept.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<HistoryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO view_history (user_id, movie_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(user_id)
            .bind(movie_id)
            .fetch_one(pool)
            .await
    }

    /// The user's entries, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<HistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM view_history
             WHERE user_id = $1
             ORDER BY viewed_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find one of the user's entries. Another user's entry reads as missing.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<HistoryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM view_history WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
