//! Repository for the `favorites` and `favorite_items` tables.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::{Favorite, FavoriteItem, FavoriteItemRow, FavoriteItemWithMovie};

const ITEM_COLUMNS: &str = "id, favorite_id, movie_id, created_at";

/// Provides the per-user favorites collection and its items.
///
/// Every item operation is scoped by `user_id`; another user's item looks
/// exactly like a missing one.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Return the user's collection, creating it on first access.
    ///
    /// A single upsert against `uq_favorites_user_id`, so concurrent first
    /// calls for one user converge on the same row.
    pub async fn get_or_create(pool: &PgPool, user_id: DbId) -> Result<Favorite, sqlx::Error> {
        sqlx::query_as::<_, Favorite>(
            "INSERT INTO favorites (user_id) VALUES ($1)
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
             RETURNING id, user_id, created_at",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Add a movie to the user's collection. Adding the same movie twice
    /// yields two items.
    pub async fn add_item(
        pool: &PgPool,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<FavoriteItem, sqlx::Error> {
        let favorite = Self::get_or_create(pool, user_id).await?;
        let query = format!(
            "INSERT INTO favorite_items (favorite_id, movie_id)
             VALUES ($1, $2)
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, FavoriteItem>(&query)
            .bind(favorite.id)
            .bind(movie_id)
            .fetch_one(pool)
            .await
    }

    /// List the user's items in the order they were added, each with its
    /// movie summary.
    pub async fn list_items_with_movies(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<FavoriteItemWithMovie>, sqlx::Error> {
        let rows = sqlx::query_as::<_, FavoriteItemRow>(
            "SELECT \
                fi.id, fi.movie_id, fi.created_at, \
                m.name AS movie_name, \
                m.description AS movie_description, \
                m.year AS movie_year, \
                COALESCE(SUM(r.stars), 0)::BIGINT AS rating_sum, \
                COUNT(r.id) AS rating_count \
             FROM favorite_items fi \
             JOIN favorites f ON f.id = fi.favorite_id \
             JOIN movies m ON m.id = fi.movie_id \
             LEFT JOIN ratings r ON r.movie_id = m.id \
             WHERE f.user_id = $1 \
             GROUP BY fi.id, m.id \
             ORDER BY fi.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(FavoriteItemWithMovie::from).collect())
    }

    /// Find one of the user's items.
    pub async fn find_item_for_user(
        pool: &PgPool,
        item_id: DbId,
        user_id: DbId,
    ) -> Result<Option<FavoriteItem>, sqlx::Error> {
        sqlx::query_as::<_, FavoriteItem>(
            "SELECT fi.id, fi.favorite_id, fi.movie_id, fi.created_at
             FROM favorite_items fi
             JOIN favorites f ON f.id = fi.favorite_id
             WHERE fi.id = $1 AND f.user_id = $2",
        )
        .bind(item_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Point one of the user's items at a different movie.
    ///
    /// Returns `None` if the item does not exist or belongs to someone else.
    pub async fn update_item_for_user(
        pool: &PgPool,
        item_id: DbId,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<Option<FavoriteItem>, sqlx::Error> {
        let query = format!(
            "UPDATE favorite_items SET movie_id = $3
             WHERE id = $1
               AND favorite_id IN (SELECT id FROM favorites WHERE user_id = $2)
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, FavoriteItem>(&query)
            .bind(item_id)
            .bind(user_id)
            .bind(movie_id)
            .fetch_optional(pool)
            .await
    }

    /// Remove one of the user's items. Returns `true` if a row was removed.
    pub async fn delete_item_for_user(
        pool: &PgPool,
        item_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM favorite_items
             WHERE id = $1
               AND favorite_id IN (SELECT id FROM favorites WHERE user_id = $2)",
        )
        .bind(item_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
