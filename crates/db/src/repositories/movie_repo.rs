//! Repository for the `movies` table and its cast join.
//!
//! Writes that touch both `movies` and `movie_actors` run inside a single
//! transaction so a movie is never visible with a half-written cast.

use marquee_core::catalog::{resolution_label, DEFAULT_MOVIE_STATUS};
use marquee_core::rating::{build_threads, RatingTotals};
use marquee_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::movie::{
    CreateMovie, Movie, MovieDetail, MovieFilter, MovieSummary, MovieSummaryRow, UpdateMovie,
};
use crate::repositories::{
    ActorRepo, CountryRepo, DirectorRepo, GenreRepo, MomentRepo, MovieLanguageRepo, RatingRepo,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, year, country_id, director_id, genre_id, resolution, \
                        duration_secs, description, trailer_path, image_path, status, \
                        owner_id, created_at, updated_at";

/// Provides CRUD, listing, and detail assembly for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie and its cast, returning the created row.
    ///
    /// Duplicate actor IDs are collapsed. An unknown actor, country, director
    /// or genre fails the whole insert with a foreign-key violation.
    pub async fn create(
        pool: &PgPool,
        owner_id: Option<DbId>,
        input: &CreateMovie,
    ) -> Result<Movie, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO movies (name, year, country_id, director_id, genre_id, resolution, \
                                 duration_secs, description, trailer_path, image_path, status, \
                                 owner_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, ''), $9, $10, COALESCE($11, $12), $13)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.name)
            .bind(input.year)
            .bind(input.country_id)
            .bind(input.director_id)
            .bind(input.genre_id)
            .bind(input.resolution)
            .bind(input.duration_secs)
            .bind(&input.description)
            .bind(&input.trailer_path)
            .bind(&input.image_path)
            .bind(&input.status)
            .bind(DEFAULT_MOVIE_STATUS)
            .bind(owner_id)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_cast(&mut tx, movie.id, &input.actor_ids).await?;

        tx.commit().await?;
        Ok(movie)
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a movie with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List movie summaries matching `filter`, with rating totals aggregated in SQL.
    pub async fn list_summaries(
        pool: &PgPool,
        filter: &MovieFilter,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.country_id.is_some() {
            conditions.push(format!("m.country_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.genre_id.is_some() {
            conditions.push(format!("m.genre_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.director_id.is_some() {
            conditions.push(format!("m.director_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.status.is_some() {
            conditions.push(format!("m.status = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.year_gt.is_some() {
            conditions.push(format!("m.year > ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.year_lt.is_some() {
            conditions.push(format!("m.year < ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.name_pattern.is_some() {
            conditions.push(format!("m.name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT \
                m.id, m.name, m.description, m.year, \
                COALESCE(SUM(r.stars), 0)::BIGINT AS rating_sum, \
                COUNT(r.id) AS rating_count \
             FROM movies m \
             LEFT JOIN ratings r ON r.movie_id = m.id \
             {where_clause} \
             GROUP BY m.id \
             ORDER BY {order_by} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            order_by = filter.ordering.order_by_sql(),
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, MovieSummaryRow>(&query);

        // Bind dynamic parameters in order.
        if let Some(country_id) = filter.country_id {
            q = q.bind(country_id);
        }
        if let Some(genre_id) = filter.genre_id {
            q = q.bind(genre_id);
        }
        if let Some(director_id) = filter.director_id {
            q = q.bind(director_id);
        }
        if let Some(ref status) = filter.status {
            q = q.bind(status);
        }
        if let Some(year_gt) = filter.year_gt {
            q = q.bind(year_gt);
        }
        if let Some(year_lt) = filter.year_lt {
            q = q.bind(year_lt);
        }
        if let Some(ref pattern) = filter.name_pattern {
            q = q.bind(pattern);
        }

        q = q.bind(filter.limit).bind(filter.offset);
        let rows = q.fetch_all(pool).await?;
        Ok(rows.into_iter().map(MovieSummary::from).collect())
    }

    /// Load a movie with every relation embedded.
    ///
    /// Returns `None` if the movie does not exist.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<MovieDetail>, sqlx::Error> {
        let Some(movie) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let country = CountryRepo::find_by_id(pool, movie.country_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        let director = DirectorRepo::find_by_id(pool, movie.director_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        let genre = GenreRepo::find_by_id(pool, movie.genre_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        let actors = ActorRepo::list_for_movie(pool, id).await?;
        let languages = MovieLanguageRepo::list(pool, Some(id)).await?;
        let moments = MomentRepo::list(pool, Some(id)).await?;
        let ratings = RatingRepo::list(pool, Some(id)).await?;

        let stars: Vec<i16> = ratings.iter().map(|r| r.stars).collect();
        let average_rating = RatingTotals::from_stars(&stars).average();
        let rating_threads = build_threads(ratings.clone());

        Ok(Some(MovieDetail {
            resolution_label: resolution_label(movie.resolution),
            movie,
            country,
            director,
            genre,
            actors,
            languages,
            moments,
            average_rating,
            ratings,
            rating_threads,
        }))
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    ///
    /// When `actor_ids` is present the cast is replaced wholesale.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE movies SET
                name = COALESCE($2, name),
                year = COALESCE($3, year),
                country_id = COALESCE($4, country_id),
                director_id = COALESCE($5, director_id),
                genre_id = COALESCE($6, genre_id),
                resolution = COALESCE($7, resolution),
                duration_secs = COALESCE($8, duration_secs),
                description = COALESCE($9, description),
                trailer_path = COALESCE($10, trailer_path),
                image_path = COALESCE($11, image_path),
                status = COALESCE($12, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.year)
            .bind(input.country_id)
            .bind(input.director_id)
            .bind(input.genre_id)
            .bind(input.resolution)
            .bind(input.duration_secs)
            .bind(&input.description)
            .bind(&input.trailer_path)
            .bind(&input.image_path)
            .bind(&input.status)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(movie) = movie else {
            return Ok(None);
        };

        if let Some(ref actor_ids) = input.actor_ids {
            sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_cast(&mut tx, id, actor_ids).await?;
        }

        tx.commit().await?;
        Ok(Some(movie))
    }

    /// Delete a movie. Cast, tracks, moments, ratings, favorites items and
    /// history entries go with it.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_cast(
        tx: &mut Transaction<'_, Postgres>,
        movie_id: DbId,
        actor_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        if actor_ids.is_empty() {
            return Ok(());
        }
        sqlx::query(
            "INSERT INTO movie_actors (movie_id, actor_id)
             SELECT $1, UNNEST($2::BIGINT[])
             ON CONFLICT DO NOTHING",
        )
        .bind(movie_id)
        .bind(actor_ids)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
