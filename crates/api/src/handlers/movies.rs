//! Handlers for the `/movies` resource.
//!
//! Listing and detail are public. Creating requires a login and records the
//! caller as owner; only the owner may update or delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::catalog::{validate_movie_status, validate_resolution};
use marquee_core::error::CoreError;
use marquee_core::search::{
    clamp_limit, clamp_offset, like_pattern, MovieOrdering, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
use marquee_core::types::DbId;
use marquee_db::models::movie::{
    CreateMovie, Movie, MovieDetail, MovieFilter, MovieSummary, UpdateMovie,
};
use marquee_db::repositories::MovieRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::ownership::ensure_movie_owner;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// Query parameters for `GET /movies`.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub country: Option<DbId>,
    pub genre: Option<DbId>,
    pub director: Option<DbId>,
    pub status: Option<String>,
    pub year_gt: Option<i16>,
    pub year_lt: Option<i16>,
    /// Case-insensitive substring match on the movie name.
    pub search: Option<String>,
    /// `year` or `-year`.
    pub ordering: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl MovieListParams {
    fn into_filter(self) -> Result<MovieFilter, CoreError> {
        if let Some(ref status) = self.status {
            validate_movie_status(status)?;
        }
        Ok(MovieFilter {
            country_id: self.country,
            genre_id: self.genre,
            director_id: self.director,
            status: self.status,
            year_gt: self.year_gt,
            year_lt: self.year_lt,
            name_pattern: self.search.as_deref().and_then(like_pattern),
            ordering: MovieOrdering::parse(self.ordering.as_deref())?,
            limit: clamp_limit(self.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
            offset: clamp_offset(self.offset),
        })
    }
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    caller: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    validate_resolution(input.resolution)?;
    if let Some(ref status) = input.status {
        validate_movie_status(status)?;
    }

    let movie = MovieRepo::create(&state.pool, Some(caller.user_id), &input).await?;
    tracing::info!(movie_id = movie.id, user_id = caller.user_id, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Vec<MovieSummary>>> {
    let filter = params.into_filter()?;
    let movies = MovieRepo::list_summaries(&state.pool, &filter).await?;
    Ok(Json(movies))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieDetail>> {
    let detail = MovieRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    let existing = find_movie(&state, id).await?;
    ensure_movie_owner(&caller, &existing)?;

    if let Some(resolution) = input.resolution {
        validate_resolution(resolution)?;
    }
    if let Some(ref status) = input.status {
        validate_movie_status(status)?;
    }

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    tracing::info!(movie_id = id, user_id = caller.user_id, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = find_movie(&state, id).await?;
    ensure_movie_owner(&caller, &existing)?;

    MovieRepo::delete(&state.pool, id).await?;
    tracing::info!(movie_id = id, user_id = caller.user_id, "Movie deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn find_movie(state: &AppState, id: DbId) -> AppResult<Movie> {
    MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))
}

/// Fail with `NotFound` unless the movie exists. Used by child resources
/// that reference a movie by id.
pub(crate) async fn ensure_movie_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if MovieRepo::exists(&state.pool, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }))
    }
}
