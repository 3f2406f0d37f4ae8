//! Handlers for the `/movie-languages` resource (per-movie language tracks).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_db::models::movie_language::{
    CreateMovieLanguage, MovieLanguage, UpdateMovieLanguage,
};
use marquee_db::repositories::MovieLanguageRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::movies::ensure_movie_exists;
use crate::middleware::auth::AuthUser;
use crate::middleware::validated_json::ValidatedJson;
use crate::query::MovieIdParams;
use crate::state::AppState;

/// POST /api/v1/movie-languages
pub async fn create(
    State(state): State<AppState>,
    caller: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateMovieLanguage>,
) -> AppResult<(StatusCode, Json<MovieLanguage>)> {
    ensure_movie_exists(&state, input.movie_id).await?;
    let track = MovieLanguageRepo::create(&state.pool, &input).await?;
    tracing::info!(
        movie_language_id = track.id,
        movie_id = track.movie_id,
        user_id = caller.user_id,
        "Language track created"
    );
    Ok((StatusCode::CREATED, Json(track)))
}

/// GET /api/v1/movie-languages?movie_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieIdParams>,
) -> AppResult<Json<Vec<MovieLanguage>>> {
    let tracks = MovieLanguageRepo::list(&state.pool, params.movie_id).await?;
    Ok(Json(tracks))
}

/// GET /api/v1/movie-languages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieLanguage>> {
    let track = MovieLanguageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieLanguage",
            id,
        }))?;
    Ok(Json(track))
}

/// PUT /api/v1/movie-languages/{id}
pub async fn update(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateMovieLanguage>,
) -> AppResult<Json<MovieLanguage>> {
    if let Some(movie_id) = input.movie_id {
        ensure_movie_exists(&state, movie_id).await?;
    }
    let track = MovieLanguageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieLanguage",
            id,
        }))?;
    Ok(Json(track))
}

/// DELETE /api/v1/movie-languages/{id}
pub async fn delete(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if MovieLanguageRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "MovieLanguage",
            id,
        }))
    }
}
