//! Handlers for the `/moments` resource (short clips attached to a movie).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_db::models::moment::{CreateMoment, Moment, UpdateMoment};
use marquee_db::repositories::MomentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::movies::ensure_movie_exists;
use crate::middleware::auth::AuthUser;
use crate::middleware::validated_json::ValidatedJson;
use crate::query::MovieIdParams;
use crate::state::AppState;

/// POST /api/v1/moments
pub async fn create(
    State(state): State<AppState>,
    caller: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateMoment>,
) -> AppResult<(StatusCode, Json<Moment>)> {
    ensure_movie_exists(&state, input.movie_id).await?;
    let moment = MomentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        moment_id = moment.id,
        movie_id = moment.movie_id,
        user_id = caller.user_id,
        "Moment created"
    );
    Ok((StatusCode::CREATED, Json(moment)))
}

/// GET /api/v1/moments?movie_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieIdParams>,
) -> AppResult<Json<Vec<Moment>>> {
    let moments = MomentRepo::list(&state.pool, params.movie_id).await?;
    Ok(Json(moments))
}

/// GET /api/v1/moments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Moment>> {
    let moment = MomentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Moment", id }))?;
    Ok(Json(moment))
}

/// PUT /api/v1/moments/{id}
pub async fn update(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateMoment>,
) -> AppResult<Json<Moment>> {
    if let Some(movie_id) = input.movie_id {
        ensure_movie_exists(&state, movie_id).await?;
    }
    let moment = MomentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Moment", id }))?;
    Ok(Json(moment))
}

/// DELETE /api/v1/moments/{id}
pub async fn delete(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if MomentRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Moment", id }))
    }
}
