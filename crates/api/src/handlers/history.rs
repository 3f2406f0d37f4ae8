//! Handlers for the caller's view history (`/history`).
//!
//! Entries are append-only and private: there is no update or delete, and
//! another user's entry answers 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use marquee_core::types::DbId;
use marquee_db::models::history::{CreateHistoryEntry, HistoryEntry};
use marquee_db::repositories::HistoryRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::movies::ensure_movie_exists;
use crate::middleware::auth::AuthUser;
use crate::middleware::validated_json::ValidatedJson;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/v1/history
pub async fn list(
    State(state): State<AppState>,
    caller: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<HistoryEntry>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);
    let entries = HistoryRepo::list_for_user(&state.pool, caller.user_id, limit, offset).await?;
    Ok(Json(entries))
}

/// POST /api/v1/history
pub async fn create(
    State(state): State<AppState>,
    caller: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateHistoryEntry>,
) -> AppResult<(StatusCode, Json<HistoryEntry>)> {
    ensure_movie_exists(&state, input.movie_id).await?;
    let entry = HistoryRepo::create(&state.pool, caller.user_id, input.movie_id).await?;
    tracing::debug!(
        history_id = entry.id,
        movie_id = entry.movie_id,
        user_id = caller.user_id,
        "View recorded"
    );
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/history/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<HistoryEntry>> {
    let entry = HistoryRepo::find_for_user(&state.pool, id, caller.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HistoryEntry",
            id,
        }))?;
    Ok(Json(entry))
}
