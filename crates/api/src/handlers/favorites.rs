//! Handlers for the caller's favorites collection.
//!
//! The collection itself (`/favorites`) is created lazily on first read.
//! Items live under `/favorite-items` and are scoped to the caller; an item
//! in someone else's collection answers 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_db::models::favorite::{
    CreateFavoriteItem, FavoriteItem, FavoriteItemWithMovie, FavoriteWithItems,
    UpdateFavoriteItem,
};
use marquee_db::repositories::FavoriteRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::movies::ensure_movie_exists;
use crate::middleware::auth::AuthUser;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// GET /api/v1/favorites
pub async fn get_collection(
    State(state): State<AppState>,
    caller: AuthUser,
) -> AppResult<Json<FavoriteWithItems>> {
    let favorite = FavoriteRepo::get_or_create(&state.pool, caller.user_id).await?;
    let items = FavoriteRepo::list_items_with_movies(&state.pool, caller.user_id).await?;
    Ok(Json(FavoriteWithItems { favorite, items }))
}

/// GET /api/v1/favorite-items
pub async fn list_items(
    State(state): State<AppState>,
    caller: AuthUser,
) -> AppResult<Json<Vec<FavoriteItemWithMovie>>> {
    let items = FavoriteRepo::list_items_with_movies(&state.pool, caller.user_id).await?;
    Ok(Json(items))
}

/// POST /api/v1/favorite-items
pub async fn create_item(
    State(state): State<AppState>,
    caller: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateFavoriteItem>,
) -> AppResult<(StatusCode, Json<FavoriteItem>)> {
    ensure_movie_exists(&state, input.movie_id).await?;
    let item = FavoriteRepo::add_item(&state.pool, caller.user_id, input.movie_id).await?;
    tracing::info!(
        item_id = item.id,
        movie_id = item.movie_id,
        user_id = caller.user_id,
        "Favorite added"
    );
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/favorite-items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<FavoriteItem>> {
    let item = FavoriteRepo::find_item_for_user(&state.pool, id, caller.user_id)
        .await?
        .ok_or(item_not_found(id))?;
    Ok(Json(item))
}

/// PUT /api/v1/favorite-items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateFavoriteItem>,
) -> AppResult<Json<FavoriteItem>> {
    ensure_movie_exists(&state, input.movie_id).await?;
    let item = FavoriteRepo::update_item_for_user(&state.pool, id, caller.user_id, input.movie_id)
        .await?
        .ok_or(item_not_found(id))?;
    Ok(Json(item))
}

/// DELETE /api/v1/favorite-items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FavoriteRepo::delete_item_for_user(&state.pool, id, caller.user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(item_not_found(id))
    }
}

fn item_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "FavoriteItem",
        id,
    })
}
