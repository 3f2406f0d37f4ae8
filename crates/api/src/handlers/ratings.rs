//! Handlers for the `/ratings` resource.
//!
//! A rating is a star score with optional text. Setting `parent_id` makes it
//! a reply to another rating on the same movie; replies still count toward
//! the movie's average.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::rating::validate_parent_movie;
use marquee_core::types::DbId;
use marquee_db::models::rating::{CreateRating, Rating, UpdateRating};
use marquee_db::repositories::RatingRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::movies::ensure_movie_exists;
use crate::middleware::auth::AuthUser;
use crate::middleware::ownership::ensure_rating_author;
use crate::middleware::validated_json::ValidatedJson;
use crate::query::MovieIdParams;
use crate::state::AppState;

/// Request body for `POST /ratings`. The author is the authenticated caller.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRatingRequest {
    pub movie_id: DbId,
    pub parent_id: Option<DbId>,
    #[validate(range(min = 1, max = 10))]
    pub stars: i16,
    #[validate(length(max = 5000))]
    pub text: Option<String>,
}

/// POST /api/v1/ratings
pub async fn create(
    State(state): State<AppState>,
    caller: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateRatingRequest>,
) -> AppResult<(StatusCode, Json<Rating>)> {
    ensure_movie_exists(&state, input.movie_id).await?;

    if let Some(parent_id) = input.parent_id {
        let parent = find_rating(&state, parent_id).await?;
        validate_parent_movie(parent.movie_id, input.movie_id)?;
    }

    let rating = RatingRepo::create(
        &state.pool,
        &CreateRating {
            user_id: caller.user_id,
            movie_id: input.movie_id,
            parent_id: input.parent_id,
            stars: input.stars,
            text: input.text.unwrap_or_default(),
        },
    )
    .await?;

    tracing::info!(
        rating_id = rating.id,
        movie_id = rating.movie_id,
        user_id = caller.user_id,
        reply = rating.parent_id.is_some(),
        "Rating created"
    );
    Ok((StatusCode::CREATED, Json(rating)))
}

/// GET /api/v1/ratings?movie_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieIdParams>,
) -> AppResult<Json<Vec<Rating>>> {
    let ratings = RatingRepo::list(&state.pool, params.movie_id).await?;
    Ok(Json(ratings))
}

/// GET /api/v1/ratings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Rating>> {
    Ok(Json(find_rating(&state, id).await?))
}

/// PUT /api/v1/ratings/{id}
///
/// Only stars and text are editable; the movie and parent are fixed.
pub async fn update(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateRating>,
) -> AppResult<Json<Rating>> {
    let existing = find_rating(&state, id).await?;
    ensure_rating_author(&caller, &existing)?;

    let rating = RatingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Rating", id }))?;
    Ok(Json(rating))
}

/// DELETE /api/v1/ratings/{id}
///
/// Replies to the deleted rating are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = find_rating(&state, id).await?;
    ensure_rating_author(&caller, &existing)?;

    if RatingRepo::delete(&state.pool, id).await? {
        tracing::info!(rating_id = id, user_id = caller.user_id, "Rating deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Rating", id }))
    }
}

async fn find_rating(state: &AppState, id: DbId) -> AppResult<Rating> {
    RatingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Rating", id }))
}
