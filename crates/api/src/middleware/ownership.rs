//! Ownership checks for user-owned rows.
//!
//! Handlers load the target row, then call one of these before acting on it.
//! Rows that are public but only editable by their creator answer 403;
//! rows that are private to their owner answer 404 so their existence is not
//! disclosed.

use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_db::models::movie::Movie;
use marquee_db::models::rating::Rating;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// The caller may only modify their own account.
pub fn ensure_self(caller: &AuthUser, user_id: DbId) -> AppResult<()> {
    if caller.user_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only modify your own account".into(),
        )));
    }
    Ok(())
}

/// Only the user who created a movie may change or delete it.
///
/// Movies whose owner account has been deleted are frozen.
pub fn ensure_movie_owner(caller: &AuthUser, movie: &Movie) -> AppResult<()> {
    if movie.owner_id != Some(caller.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the movie's owner can modify it".into(),
        )));
    }
    Ok(())
}

/// Only a rating's author may edit or delete it; anyone else sees 404.
pub fn ensure_rating_author(caller: &AuthUser, rating: &Rating) -> AppResult<()> {
    if rating.user_id != caller.user_id {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Rating",
            id: rating.id,
        }));
    }
    Ok(())
}
