//! Shared query parameter types for API handlers.

use marquee_core::types::DbId;
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped with `clamp_limit` / `clamp_offset` before reaching SQL.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Optional `?movie_id=` filter for movie-scoped child resources.
#[derive(Debug, Default, Deserialize)]
pub struct MovieIdParams {
    pub movie_id: Option<DbId>,
}
