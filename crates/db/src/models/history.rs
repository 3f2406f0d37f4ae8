//! View history model.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A view event from the `view_history` table. Never updated once written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub viewed_at: Timestamp,
}

/// DTO for recording a view. The viewer is the authenticated caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHistoryEntry {
    pub movie_id: DbId,
}
