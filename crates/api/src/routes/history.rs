use axum::routing::get;
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

/// View history routes mounted at `/history`. All require auth.
///
/// ```text
/// GET    /        -> list (?limit, offset)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(history::list).post(history::create))
        .route("/{id}", get(history::get_by_id))
}
