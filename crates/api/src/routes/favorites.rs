//! Route definitions for favorites.
//!
//! Two routers are provided:
//! - `router()` for the caller's collection mounted at `/favorites`
//! - `items_router()` for individual items mounted at `/favorite-items`

use axum::routing::get;
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Collection route mounted at `/favorites`.
///
/// ```text
/// GET    /        -> get_collection
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(favorites::get_collection))
}

/// Item routes mounted at `/favorite-items`.
///
/// ```text
/// GET    /        -> list_items
/// POST   /        -> create_item
/// GET    /{id}    -> get_item
/// PUT    /{id}    -> update_item
/// DELETE /{id}    -> delete_item
/// ```
pub fn items_router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::list_items).post(favorites::create_item))
        .route(
            "/{id}",
            get(favorites::get_item)
                .put(favorites::update_item)
                .delete(favorites::delete_item),
        )
}
