use axum::routing::get;
use axum::Router;

use crate::handlers::ratings;
use crate::state::AppState;

/// Rating routes mounted at `/ratings`.
///
/// ```text
/// GET    /        -> list (?movie_id)
/// POST   /        -> create (rating or reply)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (author only)
/// DELETE /{id}    -> delete (author only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ratings::list).post(ratings::create))
        .route(
            "/{id}",
            get(ratings::get_by_id)
                .put(ratings::update)
                .delete(ratings::delete),
        )
}
