//! Routers for the movie's supporting entities.
//!
//! Every router here has the same shape:
//!
//! ```text
//! GET    /        -> list
//! POST   /        -> create
//! GET    /{id}    -> get_by_id
//! PUT    /{id}    -> update
//! DELETE /{id}    -> delete
//! ```
//!
//! `movie-languages` and `moments` also accept `?movie_id=` on list.

use axum::routing::get;
use axum::Router;

use crate::handlers::{actors, countries, directors, genres, moments, movie_languages};
use crate::state::AppState;

/// Mounted at `/countries`.
pub fn countries_router() -> Router<AppState> {
    Router::new()
        .route("/", get(countries::list).post(countries::create))
        .route(
            "/{id}",
            get(countries::get_by_id)
                .put(countries::update)
                .delete(countries::delete),
        )
}

/// Mounted at `/directors`.
pub fn directors_router() -> Router<AppState> {
    Router::new()
        .route("/", get(directors::list).post(directors::create))
        .route(
            "/{id}",
            get(directors::get_by_id)
                .put(directors::update)
                .delete(directors::delete),
        )
}

/// Mounted at `/actors`.
pub fn actors_router() -> Router<AppState> {
    Router::new()
        .route("/", get(actors::list).post(actors::create))
        .route(
            "/{id}",
            get(actors::get_by_id)
                .put(actors::update)
                .delete(actors::delete),
        )
}

/// Mounted at `/genres`.
pub fn genres_router() -> Router<AppState> {
    Router::new()
        .route("/", get(genres::list).post(genres::create))
        .route(
            "/{id}",
            get(genres::get_by_id)
                .put(genres::update)
                .delete(genres::delete),
        )
}

/// Mounted at `/movie-languages`.
pub fn movie_languages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie_languages::list).post(movie_languages::create))
        .route(
            "/{id}",
            get(movie_languages::get_by_id)
                .put(movie_languages::update)
                .delete(movie_languages::delete),
        )
}

/// Mounted at `/moments`.
pub fn moments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(moments::list).post(moments::create))
        .route(
            "/{id}",
            get(moments::get_by_id)
                .put(moments::update)
                .delete(moments::delete),
        )
}
