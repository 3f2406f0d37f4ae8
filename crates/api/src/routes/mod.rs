pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod health;
pub mod history;
pub mod movies;
pub mod ratings;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      register (public)
/// /auth/login                         login (public)
/// /auth/refresh                       rotate refresh token (public)
/// /auth/logout                        revoke refresh token (public)
///
/// /users                              list, create (auth required)
/// /users/{id}                         get, update, delete (self only for writes)
///
/// /movies                             list (?country, genre, director, status,
///                                     year_gt, year_lt, search, ordering), create
/// /movies/{id}                        detail, update, delete (owner only for writes)
///
/// /countries                          list, create
/// /countries/{id}                     get, update, delete
/// /directors                          list, create
/// /directors/{id}                     get, update, delete
/// /actors                             list, create
/// /actors/{id}                        get, update, delete
/// /genres                             list, create
/// /genres/{id}                        get, update, delete
/// /movie-languages                    list (?movie_id), create
/// /movie-languages/{id}               get, update, delete
/// /moments                            list (?movie_id), create
/// /moments/{id}                       get, update, delete
///
/// /ratings                            list (?movie_id), create
/// /ratings/{id}                       get, update, delete (author only for writes)
///
/// /history                            list (?limit, offset), record view
/// /history/{id}                       get
///
/// /favorites                          caller's collection (created on first read)
/// /favorite-items                     list, add
/// /favorite-items/{id}                get, update, delete
/// ```
///
/// Reads of catalog resources are public; every write requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/movies", movies::router())
        .nest("/countries", catalog::countries_router())
        .nest("/directors", catalog::directors_router())
        .nest("/actors", catalog::actors_router())
        .nest("/genres", catalog::genres_router())
        .nest("/movie-languages", catalog::movie_languages_router())
        .nest("/moments", catalog::moments_router())
        .nest("/ratings", ratings::router())
        .nest("/history", history::router())
        .nest("/favorites", favorites::router())
        .nest("/favorite-items", favorites::items_router())
}
