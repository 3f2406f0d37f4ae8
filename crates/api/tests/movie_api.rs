//! HTTP-level integration tests for `/movies`: listing, filters, detail and ownership.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_ok, delete_auth, get, post_json_auth, put_json_auth, register, seed_lookups,
    seed_movie,
};
use serde_json::{json, Value};
use sqlx::PgPool;

fn names(json: &Value) -> Vec<&str> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_records_caller_as_owner(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let lookups = seed_lookups(&app, &alice.access_token).await;

    let body = json!({
        "name": "Cleo from 5 to 7",
        "year": 1962,
        "country_id": lookups.country_id,
        "director_id": lookups.director_id,
        "genre_id": lookups.genre_id,
        "resolution": 720,
        "duration_secs": 5400,
    });
    let response = post_json_auth(app, "/api/v1/movies", body, &alice.access_token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["owner_id"], alice.id);
    assert_eq!(json["status"], "simple");
    assert_eq!(json["description"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::post_json(app, "/api/v1/movies", json!({ "name": "x" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_bad_resolution_and_missing_refs(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let lookups = seed_lookups(&app, &alice.access_token).await;

    let mut body = json!({
        "name": "Bad",
        "country_id": lookups.country_id,
        "director_id": lookups.director_id,
        "genre_id": lookups.genre_id,
        "resolution": 1440,
        "duration_secs": 60,
    });
    let response =
        post_json_auth(app.clone(), "/api/v1/movies", body.clone(), &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    body["resolution"] = json!(480);
    body["country_id"] = json!(999_999);
    let response = post_json_auth(
        app.clone(),
        "/api/v1/movies",
        body.clone(),
        &alice.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    body["country_id"] = json!(lookups.country_id);
    body["duration_secs"] = json!(0);
    let response = post_json_auth(app, "/api/v1/movies", body, &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_without_ratings_averages_zero(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let lookups = seed_lookups(&app, &alice.access_token).await;
    seed_movie(&app, &alice.access_token, &lookups, "Vagabond", 1985).await;

    let response = get(app, "/api/v1/movies").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["name"], "Vagabond");
    assert_eq!(json[0]["average_rating"], 0.0);
    assert_eq!(json[0]["description"], "Vagabond description");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_search_and_ordering(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let lookups = seed_lookups(&app, &alice.access_token).await;
    seed_movie(&app, &alice.access_token, &lookups, "Alpha", 2001).await;
    seed_movie(&app, &alice.access_token, &lookups, "Beta", 1999).await;
    seed_movie(&app, &alice.access_token, &lookups, "Alphabet", 2010).await;

    let other_genre =
        create_ok(&app, "/api/v1/genres", json!({ "name": "Comedy" }), &alice.access_token).await;
    let body = json!({
        "name": "Gamma",
        "year": 2005,
        "country_id": lookups.country_id,
        "director_id": lookups.director_id,
        "genre_id": other_genre,
        "resolution": 360,
        "duration_secs": 100,
        "status": "pro",
    });
    create_ok(&app, "/api/v1/movies", body, &alice.access_token).await;

    let json = body_json(get(app.clone(), "/api/v1/movies?search=ALPHA").await).await;
    assert_eq!(names(&json), vec!["Alpha", "Alphabet"]);

    let json = body_json(get(app.clone(), "/api/v1/movies?ordering=-year").await).await;
    assert_eq!(names(&json), vec!["Alphabet", "Gamma", "Alpha", "Beta"]);

    let json = body_json(
        get(app.clone(), "/api/v1/movies?year_gt=1999&year_lt=2010&ordering=year").await,
    )
    .await;
    assert_eq!(names(&json), vec!["Alpha", "Gamma"]);

    let uri = format!("/api/v1/movies?genre={other_genre}");
    let json = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(names(&json), vec!["Gamma"]);

    let json = body_json(get(app.clone(), "/api/v1/movies?status=pro").await).await;
    assert_eq!(names(&json), vec!["Gamma"]);

    let json = body_json(get(app.clone(), "/api/v1/movies?limit=2&offset=1").await).await;
    assert_eq!(names(&json), vec!["Beta", "Alphabet"]);

    let response = get(app, "/api/v1/movies?ordering=name").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn detail_embeds_relations(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let token = &alice.access_token;
    let lookups = seed_lookups(&app, token).await;
    let actor = create_ok(
        &app,
        "/api/v1/actors",
        json!({ "name": "Sandrine Bonnaire" }),
        token,
    )
    .await;

    let body = json!({
        "name": "Vagabond",
        "year": 1985,
        "country_id": lookups.country_id,
        "director_id": lookups.director_id,
        "genre_id": lookups.genre_id,
        "actor_ids": [actor],
        "resolution": 1080,
        "duration_secs": 6300,
    });
    let movie = create_ok(&app, "/api/v1/movies", body, token).await;
    create_ok(
        &app,
        "/api/v1/movie-languages",
        json!({ "movie_id": movie, "language": "fr" }),
        token,
    )
    .await;
    create_ok(
        &app,
        "/api/v1/moments",
        json!({ "movie_id": movie, "clip_path": "clips/1.mp4" }),
        token,
    )
    .await;

    let response = get(app, &format!("/api/v1/movies/{movie}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], movie);
    assert_eq!(json["resolution_label"], "1080p");
    assert_eq!(json["country"]["name"], "France");
    assert_eq!(json["director"]["name"], "Agnes Varda");
    assert_eq!(json["genre"]["name"], "Drama");
    assert_eq!(json["actors"][0]["name"], "Sandrine Bonnaire");
    assert_eq!(json["languages"][0]["language"], "fr");
    assert_eq!(json["moments"][0]["clip_path"], "clips/1.mp4");
    assert_eq!(json["average_rating"], 0.0);
    assert_eq!(json["ratings"], json!([]));
    assert_eq!(json["rating_threads"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_movie_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/movies/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Movie with id 424242 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_owner_may_update_or_delete(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;
    let lookups = seed_lookups(&app, &alice.access_token).await;
    let movie = seed_movie(&app, &alice.access_token, &lookups, "Mine", 2000).await;
    let uri = format!("/api/v1/movies/{movie}");

    let response =
        put_json_auth(app.clone(), &uri, json!({ "name": "Stolen" }), &bob.access_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let response = delete_auth(app.clone(), &uri, &bob.access_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "name": "Still mine", "resolution": 480 }),
        &alice.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Still mine");
    assert_eq!(json["resolution"], 480);
    assert_eq!(json["year"], 2000);

    let response = delete_auth(app.clone(), &uri, &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_cast(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let token = &alice.access_token;
    let lookups = seed_lookups(&app, token).await;
    let a1 = create_ok(&app, "/api/v1/actors", json!({ "name": "First" }), token).await;
    let a2 = create_ok(&app, "/api/v1/actors", json!({ "name": "Second" }), token).await;
    let movie = seed_movie(&app, token, &lookups, "Cast", 2000).await;
    let uri = format!("/api/v1/movies/{movie}");

    let response = put_json_auth(app.clone(), &uri, json!({ "actor_ids": [a1, a2] }), token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = put_json_auth(app.clone(), &uri, json!({ "actor_ids": [a2] }), token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, &uri).await).await;
    let actors: Vec<&str> = json["actors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(actors, vec!["Second"]);
}
