//! HTTP-level integration tests for `/ratings` and the averages they feed.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_ok, delete_auth, get, post_json_auth, put_json_auth, register, seed_lookups,
    seed_movie,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn two_ratings_average_six_point_five(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;
    let lookups = seed_lookups(&app, &alice.access_token).await;
    let movie = seed_movie(&app, &alice.access_token, &lookups, "Rated", 2000).await;

    let body = json!({ "movie_id": movie, "stars": 8, "text": "great" });
    let response = post_json_auth(app.clone(), "/api/v1/ratings", body, &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user_id"], alice.id);
    assert_eq!(json["text"], "great");

    create_ok(
        &app,
        "/api/v1/ratings",
        json!({ "movie_id": movie, "stars": 5 }),
        &bob.access_token,
    )
    .await;

    let json = body_json(get(app.clone(), "/api/v1/movies").await).await;
    assert_eq!(json[0]["average_rating"], 6.5);

    let json = body_json(get(app, &format!("/api/v1/movies/{movie}")).await).await;
    assert_eq!(json["average_rating"], 6.5);
    assert_eq!(json["ratings"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn average_rounds_to_one_decimal(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let token = &alice.access_token;
    let lookups = seed_lookups(&app, token).await;
    let movie = seed_movie(&app, token, &lookups, "Thirds", 2000).await;

    for stars in [3, 3, 4] {
        create_ok(
            &app,
            "/api/v1/ratings",
            json!({ "movie_id": movie, "stars": stars }),
            token,
        )
        .await;
    }

    let json = body_json(get(app, &format!("/api/v1/movies/{movie}")).await).await;
    assert_eq!(json["average_rating"], 3.3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stars_out_of_range_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let token = &alice.access_token;
    let lookups = seed_lookups(&app, token).await;
    let movie = seed_movie(&app, token, &lookups, "Strict", 2000).await;

    for stars in [0, 11] {
        let body = json!({ "movie_id": movie, "stars": stars });
        let response = post_json_auth(app.clone(), "/api/v1/ratings", body, token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "stars {stars}");
    }

    let body = json!({ "movie_id": 999_999, "stars": 5 });
    let response = post_json_auth(app, "/api/v1/ratings", body, token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replies_thread_under_parent_and_count_in_average(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;
    let lookups = seed_lookups(&app, &alice.access_token).await;
    let movie = seed_movie(&app, &alice.access_token, &lookups, "Thread", 2000).await;

    let root = create_ok(
        &app,
        "/api/v1/ratings",
        json!({ "movie_id": movie, "stars": 10 }),
        &alice.access_token,
    )
    .await;
    let reply = create_ok(
        &app,
        "/api/v1/ratings",
        json!({ "movie_id": movie, "parent_id": root, "stars": 4, "text": "disagree" }),
        &bob.access_token,
    )
    .await;

    let json = body_json(get(app, &format!("/api/v1/movies/{movie}")).await).await;
    assert_eq!(json["average_rating"], 7.0);
    let threads = json["rating_threads"].as_array().unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0]["id"], root);
    assert_eq!(threads[0]["replies"][0]["id"], reply);
    assert_eq!(threads[0]["replies"][0]["parent_id"], root);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reply_must_target_same_movie(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let token = &alice.access_token;
    let lookups = seed_lookups(&app, token).await;
    let first = seed_movie(&app, token, &lookups, "First", 2000).await;
    let second = seed_movie(&app, token, &lookups, "Second", 2000).await;
    let root = create_ok(
        &app,
        "/api/v1/ratings",
        json!({ "movie_id": first, "stars": 6 }),
        token,
    )
    .await;

    let body = json!({ "movie_id": second, "parent_id": root, "stars": 6 });
    let response = post_json_auth(app.clone(), "/api/v1/ratings", body, token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json!({ "movie_id": first, "parent_id": 999_999, "stars": 6 });
    let response = post_json_auth(app, "/api/v1/ratings", body, token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_movie(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let token = &alice.access_token;
    let lookups = seed_lookups(&app, token).await;
    let first = seed_movie(&app, token, &lookups, "First", 2000).await;
    let second = seed_movie(&app, token, &lookups, "Second", 2000).await;
    create_ok(&app, "/api/v1/ratings", json!({ "movie_id": first, "stars": 6 }), token).await;
    create_ok(&app, "/api/v1/ratings", json!({ "movie_id": second, "stars": 2 }), token).await;

    let json = body_json(get(app.clone(), "/api/v1/ratings").await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let json = body_json(get(app, &format!("/api/v1/ratings?movie_id={second}")).await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["stars"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_author_may_edit_or_delete(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;
    let lookups = seed_lookups(&app, &alice.access_token).await;
    let movie = seed_movie(&app, &alice.access_token, &lookups, "Mine", 2000).await;
    let rating = create_ok(
        &app,
        "/api/v1/ratings",
        json!({ "movie_id": movie, "stars": 3 }),
        &alice.access_token,
    )
    .await;
    let uri = format!("/api/v1/ratings/{rating}");

    let response = put_json_auth(app.clone(), &uri, json!({ "stars": 9 }), &bob.access_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = delete_auth(app.clone(), &uri, &bob.access_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "stars": 9 }),
        &alice.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["stars"], 9);

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "stars": 12 }),
        &alice.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete_auth(app.clone(), &uri, &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(app, &format!("/api/v1/movies/{movie}")).await).await;
    assert_eq!(json["average_rating"], 0.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_rating_removes_its_replies(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let token = &alice.access_token;
    let lookups = seed_lookups(&app, token).await;
    let movie = seed_movie(&app, token, &lookups, "Cascade", 2000).await;
    let root = create_ok(
        &app,
        "/api/v1/ratings",
        json!({ "movie_id": movie, "stars": 5 }),
        token,
    )
    .await;
    let reply = create_ok(
        &app,
        "/api/v1/ratings",
        json!({ "movie_id": movie, "parent_id": root, "stars": 5 }),
        token,
    )
    .await;

    let response = delete_auth(app.clone(), &format!("/api/v1/ratings/{root}"), token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/ratings/{reply}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
