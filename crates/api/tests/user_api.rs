//! HTTP-level integration tests for `/users`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json, put_json_auth, register};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_and_get_hide_password_hash(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    register(&app, "bob").await;

    let response = get_auth(app.clone(), "/api/v1/users", &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let uri = format!("/api/v1/users/{}", alice.id);
    let json = body_json(get_auth(app, &uri, &alice.access_token).await).await;
    assert_eq!(json["username"], "alice");
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn users_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/v1/users").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_user_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;

    let response = get_auth(app, "/api/v1/users/999999", &alice.access_token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_own_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;

    let uri = format!("/api/v1/users/{}", alice.id);
    let body = json!({ "first_name": "Alice", "age": 31 });
    let response = put_json_auth(app, &uri, body, &alice.access_token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Alice");
    assert_eq!(json["age"], 31);
    assert_eq!(json["username"], "alice");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_ignores_role_change(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let uri = format!("/api/v1/users/{}", alice.id);

    let body = json!({ "last_name": "Smith", "role": "pro" });
    let response = put_json_auth(app.clone(), &uri, body, &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["last_name"], "Smith");
    assert_eq!(json["role"], "simple");

    let response = get_auth(app, &uri, &alice.access_token).await;
    assert_eq!(body_json(response).await["role"], "simple");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_rejects_negative_age(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let uri = format!("/api/v1/users/{}", alice.id);

    let response = put_json_auth(app, &uri, json!({ "age": -1 }), &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cannot_modify_another_account(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;
    let uri = format!("/api/v1/users/{}", bob.id);

    let response =
        put_json_auth(app.clone(), &uri, json!({ "first_name": "X" }), &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app, &uri, &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn password_change_takes_effect_on_login(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;

    let uri = format!("/api/v1/users/{}", alice.id);
    let body = json!({ "password": "a-brand-new-secret" });
    let response = put_json_auth(app.clone(), &uri, body, &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let old = json!({ "username": "alice", "password": common::TEST_PASSWORD });
    let response = post_json(app.clone(), "/api/v1/auth/login", old).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let new = json!({ "username": "alice", "password": "a-brand-new-secret" });
    let response = post_json(app, "/api/v1/auth/login", new).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_own_account(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;

    let uri = format!("/api/v1/users/{}", alice.id);
    let response = delete_auth(app.clone(), &uri, &alice.access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &uri, &bob.access_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_user_through_users_endpoint(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = register(&app, "alice").await;

    let body = json!({
        "username": "carol",
        "email": "carol@example.com",
        "password": "carol-password",
        "role": "pro",
    });
    let response = common::post_json_auth(app, "/api/v1/users", body, &alice.access_token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "carol");
    assert_eq!(json["role"], "pro");
}
