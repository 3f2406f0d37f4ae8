//! Handlers for the `/users` resource.
//!
//! All routes require authentication; update and delete act on the caller's
//! own account only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::roles::validate_role;
use marquee_core::types::DbId;
use marquee_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use marquee_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::ownership::ensure_self;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// Request body for registration and `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    #[validate(length(min = 3, max = 150))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    #[validate(length(max = 150))]
    pub first_name: Option<String>,
    #[validate(length(max = 150))]
    pub last_name: Option<String>,
    #[validate(range(min = 0, max = 150))]
    pub age: Option<i16>,
    #[validate(length(max = 32))]
    pub phone_number: Option<String>,
    /// `pro` or `simple`; defaults to `simple`.
    pub role: Option<String>,
}

/// Request body for `PUT /users/{id}`: profile fields plus an optional new password.
///
/// The flattened profile is validated separately so its field errors are
/// reported by name.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[serde(flatten)]
    pub profile: UpdateUser,
    pub password: Option<String>,
}

/// Validate, hash and insert a new account.
///
/// A taken username is reported as a validation failure.
pub(crate) async fn create_account(
    state: &AppState,
    input: &CreateAccountRequest,
) -> AppResult<User> {
    validate_password_strength(&input.password)?;
    if let Some(ref role) = input.role {
        validate_role(role)?;
    }

    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Username '{}' is already taken",
            input.username
        ))));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username.clone(),
            email: input.email.clone(),
            password_hash,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            age: input.age,
            phone_number: input.phone_number.clone(),
            role: input.role.clone(),
        },
    )
    .await?;
    Ok(user)
}

/// GET /api/v1/users
pub async fn list(
    State(state): State<AppState>,
    _caller: AuthUser,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    caller: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateAccountRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = create_account(&state, &input).await?;
    tracing::info!(user_id = user.id, created_by = caller.user_id, "User created");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateAccountRequest>,
) -> AppResult<Json<UserResponse>> {
    ensure_self(&caller, id)?;
    input.profile.validate()?;
    if let Some(ref password) = input.password {
        validate_password_strength(password)?;
    }

    let user = UserRepo::update(&state.pool, id, &input.profile)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    if let Some(ref password) = input.password {
        let password_hash = hash_password(password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
        UserRepo::update_password(&state.pool, id, &password_hash).await?;
        tracing::info!(user_id = id, "Password changed");
    }

    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_self(&caller, id)?;
    if UserRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
