//! Handlers for the `/countries` resource. Reads are public, writes need a login.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_db::models::country::{Country, CreateCountry, UpdateCountry};
use marquee_db::repositories::CountryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/countries
pub async fn create(
    State(state): State<AppState>,
    caller: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateCountry>,
) -> AppResult<(StatusCode, Json<Country>)> {
    let country = CountryRepo::create(&state.pool, &input).await?;
    tracing::info!(country_id = country.id, user_id = caller.user_id, "Country created");
    Ok((StatusCode::CREATED, Json(country)))
}

/// GET /api/v1/countries
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Country>>> {
    let countries = CountryRepo::list(&state.pool).await?;
    Ok(Json(countries))
}

/// GET /api/v1/countries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Country>> {
    let country = CountryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(country))
}

/// PUT /api/v1/countries/{id}
pub async fn update(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCountry>,
) -> AppResult<Json<Country>> {
    let country = CountryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(country))
}

/// DELETE /api/v1/countries/{id}
///
/// Movies produced in this country are deleted with it.
pub async fn delete(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CountryRepo::delete(&state.pool, id).await? {
        tracing::info!(country_id = id, user_id = caller.user_id, "Country deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))
    }
}
