//! Country entity model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A country row from the `countries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new country.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCountry {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// DTO for updating an existing country.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCountry {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
}
