//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod actor;
pub mod country;
pub mod director;
pub mod favorite;
pub mod genre;
pub mod history;
pub mod moment;
pub mod movie;
pub mod movie_language;
pub mod rating;
pub mod session;
pub mod user;
