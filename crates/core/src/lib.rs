//! Domain types, error taxonomy, and pure logic for the movie catalog.
//!
//! Nothing in this crate performs I/O; the `db` and `api` crates build on it.

pub mod catalog;
pub mod error;
pub mod rating;
pub mod roles;
pub mod search;
pub mod types;
