//! Request extractors and access checks.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`ownership`] -- Per-row ownership checks run by handlers before reads or mutations.
//! - [`validated_json::ValidatedJson`] -- JSON body extractor that runs `validator` rules.

pub mod auth;
pub mod ownership;
pub mod validated_json;
