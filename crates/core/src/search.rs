//! Catalog search, ordering, and pagination helpers.
//!
//! Lives in `core` so the repository layer and the HTTP layer agree on
//! defaults without depending on each other.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of rows per list page.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum number of rows per list page.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Movie ordering
// ---------------------------------------------------------------------------

/// Sort order for the movie list. Only `year` is orderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieOrdering {
    /// Insertion order (`id ASC`).
    #[default]
    Default,
    YearAsc,
    YearDesc,
}

impl MovieOrdering {
    /// Parse an `?ordering=` value: `year` or `-year`. Empty means default.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::Default),
            Some("year") => Ok(Self::YearAsc),
            Some("-year") => Ok(Self::YearDesc),
            Some(other) => Err(CoreError::Validation(format!(
                "Invalid ordering '{other}'. Must be one of: year, -year"
            ))),
        }
    }

    /// SQL `ORDER BY` body for this ordering (table alias `m`).
    pub fn order_by_sql(self) -> &'static str {
        match self {
            Self::Default => "m.id ASC",
            Self::YearAsc => "m.year ASC NULLS LAST, m.id ASC",
            Self::YearDesc => "m.year DESC NULLS LAST, m.id ASC",
        }
    }
}

// ---------------------------------------------------------------------------
// Name search
// ---------------------------------------------------------------------------

/// Turn a free-text search term into an `ILIKE` substring pattern.
///
/// LIKE metacharacters are escaped with `\` so that `50%` only matches a
/// literal percent sign. Returns `None` for blank input.
pub fn like_pattern(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut escaped = String::with_capacity(trimmed.len() + 2);
    escaped.push('%');
    for c in trimmed.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    Some(escaped)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
