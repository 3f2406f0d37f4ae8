//! Rating validation, average aggregation, and reply threading.
//!
//! A movie's average is the arithmetic mean of every rating row on it,
//! replies included, rounded to one decimal place with ties going to the even
//! digit. A movie with no ratings averages exactly `0.0`.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Lowest accepted star score.
pub const MIN_STARS: i16 = 1;

/// Highest accepted star score.
pub const MAX_STARS: i16 = 10;

/// Maximum length of a rating's text body.
pub const MAX_RATING_TEXT_LENGTH: usize = 5_000;

/* --------------------------------------------------------------------------
Validation
-------------------------------------------------------------------------- */

/// Validate that a star score lies within `[MIN_STARS, MAX_STARS]`.
pub fn validate_stars(stars: i16) -> Result<(), CoreError> {
    if !(MIN_STARS..=MAX_STARS).contains(&stars) {
        return Err(CoreError::Validation(format!(
            "Stars must be between {MIN_STARS} and {MAX_STARS} (got {stars})"
        )));
    }
    Ok(())
}

/// A reply must target a rating on the same movie.
pub fn validate_parent_movie(parent_movie_id: DbId, movie_id: DbId) -> Result<(), CoreError> {
    if parent_movie_id != movie_id {
        return Err(CoreError::Validation(format!(
            "Parent rating belongs to movie {parent_movie_id}, not movie {movie_id}"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Aggregation
-------------------------------------------------------------------------- */

/// Running totals of a movie's star scores.
///
/// List queries aggregate `SUM(stars)` / `COUNT(*)` in SQL and feed them here,
/// detail views build the totals from loaded rows; both paths round the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingTotals {
    pub sum: i64,
    pub count: i64,
}

impl RatingTotals {
    pub fn new(sum: i64, count: i64) -> Self {
        Self { sum, count }
    }

    pub fn from_stars(stars: &[i16]) -> Self {
        Self {
            sum: stars.iter().map(|s| i64::from(*s)).sum(),
            count: stars.len() as i64,
        }
    }

    /// Mean score rounded to one decimal place, or `0.0` when empty.
    ///
    /// The `f64` quotient is rounded through its shortest decimal form, so an
    /// exact tie goes to the even digit (`6.25` becomes `6.2`) and a quotient
    /// stored just below a tie rounds down (`6.35` becomes `6.3`).
    pub fn average(&self) -> f64 {
        if self.count <= 0 {
            return 0.0;
        }
        let mean = self.sum as f64 / self.count as f64;
        format!("{mean:.1}").parse().unwrap_or(mean)
    }
}

/// Average of a slice of star scores. See [`RatingTotals::average`].
pub fn average_rating(stars: &[i16]) -> f64 {
    RatingTotals::from_stars(stars).average()
}

/* --------------------------------------------------------------------------
Threading
-------------------------------------------------------------------------- */

/// Anything that can be placed in a reply tree.
pub trait Threaded {
    fn thread_id(&self) -> DbId;
    fn thread_parent_id(&self) -> Option<DbId>;
}

/// One rating plus its direct replies.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadNode<T> {
    #[serde(flatten)]
    pub rating: T,
    pub replies: Vec<ThreadNode<T>>,
}

/// Group a flat list of ratings into reply trees.
///
/// Input order is preserved among siblings. Replies whose parent is not in
/// the list are promoted to roots, and rows caught in a parent cycle are
/// emitted as roots instead of being dropped.
pub fn build_threads<T: Threaded>(ratings: Vec<T>) -> Vec<ThreadNode<T>> {
    let ids: HashSet<DbId> = ratings.iter().map(Threaded::thread_id).collect();

    let mut children: HashMap<DbId, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();
    for (idx, rating) in ratings.iter().enumerate() {
        match rating.thread_parent_id() {
            Some(parent) if parent != rating.thread_id() && ids.contains(&parent) => {
                children.entry(parent).or_default().push(idx);
            }
            _ => roots.push(idx),
        }
    }

    let mut slots: Vec<Option<T>> = ratings.into_iter().map(Some).collect();
    let mut threads = Vec::with_capacity(roots.len());

    for idx in roots {
        if let Some(node) = take_node(idx, &mut slots, &children) {
            threads.push(node);
        }
    }

    // Anything left is only reachable through a cycle.
    for idx in 0..slots.len() {
        if let Some(node) = take_node(idx, &mut slots, &children) {
            threads.push(node);
        }
    }

    threads
}

fn take_node<T: Threaded>(
    idx: usize,
    slots: &mut [Option<T>],
    children: &HashMap<DbId, Vec<usize>>,
) -> Option<ThreadNode<T>> {
    let rating = slots[idx].take()?;
    let replies = children
        .get(&rating.thread_id())
        .map(|kids| {
            kids.iter()
                .filter_map(|&kid| take_node(kid, slots, children))
                .collect()
        })
        .unwrap_or_default();
    Some(ThreadNode { rating, replies })
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Row {
        id: DbId,
        parent: Option<DbId>,
    }

    impl Threaded for Row {
        fn thread_id(&self) -> DbId {
            self.id
        }
        fn thread_parent_id(&self) -> Option<DbId> {
            self.parent
        }
    }

    fn row(id: DbId, parent: Option<DbId>) -> Row {
        Row { id, parent }
    }

    // -- validate_stars --

    #[test]
    fn stars_bounds_inclusive() {
        assert!(validate_stars(1).is_ok());
        assert!(validate_stars(10).is_ok());
        assert!(validate_stars(0).is_err());
        assert!(validate_stars(11).is_err());
        assert!(validate_stars(-4).is_err());
    }

    #[test]
    fn parent_on_other_movie_rejected() {
        assert!(validate_parent_movie(7, 7).is_ok());
        let err = validate_parent_movie(7, 8).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    // -- average --

    #[test]
    fn no_ratings_average_is_exactly_zero() {
        assert_eq!(average_rating(&[]), 0.0);
        assert_eq!(RatingTotals::default().average(), 0.0);
    }

    #[test]
    fn two_users_eight_and_five() {
        assert_eq!(average_rating(&[8, 5]), 6.5);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        // 10 / 3 = 3.333..
        assert_eq!(average_rating(&[3, 3, 4]), 3.3);
        // 20 / 3 = 6.666..
        assert_eq!(average_rating(&[6, 7, 7]), 6.7);
        assert_eq!(average_rating(&[10]), 10.0);
    }

    #[test]
    fn exact_tie_rounds_to_even() {
        // 25 / 4 = 6.25
        assert_eq!(average_rating(&[6, 6, 6, 7]), 6.2);
        // 27 / 4 = 6.75
        assert_eq!(average_rating(&[6, 7, 7, 7]), 6.8);
        // 13 / 2 = 6.5
        assert_eq!(average_rating(&[6, 7]), 6.5);
    }

    #[test]
    fn quotient_below_tie_rounds_down() {
        // 127 / 20 = 6.35, stored as 6.3499..
        let stars: Vec<i16> = std::iter::repeat(6)
            .take(13)
            .chain(std::iter::repeat(7).take(7))
            .collect();
        assert_eq!(average_rating(&stars), 6.3);
    }

    #[test]
    fn sql_totals_round_like_loaded_rows() {
        assert_eq!(RatingTotals::new(25, 4).average(), 6.2);
        assert_eq!(RatingTotals::new(127, 20).average(), 6.3);
    }

    #[test]
    fn totals_from_sql_match_slice_path() {
        let stars = [1, 9, 4, 4, 10];
        let from_rows = RatingTotals::from_stars(&stars);
        assert_eq!(from_rows, RatingTotals::new(28, 5));
        assert_eq!(from_rows.average(), 5.6);
    }

    // -- threading --

    #[test]
    fn replies_nest_under_parent() {
        let threads = build_threads(vec![
            row(1, None),
            row(2, Some(1)),
            row(3, None),
            row(4, Some(2)),
            row(5, Some(1)),
        ]);

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].rating.id, 1);
        let replies: Vec<DbId> = threads[0].replies.iter().map(|n| n.rating.id).collect();
        assert_eq!(replies, vec![2, 5]);
        assert_eq!(threads[0].replies[0].replies[0].rating.id, 4);
        assert_eq!(threads[1].rating.id, 3);
        assert!(threads[1].replies.is_empty());
    }

    #[test]
    fn orphan_reply_promoted_to_root() {
        let threads = build_threads(vec![row(10, Some(99)), row(11, None)]);
        let roots: Vec<DbId> = threads.iter().map(|n| n.rating.id).collect();
        assert_eq!(roots, vec![10, 11]);
    }

    #[test]
    fn cycle_does_not_lose_rows() {
        let threads = build_threads(vec![row(1, Some(2)), row(2, Some(1))]);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].rating.id, 1);
        assert_eq!(threads[0].replies[0].rating.id, 2);
    }

    #[test]
    fn thread_node_flattens_rating_fields() {
        let threads = build_threads(vec![row(1, None), row(2, Some(1))]);
        let json = serde_json::to_value(&threads[0]).expect("serialization should succeed");
        assert_eq!(json["id"], 1);
        assert_eq!(json["replies"][0]["id"], 2);
        assert_eq!(json["replies"][0]["parent"], 1);
    }
}
