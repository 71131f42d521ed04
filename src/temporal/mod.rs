//! Temporal overlap engine
//!
//! Decides whether an entity with partially known dates falls inside a
//! `[min, max]` year window.
//!
//! Policy for partial dates:
//! - both bounds unknown: never included
//! - one bound known: the entity is a single point in time at that year
//! - both known: closed interval, tested for inclusive overlap

pub mod window;

pub use window::{TemporalError, TemporalResult, TimeWindow, DOMAIN_MAX, DOMAIN_MIN};

use serde::{Deserialize, Serialize};

/// Anything carrying an optional start and end year
pub trait Dated {
    fn start_year(&self) -> Option<i32>;
    fn end_year(&self) -> Option<i32>;

    /// Effective `(start, end)` after point-in-time substitution, or `None`
    /// when the entity is undated.
    fn effective_span(&self) -> Option<(i32, i32)> {
        match (self.start_year(), self.end_year()) {
            (None, None) => None,
            (Some(start), None) => Some((start, start)),
            (None, Some(end)) => Some((end, end)),
            (Some(start), Some(end)) => Some((start, end)),
        }
    }

    fn is_dated(&self) -> bool {
        self.start_year().is_some() || self.end_year().is_some()
    }
}

/// An entity with optional start/end years
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemporalEntity {
    pub id: String,
    #[serde(default)]
    pub start: Option<i32>,
    #[serde(default)]
    pub end: Option<i32>,
}

impl TemporalEntity {
    pub fn new(id: impl Into<String>, start: Option<i32>, end: Option<i32>) -> Self {
        TemporalEntity {
            id: id.into(),
            start,
            end,
        }
    }
}

impl Dated for TemporalEntity {
    fn start_year(&self) -> Option<i32> {
        self.start
    }

    fn end_year(&self) -> Option<i32> {
        self.end
    }
}

/// Inclusive overlap test of `entity` against `[min_time, max_time]`.
///
/// An inverted window (`min_time > max_time`) contains nothing.
/// [`TimeWindow::new`] rejects such windows when they come from user input.
pub fn is_in_window<D: Dated + ?Sized>(entity: &D, min_time: i32, max_time: i32) -> bool {
    if min_time > max_time {
        return false;
    }

    match entity.effective_span() {
        None => false,
        Some((start, end)) => end >= min_time && start <= max_time,
    }
}

/// Keep the items of `items` that fall inside `window`, preserving order
pub fn filter_in_window<'a, D, I>(items: I, window: &TimeWindow) -> Vec<&'a D>
where
    D: Dated + 'a,
    I: IntoIterator<Item = &'a D>,
{
    items
        .into_iter()
        .filter(|item| window.includes(*item))
        .collect()
}
