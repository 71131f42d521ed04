//! Validated query windows

use super::{is_in_window, Dated};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Earliest year a window may start at
pub const DOMAIN_MIN: i32 = 0;
/// Latest year a window may end at
pub const DOMAIN_MAX: i32 = 2000;

/// Window construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Inverted window: min {min} is after max {max}")]
    InvertedWindow { min: i32, max: i32 },

    #[error("Window [{min}, {max}] leaves the supported range [0, 2000]")]
    OutOfDomain { min: i32, max: i32 },
}

pub type TemporalResult<T> = Result<T, TemporalError>;

/// A `[min, max]` year range with `DOMAIN_MIN <= min <= max <= DOMAIN_MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i32; 2]", into = "[i32; 2]")]
pub struct TimeWindow {
    min: i32,
    max: i32,
}

impl TimeWindow {
    /// Default window of the map view
    pub const DEFAULT: TimeWindow = TimeWindow { min: 1000, max: 1400 };

    pub fn new(min: i32, max: i32) -> TemporalResult<Self> {
        if min > max {
            return Err(TemporalError::InvertedWindow { min, max });
        }
        if min < DOMAIN_MIN || max > DOMAIN_MAX {
            return Err(TemporalError::OutOfDomain { min, max });
        }
        Ok(TimeWindow { min, max })
    }

    /// The whole supported range
    pub fn full() -> Self {
        TimeWindow {
            min: DOMAIN_MIN,
            max: DOMAIN_MAX,
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Does `entity` overlap this window?
    pub fn includes<D: Dated + ?Sized>(&self, entity: &D) -> bool {
        is_in_window(entity, self.min, self.max)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

impl TryFrom<[i32; 2]> for TimeWindow {
    type Error = TemporalError;

    fn try_from([min, max]: [i32; 2]) -> Result<Self, Self::Error> {
        TimeWindow::new(min, max)
    }
}

impl From<TimeWindow> for [i32; 2] {
    fn from(window: TimeWindow) -> Self {
        [window.min, window.max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::TemporalEntity;

    #[test]
    fn test_default_window() {
        let window = TimeWindow::default();
        assert_eq!((window.min(), window.max()), (1000, 1400));
        assert_eq!(window.to_string(), "1000 - 1400");
    }

    #[test]
    fn test_rejects_inverted() {
        assert_eq!(
            TimeWindow::new(1400, 1000),
            Err(TemporalError::InvertedWindow { min: 1400, max: 1000 })
        );
    }

    #[test]
    fn test_rejects_out_of_domain() {
        assert!(matches!(TimeWindow::new(-10, 100), Err(TemporalError::OutOfDomain { .. })));
        assert!(matches!(TimeWindow::new(1900, 2024), Err(TemporalError::OutOfDomain { .. })));
        assert!(TimeWindow::new(0, 2000).is_ok());
        assert!(TimeWindow::new(1200, 1200).is_ok());
    }

    #[test]
    fn test_full_window_still_excludes_undated() {
        assert!(!TimeWindow::full().includes(&TemporalEntity::new("x", None, None)));
        assert!(TimeWindow::full().includes(&TemporalEntity::new("y", Some(0), None)));
    }

    #[test]
    fn test_serde_as_pair() {
        let window: TimeWindow = serde_json::from_str("[1100, 1250]").unwrap();
        assert_eq!(window.max(), 1250);
        assert!(serde_json::from_str::<TimeWindow>("[1300, 1100]").is_err());
        assert_eq!(serde_json::to_string(&window).unwrap(), "[1100,1250]");
    }
}
