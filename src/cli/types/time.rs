//! Season years and inclusive year windows.

use crate::error::{MlbError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First season loaded into the demo dataset.
pub const DATASET_FIRST_YEAR: i64 = 2020;
/// Last season loaded into the demo dataset.
pub const DATASET_LAST_YEAR: i64 = 2024;

/// Type-safe wrapper for a season year.
///
/// Any integer is accepted; Bolt integers are 64-bit and a year outside the
/// dataset just matches no seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Year(pub i64);

impl Year {
    pub fn new(year: i64) -> Self {
        Self(year)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = MlbError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Inclusive range of season years, `start <= end`.
///
/// # Examples
///
/// ```rust
/// use mlb_graph::{Year, YearWindow};
///
/// let window = YearWindow::new(Year::new(2021), Year::new(2023)).unwrap();
/// assert_eq!(window.to_string(), "2021-2023");
/// assert!(YearWindow::new(Year::new(2023), Year::new(2021)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearWindow", into = "RawYearWindow")]
pub struct YearWindow {
    start: Year,
    end: Year,
}

impl YearWindow {
    pub fn new(start: Year, end: Year) -> Result<Self> {
        if start > end {
            return Err(MlbError::InvalidYearWindow {
                start: start.as_i64(),
                end: end.as_i64(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Year {
        self.start
    }

    pub fn end(&self) -> Year {
        self.end
    }

    /// Replace either bound, re-checking the ordering.
    pub fn with_bounds(&self, start: Option<Year>, end: Option<Year>) -> Result<Self> {
        Self::new(start.unwrap_or(self.start), end.unwrap_or(self.end))
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self {
            start: Year(DATASET_FIRST_YEAR),
            end: Year(DATASET_LAST_YEAR),
        }
    }
}

impl fmt::Display for YearWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Serialize, Deserialize)]
struct RawYearWindow {
    start: i64,
    end: i64,
}

impl TryFrom<RawYearWindow> for YearWindow {
    type Error = MlbError;

    fn try_from(raw: RawYearWindow) -> Result<Self> {
        Self::new(Year(raw.start), Year(raw.end))
    }
}

impl From<YearWindow> for RawYearWindow {
    fn from(window: YearWindow) -> Self {
        Self {
            start: window.start.as_i64(),
            end: window.end.as_i64(),
        }
    }
}
