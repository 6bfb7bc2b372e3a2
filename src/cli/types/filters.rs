//! Threshold and output options shared by the query commands.

use crate::error::{MlbError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum count used by the aggregate questions (team-seasons, shared seasons).
///
/// Blank input falls back to the default of 2. Zero or negative thresholds
/// are passed through and simply admit every group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinCount(pub i64);

impl MinCount {
    pub fn new(count: i64) -> Self {
        Self(count)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Parse prompt input, treating an empty line as the default.
    pub fn parse_or_default(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            Ok(Self::default())
        } else {
            input.parse()
        }
    }
}

impl Default for MinCount {
    fn default() -> Self {
        Self(2)
    }
}

impl fmt::Display for MinCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MinCount {
    type Err = MlbError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// How a report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON rows
    Json,
}
