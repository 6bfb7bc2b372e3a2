//! Identifier types for teams and players.
//!
//! Identifiers are bound to queries as-is: an unknown or empty code simply
//! matches nothing.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a team code such as `BOS` or `NYA`.
///
/// Team codes are stored upper-cased in the graph, so the input is trimmed
/// and upper-cased on construction.
///
/// # Examples
///
/// ```rust
/// use mlb_graph::TeamId;
///
/// let team: TeamId = " bos ".parse().unwrap();
/// assert_eq!(team.as_str(), "BOS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Type-safe wrapper for player IDs (e.g. `bettsmo01`). Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: &str) -> Self {
        Self(id.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_is_upper_cased() {
        assert_eq!(TeamId::new("bos").as_str(), "BOS");
        assert_eq!(TeamId::new("  NyA\n").to_string(), "NYA");
    }

    #[test]
    fn test_blank_team_id_is_kept_empty() {
        assert_eq!(TeamId::new("   ").as_str(), "");
    }

    #[test]
    fn test_player_id_keeps_case() {
        let id: PlayerId = " bettsMo01 ".parse().unwrap();
        assert_eq!(id.as_str(), "bettsMo01");
    }

    #[test]
    fn test_blank_player_id_is_kept_empty() {
        assert_eq!("\n".parse::<PlayerId>().unwrap().as_str(), "");
    }
}
