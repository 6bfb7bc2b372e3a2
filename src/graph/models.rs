//! Typed rows returned by the baseball queries.
//!
//! Field names match the `AS` aliases in [`super::queries`]; Bolt integers
//! decode as `i64`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A player on a team's roster for one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: String,
    pub name: String,
    pub team: Option<String>,
    pub year: i64,
}

/// Statistics for one team season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub team: Option<String>,
    pub team_id: String,
    pub year: i64,
    pub division: Option<String>,
    pub rank: Option<i64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub runs: Option<i64>,
    pub home_runs: Option<i64>,
    pub attendance: Option<i64>,
}

/// A player with at least the requested number of team-seasons in a window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiTeamPlayer {
    pub player: String,
    pub player_id: String,
    pub team_seasons: i64,
}

/// Managers and home parks collected for one team season.
///
/// The collected lists may contain nulls; use [`Self::managers`] and
/// [`Self::parks`] to read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagersAndParks {
    pub team: Option<String>,
    pub year: i64,
    pub managers: Vec<Option<String>>,
    pub parks: Vec<Option<String>>,
}

impl ManagersAndParks {
    pub fn managers(&self) -> Vec<&str> {
        self.managers.iter().flatten().map(String::as_str).collect()
    }

    pub fn parks(&self) -> Vec<&str> {
        self.parks.iter().flatten().map(String::as_str).collect()
    }
}

/// One node on a teammate path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    pub labels: Vec<String>,
    pub name: String,
}

/// Shortest teammate path, as parallel node and relationship-type lists.
///
/// `relationships[i]` joins `nodes[i]` and `nodes[i + 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeammatePath {
    pub nodes: Vec<PathNode>,
    pub relationships: Vec<String>,
}

impl TeammatePath {
    pub fn hops(&self) -> usize {
        self.relationships.len()
    }
}

/// A team season referenced from another row, e.g. `BOS 2021`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeasonRef {
    pub team_id: String,
    pub year: i64,
}

impl fmt::Display for TeamSeasonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.team_id, self.year)
    }
}

/// An unordered pair of players with their shared team seasons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedSeasonPair {
    pub player1: String,
    pub player_id1: String,
    pub player2: String,
    pub player_id2: String,
    pub shared_count: i64,
    pub shared_seasons: Vec<TeamSeasonRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follower {
    pub name: String,
    pub player_id: String,
}

/// A player's ordered team path and the players who followed it exactly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPath {
    pub player: String,
    pub player_id: String,
    pub team_sequence: Vec<String>,
    pub year_sequence: Vec<i64>,
    pub followers: Vec<Follower>,
}

impl TeamPath {
    /// `(year, team)` steps in path order.
    pub fn steps(&self) -> impl Iterator<Item = (i64, &str)> {
        self.year_sequence
            .iter()
            .copied()
            .zip(self.team_sequence.iter().map(String::as_str))
    }
}

/// One manager-mediated link between two players
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerLink {
    pub manager: String,
    pub player1: String,
    pub player_id1: String,
    pub player2: String,
    pub player_id2: String,
    pub team1: String,
    pub year1: i64,
    pub team2: String,
    pub year2: i64,
}
