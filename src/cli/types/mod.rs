//! Type-safe wrappers for teams, players, years and thresholds.

pub mod filters;
pub mod ids;
pub mod time;

pub use filters::{MinCount, OutputFormat};
pub use ids::{PlayerId, TeamId};
pub use time::{Year, YearWindow};
