//! MLB Graph CLI Library
//!
//! Asks questions of a Neo4j graph of historical baseball statistics
//! (players, teams, seasons, managers, parks) and prints the answers.
//!
//! ## Features
//!
//! - **Query Façade**: one method per question on [`commands::MlbApp`]
//! - **Engine-side traversal**: shortest paths, pattern matching and aggregation
//!   all run in Cypher; Rust only binds parameters and formats rows
//! - **Typed rows**: every query decodes into its own `serde` struct
//! - **Swappable source**: [`graph::Neo4jGraph`] for a live database,
//!   [`graph::RecordedGraph`] for canned rows
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_graph::{commands::MlbApp, core::ConnectionSettings, graph::Neo4jGraph, TeamId, Year};
//!
//! # async fn example() -> mlb_graph::Result<()> {
//! let graph = Neo4jGraph::connect(&ConnectionSettings::default()).await?;
//! let app = MlbApp::new(graph);
//!
//! let team = TeamId::new("BOS");
//! app.team_season_summary(&mut std::io::stdout(), &team, Year::new(2023))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Connection settings can come from the environment instead of flags:
//! ```bash
//! export MLB_GRAPH_URI=neo4j://127.0.0.1:7687
//! export MLB_GRAPH_PASSWORD=secret
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod graph;

// Re-export commonly used types
pub use cli::types::{MinCount, OutputFormat, PlayerId, TeamId, Year, YearWindow};
pub use error::{MlbError, Result};
