//! The query façade: one method per baseball question.
//!
//! Each method builds its Cypher query, runs it against the [`GraphSource`],
//! and writes a report. An empty result prints a "not found" notice and is
//! not an error; any fault from the graph source is returned to the caller.

pub mod render;


use std::io::{self, Write};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{
    cli::types::{MinCount, OutputFormat, PlayerId, TeamId, Year, YearWindow},
    graph::{queries, CypherQuery, GraphSource},
    Result,
};

/// A question the façade can answer, with its arguments.
///
/// Built by the interactive menu and by the one-shot subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    PlayersOnTeam {
        team: TeamId,
        year: Year,
    },
    TeamSeasonSummary {
        team: TeamId,
        year: Year,
    },
    MultiTeamPlayers {
        window: YearWindow,
        min_team_seasons: MinCount,
    },
    ManagersAndParks {
        team: TeamId,
        year: Year,
    },
    TeammatePath {
        from: PlayerId,
        to: PlayerId,
    },
    SharedTeamSeasons {
        window: YearWindow,
        min_shared: MinCount,
    },
    TeamPath {
        player: PlayerId,
        window: YearWindow,
    },
    ManagerTree {
        first: PlayerId,
        second: PlayerId,
    },
}

/// Owns the graph handle and formats answers.
pub struct MlbApp<G> {
    graph: G,
    format: OutputFormat,
}

impl<G: GraphSource> MlbApp<G> {
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Give the handle back so the caller can close it.
    pub fn into_graph(self) -> G {
        self.graph
    }

    /// Run one query and write either its text report or its rows as JSON.
    async fn report<T, W, F>(&self, out: &mut W, query: CypherQuery, render: F) -> Result<()>
    where
        T: DeserializeOwned + Serialize,
        W: Write,
        F: FnOnce(&mut W, &[T]) -> io::Result<()>,
    {
        let rows: Vec<T> = self.graph.fetch(&query).await?;
        debug!(query = query.name, rows = rows.len(), "rendering report");

        match self.format {
            OutputFormat::Text => render(out, &rows)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &rows)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Dispatch a [`Question`] to its method.
    pub async fn answer<W: Write>(&self, out: &mut W, question: &Question) -> Result<()> {
        match question {
            Question::PlayersOnTeam { team, year } => {
                self.players_on_team_in_year(out, team, *year).await
            }
            Question::TeamSeasonSummary { team, year } => {
                self.team_season_summary(out, team, *year).await
            }
            Question::MultiTeamPlayers {
                window,
                min_team_seasons,
            } => {
                self.multi_team_players(out, *window, *min_team_seasons)
                    .await
            }
            Question::ManagersAndParks { team, year } => {
                self.managers_and_parks_for_team_year(out, team, *year)
                    .await
            }
            Question::TeammatePath { from, to } => self.shortest_teammate_path(out, from, to).await,
            Question::SharedTeamSeasons { window, min_shared } => {
                self.players_with_shared_team_seasons(out, *window, *min_shared)
                    .await
            }
            Question::TeamPath { player, window } => {
                self.player_team_path_and_followers(out, player, *window)
                    .await
            }
            Question::ManagerTree { first, second } => {
                self.manager_tree_connection(out, first, second).await
            }
        }
    }

    /// List players who appeared for `team` in `year`, alphabetically.
    pub async fn players_on_team_in_year<W: Write>(
        &self,
        out: &mut W,
        team: &TeamId,
        year: Year,
    ) -> Result<()> {
        let query = queries::players_on_team_in_year(team, year);
        self.report(out, query, |out, rows| {
            render::players_on_team(out, team, year, rows)
        })
        .await
    }

    /// Wins, losses, runs and attendance for one team season.
    pub async fn team_season_summary<W: Write>(
        &self,
        out: &mut W,
        team: &TeamId,
        year: Year,
    ) -> Result<()> {
        let query = queries::team_season_summary(team, year);
        self.report(out, query, |out, rows| {
            render::team_season_summary(out, team, year, rows)
        })
        .await
    }

    /// Players with at least `min_team_seasons` distinct team seasons in `window`.
    pub async fn multi_team_players<W: Write>(
        &self,
        out: &mut W,
        window: YearWindow,
        min_team_seasons: MinCount,
    ) -> Result<()> {
        let query = queries::multi_team_players(window, min_team_seasons);
        self.report(out, query, |out, rows| {
            render::multi_team_players(out, window, min_team_seasons, rows)
        })
        .await
    }

    pub async fn managers_and_parks_for_team_year<W: Write>(
        &self,
        out: &mut W,
        team: &TeamId,
        year: Year,
    ) -> Result<()> {
        let query = queries::managers_and_parks(team, year);
        self.report(out, query, |out, rows| {
            render::managers_and_parks(out, team, year, rows)
        })
        .await
    }

    /// How two players are connected through teammates, at most six hops.
    pub async fn shortest_teammate_path<W: Write>(
        &self,
        out: &mut W,
        from: &PlayerId,
        to: &PlayerId,
    ) -> Result<()> {
        let query = queries::shortest_teammate_path(from, to);
        self.report(out, query, |out, rows| {
            render::teammate_path(out, from, to, rows)
        })
        .await
    }

    pub async fn players_with_shared_team_seasons<W: Write>(
        &self,
        out: &mut W,
        window: YearWindow,
        min_shared: MinCount,
    ) -> Result<()> {
        let query = queries::shared_team_seasons(window, min_shared);
        self.report(out, query, |out, rows| {
            render::shared_team_seasons(out, window, min_shared, rows)
        })
        .await
    }

    /// The player's ordered team path and everyone who followed it exactly.
    pub async fn player_team_path_and_followers<W: Write>(
        &self,
        out: &mut W,
        player: &PlayerId,
        window: YearWindow,
    ) -> Result<()> {
        let query = queries::team_path_followers(player, window);
        self.report(out, query, |out, rows| {
            render::team_path(out, player, window, rows)
        })
        .await
    }

    pub async fn manager_tree_connection<W: Write>(
        &self,
        out: &mut W,
        first: &PlayerId,
        second: &PlayerId,
    ) -> Result<()> {
        let query = queries::manager_tree_connection(first, second);
        self.report(out, query, |out, rows| {
            render::manager_tree(out, first, second, rows)
        })
        .await
    }
}
