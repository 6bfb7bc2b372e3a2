//! CLI argument definitions and parsing.

pub mod menu;
pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{MinCount, OutputFormat, PlayerId, TeamId, Year, YearWindow};

use crate::{commands::Question, core::ConnectionOverrides};

/// Connection flags; each falls back to its `MLB_GRAPH_*` env var, then the config file.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Bolt URI of the Neo4j server (or set `MLB_GRAPH_URI`).
    #[clap(long)]
    pub uri: Option<String>,

    /// Database user (or set `MLB_GRAPH_USER`).
    #[clap(long)]
    pub user: Option<String>,

    /// Database password (or set `MLB_GRAPH_PASSWORD`).
    #[clap(long)]
    pub password: Option<String>,

    /// Logical database holding the baseball graph (or set `MLB_GRAPH_DATABASE`).
    #[clap(long)]
    pub database: Option<String>,
}

impl From<ConnectionArgs> for ConnectionOverrides {
    fn from(args: ConnectionArgs) -> Self {
        Self {
            uri: args.uri,
            user: args.user,
            password: args.password,
            database: args.database,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(name = "mlb-graph", about = "Ask baseball questions of an MLB graph database")]
pub struct MlbGraph {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    /// Config file (default: `<config dir>/mlb-graph/config.json`).
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// First season of the window used by multi-season questions.
    #[clap(long)]
    pub start_year: Option<Year>,

    /// Last season (inclusive) of the window used by multi-season questions.
    #[clap(long)]
    pub end_year: Option<Year>,

    /// Output results as JSON instead of text (one-shot commands only).
    #[clap(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

impl MlbGraph {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive menu (the default when no command is given)
    Menu,

    /// List players on a team for a given year
    Players {
        /// Team code, e.g. BOS.
        #[clap(long, short)]
        team: TeamId,

        /// Season year.
        #[clap(long, short)]
        year: Year,
    },

    /// Show a team's season summary
    Summary {
        #[clap(long, short)]
        team: TeamId,

        #[clap(long, short)]
        year: Year,
    },

    /// Players who appeared for several team-seasons in the year window
    MultiTeam {
        /// Minimum number of distinct team-seasons.
        #[clap(long, default_value_t = MinCount::default())]
        min_team_seasons: MinCount,
    },

    /// Managers and home parks for a team & year
    ManagersParks {
        #[clap(long, short)]
        team: TeamId,

        #[clap(long, short)]
        year: Year,
    },

    /// Shortest teammate path between two players
    TeammatePath { from: PlayerId, to: PlayerId },

    /// Player pairs who shared several team-seasons in the year window
    SharedSeasons {
        /// Minimum number of shared team-seasons.
        #[clap(long, default_value_t = MinCount::default())]
        min_shared: MinCount,
    },

    /// A player's ordered team path and the players who followed it
    TeamPath { player: PlayerId },

    /// Manager-tree connections between two players
    ManagerTree { first: PlayerId, second: PlayerId },
}

impl Commands {
    /// The question this command asks, or `None` for the interactive menu.
    pub fn into_question(self, window: YearWindow) -> Option<Question> {
        let question = match self {
            Commands::Menu => return None,
            Commands::Players { team, year } => Question::PlayersOnTeam { team, year },
            Commands::Summary { team, year } => Question::TeamSeasonSummary { team, year },
            Commands::MultiTeam { min_team_seasons } => Question::MultiTeamPlayers {
                window,
                min_team_seasons,
            },
            Commands::ManagersParks { team, year } => Question::ManagersAndParks { team, year },
            Commands::TeammatePath { from, to } => Question::TeammatePath { from, to },
            Commands::SharedSeasons { min_shared } => {
                Question::SharedTeamSeasons { window, min_shared }
            }
            Commands::TeamPath { player } => Question::TeamPath { player, window },
            Commands::ManagerTree { first, second } => Question::ManagerTree { first, second },
        };
        Some(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = MlbGraph::try_parse_from(["mlb-graph"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_players_command_builds_question() {
        let cli =
            MlbGraph::try_parse_from(["mlb-graph", "players", "--team", "bos", "--year", "2023"])
                .unwrap();
        let question = cli.command.unwrap().into_question(YearWindow::default());
        assert_eq!(
            question,
            Some(Question::PlayersOnTeam {
                team: TeamId::new("BOS"),
                year: Year::new(2023),
            })
        );
    }

    #[test]
    fn test_window_and_threshold_flags() {
        let cli = MlbGraph::try_parse_from([
            "mlb-graph",
            "--start-year",
            "2021",
            "shared-seasons",
            "--min-shared",
            "3",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.start_year, Some(Year::new(2021)));
        assert_eq!(cli.output_format(), OutputFormat::Json);

        let window = YearWindow::new(Year::new(2021), Year::new(2024)).unwrap();
        let question = cli.command.unwrap().into_question(window);
        assert_eq!(
            question,
            Some(Question::SharedTeamSeasons {
                window,
                min_shared: MinCount::new(3),
            })
        );
    }

    #[test]
    fn test_multi_team_default_threshold() {
        let cli = MlbGraph::try_parse_from(["mlb-graph", "multi-team"]).unwrap();
        match cli.command {
            Some(Commands::MultiTeam { min_team_seasons }) => {
                assert_eq!(min_team_seasons, MinCount::new(2));
            }
            other => panic!("Expected MultiTeam, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_year_rejected_by_parser() {
        let result =
            MlbGraph::try_parse_from(["mlb-graph", "summary", "--team", "BOS", "--year", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_menu_command_has_no_question() {
        assert_eq!(Commands::Menu.into_question(YearWindow::default()), None);
    }

    #[test]
    fn test_connection_args_become_overrides() {
        let cli = MlbGraph::try_parse_from(["mlb-graph", "--uri", "bolt://x:7687", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let overrides = ConnectionOverrides::from(cli.connection);
        assert_eq!(overrides.uri.as_deref(), Some("bolt://x:7687"));
        assert!(overrides.database.is_none());
    }
}
