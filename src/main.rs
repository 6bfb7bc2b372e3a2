//! Entry point: parse CLI, connect, then run one command or the interactive menu.

use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use mlb_graph::{
    cli::{menu::Menu, MlbGraph},
    commands::MlbApp,
    core::{default_config_path, AppConfig},
    graph::Neo4jGraph,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = MlbGraph::parse();
    init_logging(app.verbose);

    let config_path = app.config.clone().unwrap_or_else(default_config_path);
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    let window = config
        .window
        .with_bounds(app.start_year, app.end_year)
        .context("resolving the year window")?;

    let format = app.output_format();
    let question = app.command.and_then(|cmd| cmd.into_question(window));
    let settings = config.resolve_connection(app.connection.into());
    let graph = Neo4jGraph::connect(&settings)
        .await
        .with_context(|| format!("connecting to neo4j at {}", settings.uri))?;

    let facade = match question {
        Some(question) => {
            let facade = MlbApp::new(graph).with_format(format);
            let mut out = BufWriter::new(io::stdout().lock());
            facade.answer(&mut out, &question).await?;
            facade
        }
        None => {
            // The menu always prints text reports.
            let facade = MlbApp::new(graph);
            let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock(), window);
            menu.run(&facade).await?;
            facade
        }
    };

    drop(facade.into_graph());
    Ok(())
}
