//! Bolt connection to the Neo4j database holding the baseball graph.

use std::time::Instant;

use neo4rs::{query, ConfigBuilder, Graph, Query};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{CypherQuery, GraphSource, Param};
use crate::{core::config::ConnectionSettings, Result};

/// [`GraphSource`] backed by a pooled `neo4rs` connection.
///
/// The handle is opened once at startup and closed when dropped. Every query
/// runs against the logical database named in the settings.
pub struct Neo4jGraph {
    graph: Graph,
}

impl Neo4jGraph {
    /// Connect to the configured server and database.
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self> {
        info!(uri = %settings.uri, database = %settings.database, "connecting to neo4j");
        let config = ConfigBuilder::default()
            .uri(settings.uri.as_str())
            .user(settings.user.as_str())
            .password(settings.password.as_str())
            .db(settings.database.as_str())
            .build()?;
        let graph = Graph::connect(config).await?;
        Ok(Self { graph })
    }
}

/// Convert our query description into a driver query with bound parameters.
fn to_driver_query(cypher: &CypherQuery) -> Query {
    cypher
        .params
        .iter()
        .fold(query(&cypher.text), |q, (key, value)| match value {
            Param::Text(s) => q.param(key, s.clone()),
            Param::Int(n) => q.param(key, *n),
        })
}

impl GraphSource for Neo4jGraph {
    async fn fetch<T: DeserializeOwned>(&self, cypher: &CypherQuery) -> Result<Vec<T>> {
        debug!(query = cypher.name, params = %cypher.describe_params(), "running cypher");
        let started = Instant::now();

        let mut stream = self.graph.execute(to_driver_query(cypher)).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row.to::<T>()?);
        }

        info!(
            query = cypher.name,
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "query finished"
        );
        Ok(rows)
    }
}
