//! In-memory graph source that replays canned records.
//!
//! Rows are stored as JSON objects keyed by query name and decoded through
//! the same `serde` row types the Neo4j source uses. Every executed query is
//! logged so callers can inspect the Cypher and parameters that were sent.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::{CypherQuery, GraphSource};
use crate::{MlbError, Result};

#[derive(Debug, Default)]
pub struct RecordedGraph {
    rows: HashMap<&'static str, Vec<Value>>,
    log: Mutex<Vec<CypherQuery>>,
}

impl RecordedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rows returned for every query named `name`.
    pub fn with_rows(mut self, name: &'static str, rows: Vec<Value>) -> Self {
        self.rows.insert(name, rows);
        self
    }

    /// Queries executed so far, oldest first.
    pub fn executed(&self) -> Vec<CypherQuery> {
        self.log
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last_query(&self) -> Option<CypherQuery> {
        self.executed().pop()
    }
}

impl GraphSource for RecordedGraph {
    async fn fetch<T: DeserializeOwned>(&self, query: &CypherQuery) -> Result<Vec<T>> {
        debug!(query = query.name, params = %query.describe_params(), "replaying recorded rows");
        self.log
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(query.clone());

        self.rows
            .get(query.name)
            .map(|rows| {
                rows.iter()
                    .map(|row| serde_json::from_value(row.clone()).map_err(MlbError::from))
                    .collect()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
