//! Graph access layer for the MLB graph CLI
//!
//! This module separates the Cypher text from the database that runs it:
//! - `queries`: one parameterized Cypher query per question
//! - `models`: typed rows returned by each query
//! - `neo4j`: the Bolt-backed [`GraphSource`] built on `neo4rs`
//! - `recorded`: an in-memory [`GraphSource`] that replays canned rows

pub mod models;
pub mod neo4j;
pub mod queries;
pub mod recorded;


use crate::error::Result;
use serde::de::DeserializeOwned;
use std::fmt;

pub use models::*;
pub use neo4j::Neo4jGraph;
pub use recorded::RecordedGraph;

/// A value bound to a `$name` placeholder in a Cypher query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Text(String),
    Int(i64),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Text(s) => write!(f, "{:?}", s),
            Param::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

/// A named Cypher query with its bound parameters.
///
/// `name` identifies the question independently of the query text, which is
/// what [`RecordedGraph`] keys its canned rows on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CypherQuery {
    pub name: &'static str,
    pub text: String,
    pub params: Vec<(&'static str, Param)>,
}

impl CypherQuery {
    pub fn new(name: &'static str, text: impl Into<String>) -> Self {
        Self {
            name,
            text: text.into(),
            params: Vec::new(),
        }
    }

    /// Bind a parameter (fluent style).
    pub fn param(mut self, key: &'static str, value: impl Into<Param>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    pub fn get_param(&self, key: &str) -> Option<&Param> {
        self.params
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    /// `key=value` pairs for log lines.
    pub fn describe_params(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Something that can run a read-only Cypher query and decode its rows.
///
/// Records come back in the order the engine produced them.
#[allow(async_fn_in_trait)]
pub trait GraphSource {
    /// Run `query` and decode each record into `T` by output column name.
    async fn fetch<T: DeserializeOwned>(&self, query: &CypherQuery) -> Result<Vec<T>>;
}
