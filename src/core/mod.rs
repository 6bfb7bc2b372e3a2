//! Core utilities for the MLB graph CLI
//!
//! - `config`: connection settings, config file loading and override precedence

pub mod config;

pub use config::{default_config_path, AppConfig, ConnectionOverrides, ConnectionSettings};
