//! # Driver Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (per scenario) ──► printed as "Error: ..." ──► next scenario │
//! │                                                                         │
//! │  ConfigError ──┐                                                        │
//! │  io::Error ────┼──► DemoError ──► main() exits non-zero                 │
//! │  serde_json ───┘                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checkout failures are expected outcomes of the scenarios and never
//! become a `DemoError`.

use std::path::PathBuf;

use checkout_core::ValidationError;
use thiserror::Error;

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`DemoConfig`](crate::config::DemoConfig).
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment override could not be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// Shipping rate rejected by the core rules.
    #[error("Invalid shipping rate: {0}")]
    InvalidRate(#[from] ValidationError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Anything that stops the driver as a whole.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode receipt: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DemoResult<T> = Result<T, DemoError>;
