//! # checkout-demo
//!
//! Console driver for checkout-core.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load config (file, then environment overrides)
//! 3. Read today's local date
//! 4. Run the five scenarios, receipts to stdout, errors to stderr

pub mod config;
pub mod error;
pub mod scenarios;

use std::io;

use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::error::DemoResult;
use crate::scenarios::RunSummary;

/// Runs the driver end to end.
pub fn run() -> DemoResult<RunSummary> {
    init_tracing();

    let config = DemoConfig::load(None)?;
    let today = Local::now().date_naive();
    info!(%today, format = %config.receipt_format, "running checkout scenarios");

    let stdout = io::stdout();
    let stderr = io::stderr();
    scenarios::run_all(&config, today, &mut stdout.lock(), &mut stderr.lock())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every checkout phase
/// - `RUST_LOG=checkout_core=trace` - Core crate only
/// - Default: errors only, so stderr carries one line per failed scenario
///
/// Logs go to stderr so stdout carries only the transcript.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
