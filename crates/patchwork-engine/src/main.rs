//! Headless demo runner for the Patchwork puzzle engine.
//!
//! Builds one of the built-in demo levels, seeds its demo rule set, runs
//! the rewrite engine until no rule matches (or a step bound is hit), and
//! logs the outcome -- including whether the final board equals the
//! level's goal, a judgment that belongs to this collaborator layer and
//! deliberately not to the engine core.
//!
//! # Startup sequence
//!
//! 1. Load configuration from `patchwork.yaml` if present
//! 2. Initialize structured logging (tracing)
//! 3. Build the level named on the command line (default: `flip`)
//! 4. Run it to completion
//! 5. Log the result
//!
//! # Usage
//!
//! `patchwork-engine [LEVEL]` where `LEVEL` is `flip`, `maze`, or
//! `double`. `RUST_LOG` overrides the configured log filter.

mod error;
mod levels;

use std::path::Path;

use patchwork_core::config::EngineConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Configuration file read from the working directory when present.
const CONFIG_PATH: &str = "patchwork.yaml";

/// Application entry point for the demo runner.
///
/// # Errors
///
/// Returns an error if configuration loading or level construction fails,
/// or if an unknown level is requested.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_target(true)
        .init();

    info!("patchwork-engine starting");
    info!(
        step_interval_ms = config.pacing.step_interval_ms,
        frame_interval_ms = config.pacing.frame_interval_ms,
        max_steps = config.bounds.max_steps,
        "Configuration loaded"
    );

    // 3-5. Build and run the requested level.
    let name = std::env::args().nth(1).unwrap_or_else(|| "flip".to_owned());
    levels::run(&name, &config)?;
    Ok(())
}

/// Load `patchwork.yaml` from the working directory, falling back to the
/// default configuration when the file does not exist.
fn load_config() -> Result<EngineConfig, EngineError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        Ok(EngineConfig::from_file(path)?)
    } else {
        Ok(EngineConfig::default())
    }
}
