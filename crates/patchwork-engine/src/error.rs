//! Error types for the demo runner binary.

/// Top-level error for the demo runner.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: patchwork_core::config::ConfigError,
    },

    /// Building a demo level failed.
    #[error("puzzle error: {source}")]
    Puzzle {
        /// The underlying puzzle construction error.
        #[from]
        source: patchwork_core::puzzle::PuzzleError,
    },

    /// The requested level does not exist.
    #[error("unknown level: {name} (expected flip, maze, or double)")]
    UnknownLevel {
        /// The requested level name.
        name: String,
    },
}
