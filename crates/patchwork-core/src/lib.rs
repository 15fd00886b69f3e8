//! Execution core of the Patchwork puzzle engine.
//!
//! This crate drives the rewrite loop: it owns a puzzle's boards and rule
//! list, evaluates rules through the matcher in `patchwork-board`, and
//! exposes the discrete step / time-paced tick operations the UI
//! collaborator calls. Everything runs to completion synchronously on the
//! caller's thread; there is no internal locking and no suspension point.
//!
//! # Modules
//!
//! - [`alphabet`] -- the per-puzzle symbol-cycling capability a level
//!   supplies at construction.
//! - [`state`] -- [`ExecState`], the Idle/Running/Finished state machine
//!   states.
//! - [`puzzle`] -- [`Puzzle`], the aggregate: boards, rules, state, and
//!   the step/tick/cancel operations.
//! - [`config`] -- YAML-backed engine configuration (pacing, bounds,
//!   logging).
//! - [`runner`] -- headless drivers that run a puzzle to completion.

pub mod alphabet;
pub mod config;
pub mod puzzle;
pub mod runner;
pub mod state;

// Re-export primary types at crate root.
pub use alphabet::Alphabet;
pub use config::{BoundsConfig, ConfigError, EngineConfig, LoggingConfig, PacingConfig};
pub use puzzle::{DEFAULT_STEP_INTERVAL_MS, Puzzle, PuzzleError, RuleSide};
pub use runner::{RunEndReason, RunOutcome, run_paced, run_to_completion};
pub use state::ExecState;
