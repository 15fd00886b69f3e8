//! Execution states of a puzzle run.

use chrono::{DateTime, Utc};
use patchwork_board::TileGrid;

/// The discrete states of the execution state machine.
///
/// Transitions are produced only by the engine (see
/// [`Puzzle::step`](crate::puzzle::Puzzle::step) and friends); the UI
/// collaborator reads these for display and may only request a step, a
/// tick, or a reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecState<S> {
    /// No run in progress.
    Idle,
    /// A run is in progress.
    Running {
        /// The board produced by the most recent step.
        board: TileGrid<S>,
        /// Current order index of the rule that produced it.
        active_rule: usize,
        /// 1-based count of steps taken this run.
        iteration: u64,
        /// Wall-clock time the run started; fixed for the whole run.
        started_at: DateTime<Utc>,
    },
    /// The run is over: this is the board no rule matched.
    Finished {
        /// The final board.
        board: TileGrid<S>,
    },
}

impl<S> ExecState<S> {
    /// Whether no run is in progress.
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether a run is in progress.
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// Whether the run has terminated.
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    /// The board held by this state, if any (`Idle` holds none).
    pub const fn board(&self) -> Option<&TileGrid<S>> {
        match self {
            Self::Idle => None,
            Self::Running { board, .. } | Self::Finished { board } => Some(board),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_variants() {
        let idle: ExecState<u8> = ExecState::Idle;
        assert!(idle.is_idle());
        assert!(!idle.is_running());
        assert!(!idle.is_finished());
        assert!(idle.board().is_none());

        let finished = ExecState::Finished {
            board: TileGrid::from_rows(vec![vec![1u8]]),
        };
        assert!(finished.is_finished());
        assert_eq!(finished.board().unwrap().get(0, 0), Some(&1));
    }
}
