//! Headless run drivers for puzzles.
//!
//! The engine itself only exposes single steps and pacing ticks; these
//! helpers drive a puzzle the way the UI's frame loop would, without a UI:
//!
//! - [`run_to_completion`] steps as fast as possible until the run
//!   terminates or a step bound is hit.
//! - [`run_paced`] emulates the animation-frame driver: sleep one frame,
//!   tick with the current wall-clock time, repeat.
//!
//! Both are infallible. A rewrite run has no I/O and its only terminal
//! signal -- "no rule matched" -- is an outcome, not an error.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use tracing::info;

use crate::alphabet::Alphabet;
use crate::puzzle::Puzzle;
use crate::state::ExecState;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEndReason {
    /// No rule matched; the puzzle reached its terminal state.
    Finished,
    /// The configured maximum number of steps was reached first.
    StepLimit,
}

/// Result of driving a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Why the run ended.
    pub end_reason: RunEndReason,
    /// Number of step evaluations performed, including the terminal
    /// evaluation that found no match.
    pub steps: u64,
}

/// Step a puzzle until it finishes or `max_steps` evaluations have run.
///
/// A rule set that always matches never finishes on its own -- exactly as
/// in the interactive game -- so callers that cannot tolerate that should
/// pass a step bound.
pub fn run_to_completion<A: Alphabet>(
    puzzle: &mut Puzzle<A>,
    max_steps: Option<u64>,
) -> RunOutcome {
    let mut steps: u64 = 0;
    loop {
        if puzzle.state().is_finished() {
            info!(steps, "run finished: no rule matched");
            return RunOutcome {
                end_reason: RunEndReason::Finished,
                steps,
            };
        }
        if let Some(limit) = max_steps
            && steps >= limit
        {
            info!(steps, "run stopped: step limit reached");
            return RunOutcome {
                end_reason: RunEndReason::StepLimit,
                steps,
            };
        }
        puzzle.step(Utc::now());
        steps = steps.saturating_add(1);
    }
}

/// Drive a puzzle with time pacing, the way an animation loop would.
///
/// Performs the initial step (entering the run), then repeatedly sleeps
/// `frame_interval_ms` and calls [`Puzzle::tick`] with the current time
/// until the run leaves `Running`. The reported step count is the highest
/// iteration observed while running (the terminal no-match evaluation
/// happens inside a tick and is not separately visible).
pub fn run_paced<A: Alphabet>(
    puzzle: &mut Puzzle<A>,
    frame_interval_ms: u64,
    max_steps: Option<u64>,
) -> RunOutcome {
    puzzle.step(Utc::now());
    let mut steps: u64 = 1;

    while puzzle.state().is_running() {
        if let Some(limit) = max_steps
            && steps >= limit
        {
            info!(steps, "run stopped: step limit reached");
            return RunOutcome {
                end_reason: RunEndReason::StepLimit,
                steps,
            };
        }
        thread::sleep(Duration::from_millis(frame_interval_ms));
        puzzle.tick(Utc::now());
        if let ExecState::Running { iteration, .. } = puzzle.state() {
            steps = (*iteration).max(steps);
        }
    }

    info!(steps, "run finished: no rule matched");
    RunOutcome {
        end_reason: RunEndReason::Finished,
        steps,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use patchwork_board::{PatternCell, PatternSize, TileGrid};
    use patchwork_rules::Rule;

    /// A two-symbol alphabet cycling `0 -> 1 -> blank -> 0`.
    #[derive(Debug, Clone, Copy)]
    struct Binary;

    impl Alphabet for Binary {
        type Symbol = u8;

        fn advance(&self, current: Option<u8>) -> Option<u8> {
            match current {
                None => Some(0),
                Some(0) => Some(1),
                Some(_) => None,
            }
        }
    }

    /// The 3x3 flip puzzle with its solving rule seeded.
    fn flip_puzzle() -> Puzzle<Binary> {
        let start = TileGrid::from_rows(vec![vec![0u8; 3]; 3]);
        let goal = TileGrid::from_rows(vec![vec![1u8; 3]; 3]);
        let mut puzzle = Puzzle::new(start, goal, PatternSize::new(1, 1), Binary).unwrap();

        let mut rule = Rule::blank(PatternSize::new(1, 1));
        rule.from.set(1, 1, PatternCell::Symbol(0));
        rule.to.set(1, 1, PatternCell::Symbol(1));
        puzzle.insert_rule(rule);
        puzzle
    }

    #[test]
    fn runs_to_the_terminal_state() {
        let mut puzzle = flip_puzzle();
        let outcome = run_to_completion(&mut puzzle, None);
        assert_eq!(outcome.end_reason, RunEndReason::Finished);
        // Nine flips plus the terminal evaluation.
        assert_eq!(outcome.steps, 10);
        assert!(puzzle.state().is_finished());
        assert_eq!(puzzle.current_board(), puzzle.goal());
    }

    #[test]
    fn step_limit_cuts_the_run_short() {
        let mut puzzle = flip_puzzle();
        let outcome = run_to_completion(&mut puzzle, Some(3));
        assert_eq!(outcome.end_reason, RunEndReason::StepLimit);
        assert_eq!(outcome.steps, 3);
        assert!(puzzle.state().is_running());
    }

    #[test]
    fn rule_free_puzzle_finishes_immediately() {
        let start = TileGrid::from_rows(vec![vec![0u8]]);
        let goal = TileGrid::from_rows(vec![vec![1u8]]);
        let mut puzzle = Puzzle::new(start, goal, PatternSize::new(1, 1), Binary).unwrap();

        let outcome = run_to_completion(&mut puzzle, None);
        assert_eq!(outcome.end_reason, RunEndReason::Finished);
        assert_eq!(outcome.steps, 1);
        assert_eq!(puzzle.current_board(), puzzle.start());
    }

    #[test]
    fn paced_run_reaches_the_same_terminal_board() {
        let mut puzzle = flip_puzzle();
        // Zero pacing interval: every elapsed millisecond is overdue, so
        // the first tick after the initial step drains the whole run.
        puzzle.set_step_interval_ms(0);
        let outcome = run_paced(&mut puzzle, 1, None);
        assert_eq!(outcome.end_reason, RunEndReason::Finished);
        assert!(puzzle.state().is_finished());
        assert_eq!(puzzle.current_board(), puzzle.goal());
    }
}
