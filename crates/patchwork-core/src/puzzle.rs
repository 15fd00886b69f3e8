//! The puzzle aggregate: boards, rules, and the execution state machine.
//!
//! A [`Puzzle`] owns everything a single level needs: the start and goal
//! boards, the ordered rule list, and the current [`ExecState`]. The UI
//! collaborator drives it through [`Puzzle::step`], [`Puzzle::tick`], and
//! [`Puzzle::cancel`], mutates rules through the editing methods, and
//! reads immutable snapshots back for display.
//!
//! # Execution model
//!
//! One step scans the rule list in its current order and applies the first
//! rule whose `from` pattern matches the current board; the rewritten
//! board becomes the new running board. When no rule matches, the run is
//! finished. [`Puzzle::tick`] layers time pacing on top: it drains as many
//! steps as needed to keep the run at one step per step interval of
//! elapsed wall-clock time, so a caller that re-renders on state change
//! sees at most one change per tick call.
//!
//! The goal board is stored for display handoff only. Whether the final
//! board matches it is the collaborator's judgment; the engine neither
//! checks nor cares.

use chrono::{DateTime, Utc};
use tracing::debug;

use patchwork_board::{PatternCell, PatternSize, TileGrid, rewrite};
use patchwork_rules::{Rule, RuleId, StableList};

use crate::alphabet::Alphabet;
use crate::state::ExecState;

/// Default pacing: one step per 100 ms of elapsed run time.
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 100;

/// Errors that can occur when constructing a puzzle.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// The start or goal board has no tiles.
    #[error("{which} board must contain at least one tile")]
    EmptyBoard {
        /// Which board was empty (`"start"` or `"goal"`).
        which: &'static str,
    },

    /// The configured rule size is degenerate.
    #[error("rule size must be at least 1x1, got {width}x{height}")]
    InvalidRuleSize {
        /// Configured pattern width.
        width: i64,
        /// Configured pattern height.
        height: i64,
    },
}

/// Which half of a rule an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSide {
    /// The pattern searched for on the board.
    From,
    /// The replacement pattern.
    To,
}

/// A single puzzle level and its execution state.
///
/// The puzzle, its boards, and its rule list are exclusively owned by one
/// engine instance; accessors hand out shared references that the
/// collaborator must treat as read-only snapshots.
pub struct Puzzle<A: Alphabet> {
    /// The board every run begins from.
    start: TileGrid<A::Symbol>,
    /// The target board, stored for display handoff only.
    goal: TileGrid<A::Symbol>,
    /// Fixed dimensions of every rule's patterns.
    rule_size: PatternSize,
    /// The level-supplied symbol cycle used by cell edits.
    alphabet: A,
    /// The player's ordered rule program.
    rules: StableList<Rule<A::Symbol>>,
    /// Current execution state.
    state: ExecState<A::Symbol>,
    /// Milliseconds of elapsed run time budgeted per step by [`Puzzle::tick`].
    step_interval_ms: u64,
}

impl<A: Alphabet> Puzzle<A> {
    /// Create a puzzle from its start board, goal board, rule size, and
    /// alphabet. The rule list starts empty and the state is `Idle`.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyBoard`] if either board has no tiles,
    /// or [`PuzzleError::InvalidRuleSize`] for a rule size below 1x1.
    pub fn new(
        start: TileGrid<A::Symbol>,
        goal: TileGrid<A::Symbol>,
        rule_size: PatternSize,
        alphabet: A,
    ) -> Result<Self, PuzzleError> {
        if rule_size.width < 1 || rule_size.height < 1 {
            return Err(PuzzleError::InvalidRuleSize {
                width: rule_size.width,
                height: rule_size.height,
            });
        }
        if start.is_empty() {
            return Err(PuzzleError::EmptyBoard { which: "start" });
        }
        if goal.is_empty() {
            return Err(PuzzleError::EmptyBoard { which: "goal" });
        }
        Ok(Self {
            start,
            goal,
            rule_size,
            alphabet,
            rules: StableList::new(),
            state: ExecState::Idle,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
        })
    }

    // -------------------------------------------------------------------
    // Read accessors
    // -------------------------------------------------------------------

    /// The current execution state.
    pub const fn state(&self) -> &ExecState<A::Symbol> {
        &self.state
    }

    /// The board every run begins from.
    pub const fn start(&self) -> &TileGrid<A::Symbol> {
        &self.start
    }

    /// The target board. Not consulted by the engine; handed back for
    /// display and for the collaborator's own win judgment.
    pub const fn goal(&self) -> &TileGrid<A::Symbol> {
        &self.goal
    }

    /// Fixed dimensions of every rule's patterns.
    pub const fn rule_size(&self) -> PatternSize {
        self.rule_size
    }

    /// The current rule list.
    pub const fn rules(&self) -> &StableList<Rule<A::Symbol>> {
        &self.rules
    }

    /// The board to display for the current state: the running board, the
    /// finished board, or the start board when idle.
    pub const fn current_board(&self) -> &TileGrid<A::Symbol> {
        match self.state.board() {
            Some(board) => board,
            None => &self.start,
        }
    }

    /// The pacing interval used by [`Puzzle::tick`], in milliseconds.
    pub const fn step_interval_ms(&self) -> u64 {
        self.step_interval_ms
    }

    /// Override the pacing interval used by [`Puzzle::tick`].
    pub const fn set_step_interval_ms(&mut self, interval_ms: u64) {
        self.step_interval_ms = interval_ms;
    }

    // -------------------------------------------------------------------
    // Execution
    // -------------------------------------------------------------------

    /// Perform one step of execution.
    ///
    /// From `Idle` the rules are evaluated against the start board; from
    /// `Running` against the current running board. The first rule in list
    /// order whose `from` pattern matches produces the next board; no
    /// match ends the run with the unmatched board. `now` becomes the
    /// run's start time when this step enters `Running` from `Idle`.
    ///
    /// On `Finished` this is a no-op: the machine never leaves `Finished`
    /// without an explicit [`Puzzle::cancel`].
    pub fn step(&mut self, now: DateTime<Utc>) {
        if self.state.is_finished() {
            return;
        }
        self.state = self.execute_step(now);
    }

    /// Advance a running puzzle to keep pace with wall-clock time.
    ///
    /// Drains one step for every full step interval of elapsed run time
    /// not yet accounted for, stopping as soon as the pacing condition
    /// fails or the run finishes. Calling again with the same `now`
    /// performs zero extra steps, so an external frame loop may call this
    /// as often as it likes. A tick on `Idle` or `Finished` is a no-op.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        let mut drained: u64 = 0;
        while let ExecState::Running {
            iteration,
            started_at,
            ..
        } = &self.state
        {
            if !step_due(*iteration, *started_at, now, self.step_interval_ms) {
                break;
            }
            self.state = self.execute_step(now);
            drained = drained.saturating_add(1);
        }
        if drained > 0 {
            debug!(steps = drained, "tick drained steps");
        }
    }

    /// Reset to `Idle`, unconditionally discarding any run state.
    pub fn cancel(&mut self) {
        self.state = ExecState::Idle;
    }

    /// Evaluate one step against the current board and produce the next
    /// state. Never called on `Finished`.
    fn execute_step(&self, now: DateTime<Utc>) -> ExecState<A::Symbol> {
        let current = self.current_board();

        // First matching rule in list order wins.
        let mut matched: Option<(usize, TileGrid<A::Symbol>)> = None;
        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(next) = rewrite::replace(&rule.from, &rule.to, current) {
                matched = Some((index, next));
                break;
            }
        }

        let Some((active_rule, board)) = matched else {
            debug!("no rule matched; run finished");
            return ExecState::Finished {
                board: current.clone(),
            };
        };

        match &self.state {
            ExecState::Running {
                iteration,
                started_at,
                ..
            } => {
                let iteration = iteration.saturating_add(1);
                debug!(rule = active_rule, iteration, "rule applied");
                ExecState::Running {
                    board,
                    active_rule,
                    iteration,
                    started_at: *started_at,
                }
            }
            ExecState::Idle | ExecState::Finished { .. } => {
                debug!(rule = active_rule, "run started");
                ExecState::Running {
                    board,
                    active_rule,
                    iteration: 1,
                    started_at: now,
                }
            }
        }
    }

    // -------------------------------------------------------------------
    // Rule editing
    // -------------------------------------------------------------------
    //
    // Edits do not cancel an in-progress run; the collaborator decides
    // when to issue `cancel` around them.

    /// Append a rule. Returns its stable id.
    pub fn insert_rule(&mut self, rule: Rule<A::Symbol>) -> RuleId {
        self.rules.insert(rule)
    }

    /// Append a fresh all-wildcard rule of the configured size.
    pub fn insert_blank_rule(&mut self) -> RuleId {
        self.rules.insert(Rule::blank(self.rule_size))
    }

    /// Delete the rule at `index`. Out of range is ignored.
    pub fn delete_rule(&mut self, index: usize) {
        self.rules.delete(index);
    }

    /// Swap the rule at `index` with its predecessor; `raise_rule(0)`
    /// does nothing.
    pub fn raise_rule(&mut self, index: usize) {
        self.rules.raise(index);
    }

    /// Swap the rule at `index` with its successor; lowering the last
    /// rule does nothing.
    pub fn lower_rule(&mut self, index: usize) {
        self.rules.lower(index);
    }

    /// Cycle the cell at `(x, y)` in one half of the rule at `index` to
    /// the next value in the puzzle's alphabet.
    ///
    /// A blank cell advances to the alphabet's first value; the cycle
    /// eventually returns to blank (a wildcard), clearing the cell's
    /// constraint. Out of range is ignored.
    pub fn advance_cell(&mut self, index: usize, side: RuleSide, x: i64, y: i64) {
        let Some(rule) = self.rules.get(index) else {
            return;
        };
        let half = match side {
            RuleSide::From => &rule.from,
            RuleSide::To => &rule.to,
        };
        let current = half.get(x, y).and_then(|cell| cell.symbol().cloned());
        let next = PatternCell::from(self.alphabet.advance(current));
        self.rules.replace(index, |rule| {
            let half = match side {
                RuleSide::From => &mut rule.from,
                RuleSide::To => &mut rule.to,
            };
            half.set(x, y, next);
        });
    }
}

/// Whether a running state is due another step at time `now`.
///
/// Due means the elapsed run time strictly exceeds `iteration` full step
/// intervals. Saturating conversions make clock skew (a `now` before the
/// run started) and counter overflow behave as "not due".
fn step_due(
    iteration: u64,
    started_at: DateTime<Utc>,
    now: DateTime<Utc>,
    interval_ms: u64,
) -> bool {
    let elapsed_ms = now.signed_duration_since(started_at).num_milliseconds();
    let Ok(elapsed_ms) = u64::try_from(elapsed_ms) else {
        return false;
    };
    let Some(due_ms) = iteration.checked_mul(interval_ms) else {
        return false;
    };
    elapsed_ms > due_ms
}
