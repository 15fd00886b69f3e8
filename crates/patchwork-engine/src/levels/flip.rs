//! A minimal demo level: flip a 3x3 board of zeros to ones.
//!
//! The seeded 1x1 rule rewrites a `Zero` tile to `One`. Each step flips
//! the first remaining zero in row-major scan order, so the run takes
//! nine rewrite steps plus one terminal evaluation and ends on the goal
//! board.

use patchwork_board::{PatternCell, PatternSize, TileGrid};
use patchwork_core::puzzle::PuzzleError;
use patchwork_core::{Alphabet, Puzzle};
use patchwork_rules::Rule;

/// The flip level's two-symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipSymbol {
    /// The starting tile value.
    Zero,
    /// The goal tile value.
    One,
}

/// Symbol cycle: blank -> `Zero` -> `One` -> blank.
#[derive(Debug, Clone, Copy)]
pub struct FlipAlphabet;

impl Alphabet for FlipAlphabet {
    type Symbol = FlipSymbol;

    fn advance(&self, current: Option<FlipSymbol>) -> Option<FlipSymbol> {
        match current {
            None => Some(FlipSymbol::Zero),
            Some(FlipSymbol::Zero) => Some(FlipSymbol::One),
            Some(FlipSymbol::One) => None,
        }
    }
}

/// Build the flip level with its demo rule seeded.
pub fn build() -> Result<Puzzle<FlipAlphabet>, PuzzleError> {
    let start = TileGrid::from_rows(vec![vec![FlipSymbol::Zero; 3]; 3]);
    let goal = TileGrid::from_rows(vec![vec![FlipSymbol::One; 3]; 3]);
    let mut puzzle = Puzzle::new(start, goal, PatternSize::new(1, 1), FlipAlphabet)?;

    let mut rule = Rule::blank(puzzle.rule_size());
    rule.from.set(1, 1, PatternCell::Symbol(FlipSymbol::Zero));
    rule.to.set(1, 1, PatternCell::Symbol(FlipSymbol::One));
    puzzle.insert_rule(rule);

    Ok(puzzle)
}

/// Display glyph for a flip symbol.
pub const fn glyph(symbol: FlipSymbol) -> char {
    match symbol {
        FlipSymbol::Zero => '0',
        FlipSymbol::One => '1',
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use patchwork_core::runner;

    #[test]
    fn demo_rule_solves_the_level() {
        let mut puzzle = build().unwrap();
        let outcome = runner::run_to_completion(&mut puzzle, Some(100));
        assert_eq!(outcome.end_reason, runner::RunEndReason::Finished);
        assert_eq!(puzzle.current_board(), puzzle.goal());
    }
}
