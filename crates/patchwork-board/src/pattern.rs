//! Pattern grids: the editable halves of a rewrite rule.
//!
//! A pattern enumerates cells within its bounding box, but a stored cell
//! may be a [`PatternCell::Wildcard`]: present in the grid (it counts
//! toward the pattern's shape) yet imposing no constraint during matching.
//! That is distinct from an absent key, which contributes nothing at all.
//! Keeping the two concepts separate is what lets a blank rule pin its
//! editable area without ever matching a board.

use serde::{Deserialize, Serialize};

use crate::grid::TileGrid;

/// One cell of a pattern grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCell<S> {
    /// No constraint at this position; skipped by the matcher.
    Wildcard,
    /// In a `from` pattern, the board must hold exactly this symbol here;
    /// in a `to` pattern, this symbol is written here.
    Symbol(S),
}

impl<S> PatternCell<S> {
    /// The constrained symbol, or `None` for a wildcard.
    pub const fn symbol(&self) -> Option<&S> {
        match self {
            Self::Wildcard => None,
            Self::Symbol(symbol) => Some(symbol),
        }
    }

    /// Consume the cell, yielding the editor's view of it: `None` for a
    /// blank (wildcard) cell.
    pub fn into_symbol(self) -> Option<S> {
        match self {
            Self::Wildcard => None,
            Self::Symbol(symbol) => Some(symbol),
        }
    }
}

impl<S> From<Option<S>> for PatternCell<S> {
    /// `None` is the blank editor cell, i.e. a wildcard.
    fn from(value: Option<S>) -> Self {
        value.map_or(Self::Wildcard, Self::Symbol)
    }
}

/// A rule half: a sparse grid of pattern cells.
pub type Pattern<S> = TileGrid<PatternCell<S>>;

/// The fixed dimensions of a puzzle's rule patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSize {
    /// Pattern width in cells (at least 1 in a valid puzzle).
    pub width: i64,
    /// Pattern height in cells (at least 1 in a valid puzzle).
    pub height: i64,
}

impl PatternSize {
    /// Create a pattern size.
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

/// A blank pattern of the given size.
///
/// Exactly two wildcard cells are stored, at `(1, 1)` and
/// `(width, height)`: enough to pin the bounding box an editor renders,
/// while presenting zero constraints to the matcher. Editors address rule
/// cells with these 1-based coordinates.
pub fn blank<S>(size: PatternSize) -> Pattern<S> {
    let mut pattern = Pattern::new();
    pattern.set(1, 1, PatternCell::Wildcard);
    pattern.set(size.width, size.height, PatternCell::Wildcard);
    pattern
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn blank_pattern_spans_the_full_rule_area() {
        let pattern: Pattern<char> = blank(PatternSize::new(3, 2));
        let shape = pattern.shape().unwrap();
        assert_eq!(shape.x, 1);
        assert_eq!(shape.y, 1);
        assert_eq!(shape.width, 3);
        assert_eq!(shape.height, 2);
        // Only the two pinning corners are stored.
        assert_eq!(pattern.len(), 2);
    }

    #[test]
    fn blank_one_by_one_collapses_to_a_single_cell() {
        let pattern: Pattern<char> = blank(PatternSize::new(1, 1));
        assert_eq!(pattern.len(), 1);
        assert_eq!(pattern.get(1, 1), Some(&PatternCell::Wildcard));
    }

    #[test]
    fn cell_round_trips_through_the_editor_view() {
        let cell = PatternCell::from(Some('x'));
        assert_eq!(cell.symbol(), Some(&'x'));
        assert_eq!(cell.into_symbol(), Some('x'));

        let wild: PatternCell<char> = PatternCell::from(None);
        assert_eq!(wild, PatternCell::Wildcard);
        assert_eq!(wild.symbol(), None);
        assert_eq!(wild.into_symbol(), None);
    }
}
