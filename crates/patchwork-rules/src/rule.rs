//! Rewrite rule entries: a `from` pattern and a `to` pattern.

use patchwork_board::pattern::{self, Pattern, PatternSize};

/// A single rewrite rule.
///
/// Both halves share the puzzle's configured [`PatternSize`]. The `from`
/// half is searched for on the board; the `to` half describes the
/// replacement written at the matched offset. Cells are addressed with the
/// 1-based coordinates established by [`pattern::blank`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<S> {
    /// The pattern searched for on the board.
    pub from: Pattern<S>,
    /// The replacement written where `from` matched.
    pub to: Pattern<S>,
}

impl<S> Rule<S> {
    /// A fresh, fully-wildcard rule of the given size.
    ///
    /// This is the entry an editor presents for the player to fill in. It
    /// never matches any board until at least one symbol cell is set.
    pub fn blank(size: PatternSize) -> Self {
        Self {
            from: pattern::blank(size),
            to: pattern::blank(size),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use patchwork_board::{PatternCell, TileGrid, find_match};

    #[test]
    fn blank_rule_halves_share_the_configured_size() {
        let rule: Rule<u8> = Rule::blank(PatternSize::new(2, 2));
        let from_shape = rule.from.shape().unwrap();
        let to_shape = rule.to.shape().unwrap();
        assert_eq!(from_shape.width, 2);
        assert_eq!(from_shape.height, 2);
        assert_eq!(from_shape, to_shape);
    }

    #[test]
    fn blank_rule_matches_nothing() {
        let rule: Rule<u8> = Rule::blank(PatternSize::new(2, 2));
        let board = TileGrid::from_rows(vec![vec![0u8; 4]; 4]);
        assert_eq!(find_match(&rule.from, &board), None);
    }

    #[test]
    fn edited_blank_rule_starts_matching() {
        let mut rule: Rule<u8> = Rule::blank(PatternSize::new(2, 2));
        rule.from.set(1, 1, PatternCell::Symbol(0));
        let board = TileGrid::from_rows(vec![vec![0u8; 4]; 4]);
        assert!(find_match(&rule.from, &board).is_some());
    }
}
