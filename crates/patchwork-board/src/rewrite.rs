//! The matcher/rewriter: find where a pattern matches a board and apply
//! the replacement.
//!
//! The search is deliberately brute force: every offset at which the
//! pattern's bounding box overlaps the board's bounding box is tried, in
//! row-major order (y ascending in the outer loop, x ascending in the
//! inner), and the first valid match wins. There is no scoring and no
//! "best" match; determinism and simplicity matter more here than
//! asymptotic performance, because puzzle boards and patterns are small.
//!
//! Complexity per call is
//! `O((board_w + pat_w) * (board_h + pat_h) * pat_w * pat_h)`.

use crate::grid::TileGrid;
use crate::pattern::{Pattern, PatternCell};

/// Find the first offset at which `from` matches `board`.
///
/// An offset `(ox, oy)` is a valid match iff every non-wildcard cell
/// `(i, j) -> s` of `from` lands on a defined board cell equal to `s` at
/// `(ox + i, oy + j)`, and at least one such cell exists. The second
/// condition means an all-wildcard pattern (including a freshly created
/// blank rule) never matches any board, and an empty pattern or empty
/// board never matches at all.
///
/// The scanned window starts where the pattern's bottom-right corner
/// touches the board's top-left corner and ends where its top-left corner
/// touches the board's bottom-right corner, so every overlapping alignment
/// is tried exactly once.
pub fn find_match<S: PartialEq>(from: &Pattern<S>, board: &TileGrid<S>) -> Option<(i64, i64)> {
    let from_shape = from.shape()?;
    let board_shape = board.shape()?;

    let start_x = board_shape.x.saturating_sub(from_shape.right());
    let start_y = board_shape.y.saturating_sub(from_shape.bottom());
    // Exclusive ends: the scan covers board extent plus pattern extent
    // minus one positions along each axis.
    let end_x = start_x
        .saturating_add(board_shape.width)
        .saturating_add(from_shape.width)
        .saturating_sub(1);
    let end_y = start_y
        .saturating_add(board_shape.height)
        .saturating_add(from_shape.height)
        .saturating_sub(1);

    for offset_y in start_y..end_y {
        for offset_x in start_x..end_x {
            if matches_at(from, board, offset_x, offset_y) {
                return Some((offset_x, offset_y));
            }
        }
    }
    None
}

/// Whether `from` matches `board` when translated by `(offset_x, offset_y)`.
fn matches_at<S: PartialEq>(
    from: &Pattern<S>,
    board: &TileGrid<S>,
    offset_x: i64,
    offset_y: i64,
) -> bool {
    let mut matched_any = false;
    for ((i, j), cell) in from {
        // Wildcard cells impose no constraint.
        let PatternCell::Symbol(expected) = cell else {
            continue;
        };
        // A symbol cell landing on a missing board tile is a miss, as is
        // a mismatched value.
        match board.get(offset_x.saturating_add(i), offset_y.saturating_add(j)) {
            Some(actual) if actual == expected => matched_any = true,
            _ => return false,
        }
    }
    matched_any
}

/// Apply one rewrite of `from -> to` on `board`.
///
/// Searches for the first match of `from` (see [`find_match`]); on a match
/// at `(mx, my)`, returns a full copy of `board` in which every
/// non-wildcard cell `(i, j) -> s` of `to` overwrites the tile at
/// `(mx + i, my + j)` -- but only where the board already defines a tile.
/// The rewrite never creates tiles outside the board's existing domain,
/// and wildcard cells in `to` leave the underlying tile untouched.
///
/// Returns `None` when `from` matches nowhere; the board handed in is
/// never mutated either way.
pub fn replace<S: Clone + PartialEq>(
    from: &Pattern<S>,
    to: &Pattern<S>,
    board: &TileGrid<S>,
) -> Option<TileGrid<S>> {
    let (match_x, match_y) = find_match(from, board)?;

    let mut next = board.clone();
    for ((i, j), cell) in to {
        let PatternCell::Symbol(symbol) = cell else {
            continue;
        };
        let x = match_x.saturating_add(i);
        let y = match_y.saturating_add(j);
        if board.get(x, y).is_some() {
            next.set(x, y, symbol.clone());
        }
    }
    Some(next)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::pattern::{self, PatternSize};

    /// Helper: a `width` x `height` board filled with `value`, anchored at
    /// `(0, 0)`.
    fn filled(width: usize, height: usize, value: u8) -> TileGrid<u8> {
        TileGrid::from_rows(vec![vec![value; width]; height])
    }

    /// Helper: a pattern from `((x, y), symbol)` pairs.
    fn pattern_of(cells: Vec<((i64, i64), u8)>) -> Pattern<u8> {
        TileGrid::from_entries(
            cells
                .into_iter()
                .map(|(pos, symbol)| (pos, PatternCell::Symbol(symbol))),
        )
    }

    #[test]
    fn single_cell_pattern_matches_first_offset_in_row_major_order() {
        let board = filled(3, 3, 0);
        let from = pattern_of(vec![((0, 0), 0)]);
        assert_eq!(find_match(&from, &board), Some((0, 0)));
    }

    #[test]
    fn scan_is_row_major_y_outer_x_inner() {
        // Only one tile carries a 1, at (2, 1). The first matching offset
        // must be exactly that position.
        let mut board = filled(4, 3, 0);
        board.set(2, 1, 1);
        let from = pattern_of(vec![((0, 0), 1)]);
        assert_eq!(find_match(&from, &board), Some((2, 1)));

        // A second 1 earlier in row-major order wins instead.
        board.set(3, 0, 1);
        assert_eq!(find_match(&from, &board), Some((3, 0)));
    }

    #[test]
    fn all_wildcard_pattern_never_matches() {
        let board = filled(3, 3, 0);
        let from: Pattern<u8> = pattern::blank(PatternSize::new(2, 2));
        assert_eq!(find_match(&from, &board), None);
        assert!(replace(&from, &from, &board).is_none());
    }

    #[test]
    fn empty_board_never_matches() {
        let board: TileGrid<u8> = TileGrid::new();
        let from = pattern_of(vec![((0, 0), 0)]);
        assert_eq!(find_match(&from, &board), None);
    }

    #[test]
    fn pattern_cell_on_missing_tile_is_a_miss() {
        // L-shaped board: (1, 1) is undefined.
        let board = TileGrid::from_entries(vec![((0, 0), 7), ((1, 0), 7), ((0, 1), 7)]);
        // Pattern requires a 7 at both diagonal corners; every alignment
        // puts one of them on a hole or off the board.
        let from = pattern_of(vec![((0, 0), 7), ((1, 1), 7)]);
        assert_eq!(find_match(&from, &board), None);
    }

    #[test]
    fn wildcards_skip_holes_but_symbols_still_anchor() {
        let board = TileGrid::from_entries(vec![((0, 0), 7), ((1, 0), 7), ((0, 1), 7)]);
        let mut from = pattern_of(vec![((0, 0), 7)]);
        from.set(1, 1, PatternCell::Wildcard);
        // The wildcard may land on the hole; the symbol cell anchors at
        // the first defined 7.
        assert_eq!(find_match(&from, &board), Some((0, 0)));
    }

    #[test]
    fn replace_flips_exactly_the_matched_cell() {
        let board = filled(3, 3, 0);
        let from = pattern_of(vec![((0, 0), 0)]);
        let to = pattern_of(vec![((0, 0), 1)]);

        let next = replace(&from, &to, &board).unwrap();
        assert_eq!(next.get(0, 0), Some(&1));
        // Every other tile is preserved.
        for ((x, y), &value) in &next {
            if (x, y) != (0, 0) {
                assert_eq!(value, 0);
            }
        }
        // The input board is untouched.
        assert_eq!(board.get(0, 0), Some(&0));
    }

    #[test]
    fn replace_never_writes_outside_the_board_domain() {
        // A 1x1 board; the 2-wide `to` pattern would write at (1, 0),
        // which the board does not define.
        let board = TileGrid::from_entries(vec![((0, 0), 5)]);
        let from = pattern_of(vec![((0, 0), 5)]);
        let to = pattern_of(vec![((0, 0), 6), ((1, 0), 6)]);

        let next = replace(&from, &to, &board).unwrap();
        assert_eq!(next.get(0, 0), Some(&6));
        assert_eq!(next.get(1, 0), None);
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn wildcard_in_to_leaves_the_board_tile_untouched() {
        let board = filled(2, 1, 3);
        let from = pattern_of(vec![((0, 0), 3), ((1, 0), 3)]);
        let mut to = pattern_of(vec![((0, 0), 4)]);
        to.set(1, 0, PatternCell::Wildcard);

        let next = replace(&from, &to, &board).unwrap();
        assert_eq!(next.get(0, 0), Some(&4));
        assert_eq!(next.get(1, 0), Some(&3));
    }

    #[test]
    fn replace_is_deterministic() {
        let mut board = filled(4, 4, 0);
        board.set(2, 2, 1);
        let from = pattern_of(vec![((0, 0), 0)]);
        let to = pattern_of(vec![((0, 0), 1)]);

        let first = replace(&from, &to, &board).unwrap();
        let second = replace(&from, &to, &board).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn patterns_with_offset_origins_match_translated() {
        // Pattern cells live at 1-based editor coordinates; the board is
        // anchored at the origin. The match offset compensates.
        let board = filled(2, 2, 9);
        let from = pattern_of(vec![((1, 1), 9)]);
        assert_eq!(find_match(&from, &board), Some((-1, -1)));

        let to = pattern_of(vec![((1, 1), 8)]);
        let next = replace(&from, &to, &board).unwrap();
        assert_eq!(next.get(0, 0), Some(&8));
    }

    #[test]
    fn match_can_overlap_the_board_edge() {
        // The pattern's right column is wildcard, so it may hang off the
        // board's right edge... but here the symbol cell must still land
        // on the board. Verify an interior column anchors at the edge.
        let board = filled(2, 1, 1);
        let mut from = pattern_of(vec![((1, 0), 1)]);
        from.set(0, 0, PatternCell::Wildcard);
        // Offsets scan from x = -1; the first valid one puts the symbol
        // cell on (0, 0), i.e. offset (-1, 0), with the wildcard off-board.
        assert_eq!(find_match(&from, &board), Some((-1, 0)));
    }

    #[test]
    fn multi_cell_pattern_requires_every_symbol_to_agree() {
        let board = TileGrid::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let hit = pattern_of(vec![((0, 0), 1), ((1, 1), 4)]);
        let miss = pattern_of(vec![((0, 0), 1), ((1, 1), 5)]);
        assert_eq!(find_match(&hit, &board), Some((0, 0)));
        assert_eq!(find_match(&miss, &board), None);
    }
}
