//! The maze level: walk the runner through corridors by rewriting.
//!
//! An 11x11 maze of walls and open floor, with a runner tile at the top
//! and a goal position near the bottom right. The player's task in the
//! interactive game is to write movement rules; the demo rule set seeded
//! here only knows "move east onto open floor" and "move south onto open
//! floor", so the runner walks greedily until it gets stuck -- the run
//! terminates without solving the level, which is exactly the point: it
//! exercises terminal detection on a non-trivial board.

use patchwork_board::{PatternCell, PatternSize, TileGrid};
use patchwork_core::puzzle::PuzzleError;
use patchwork_core::{Alphabet, Puzzle};
use patchwork_rules::Rule;

/// The maze level's symbol set.
///
/// The arrow symbols are unused by the demo boards but belong to the
/// level's palette: the interactive editor cycles through all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeSymbol {
    /// Open floor the runner can occupy.
    Open,
    /// Impassable wall.
    Wall,
    /// Loose marker tile.
    Marker,
    /// The runner.
    Runner,
    /// Westward arrow.
    West,
    /// Northward arrow.
    North,
    /// Eastward arrow.
    East,
    /// Southward arrow.
    South,
}

/// Symbol cycle through the full palette, then back to blank.
#[derive(Debug, Clone, Copy)]
pub struct MazeAlphabet;

impl Alphabet for MazeAlphabet {
    type Symbol = MazeSymbol;

    fn advance(&self, current: Option<MazeSymbol>) -> Option<MazeSymbol> {
        match current {
            None => Some(MazeSymbol::Open),
            Some(MazeSymbol::Open) => Some(MazeSymbol::Wall),
            Some(MazeSymbol::Wall) => Some(MazeSymbol::Marker),
            Some(MazeSymbol::Marker) => Some(MazeSymbol::Runner),
            Some(MazeSymbol::Runner) => Some(MazeSymbol::West),
            Some(MazeSymbol::West) => Some(MazeSymbol::North),
            Some(MazeSymbol::North) => Some(MazeSymbol::East),
            Some(MazeSymbol::East) => Some(MazeSymbol::South),
            Some(MazeSymbol::South) => None,
        }
    }
}

/// Start grid: `1` wall, `0` open, `3` runner.
const START: [[u8; 11]; 11] = [
    [1, 1, 3, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    [1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 1],
    [1, 1, 1, 1, 0, 0, 1, 1, 0, 1, 1],
    [1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1],
    [1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0],
    [0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1],
    [1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Goal grid: the runner has crossed the maze to the east edge.
const GOAL: [[u8; 11]; 11] = [
    [1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    [1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 1],
    [1, 1, 1, 1, 0, 0, 1, 1, 0, 1, 1],
    [1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1],
    [1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 3],
    [0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1],
    [1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Decode one grid constant value into a symbol.
const fn tile(value: u8) -> MazeSymbol {
    match value {
        0 => MazeSymbol::Open,
        1 => MazeSymbol::Wall,
        2 => MazeSymbol::Marker,
        3 => MazeSymbol::Runner,
        4 => MazeSymbol::West,
        5 => MazeSymbol::North,
        6 => MazeSymbol::East,
        _ => MazeSymbol::South,
    }
}

/// Build a board from one of the grid constants.
fn board(rows: &[[u8; 11]; 11]) -> TileGrid<MazeSymbol> {
    TileGrid::from_rows(rows.iter().map(|row| row.iter().map(|&value| tile(value))))
}

/// Build the maze level with its demo rule set seeded.
pub fn build() -> Result<Puzzle<MazeAlphabet>, PuzzleError> {
    let mut puzzle = Puzzle::new(
        board(&START),
        board(&GOAL),
        PatternSize::new(2, 2),
        MazeAlphabet,
    )?;

    // Move east onto open floor: [@ ] -> [ @]
    let mut east = Rule::blank(puzzle.rule_size());
    east.from.set(1, 1, PatternCell::Symbol(MazeSymbol::Runner));
    east.from.set(2, 1, PatternCell::Symbol(MazeSymbol::Open));
    east.to.set(1, 1, PatternCell::Symbol(MazeSymbol::Open));
    east.to.set(2, 1, PatternCell::Symbol(MazeSymbol::Runner));
    puzzle.insert_rule(east);

    // Move south onto open floor. No westward or northward rule: the
    // greedy walk must terminate instead of oscillating.
    let mut south = Rule::blank(puzzle.rule_size());
    south.from.set(1, 1, PatternCell::Symbol(MazeSymbol::Runner));
    south.from.set(1, 2, PatternCell::Symbol(MazeSymbol::Open));
    south.to.set(1, 1, PatternCell::Symbol(MazeSymbol::Open));
    south.to.set(1, 2, PatternCell::Symbol(MazeSymbol::Runner));
    puzzle.insert_rule(south);

    Ok(puzzle)
}

/// Display glyph for a maze symbol.
pub const fn glyph(symbol: MazeSymbol) -> char {
    match symbol {
        MazeSymbol::Open => ' ',
        MazeSymbol::Wall => '#',
        MazeSymbol::Marker => '*',
        MazeSymbol::Runner => '@',
        MazeSymbol::West => '<',
        MazeSymbol::North => '^',
        MazeSymbol::East => '>',
        MazeSymbol::South => 'v',
    }
}
