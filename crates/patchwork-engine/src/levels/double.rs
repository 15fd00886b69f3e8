//! The doubling level: base-3 numbers that want to be doubled.
//!
//! Each puzzle row shows a ternary number; the goal shows the same number
//! doubled (still in base 3). Solving it in the interactive game takes a
//! carry-propagating rule set the player has to discover, so this level
//! ships with no demo rules: a run finishes immediately with the start
//! board, demonstrating terminal detection on an unsolved level.

use patchwork_board::{PatternSize, TileGrid};
use patchwork_core::puzzle::PuzzleError;
use patchwork_core::{Alphabet, Puzzle};

/// Board width in tiles.
const WIDTH: usize = 17;

/// The ternary numbers shown on the board, most significant digit first.
const NUMBERS: [&str; 8] = [
    "2111",
    "2112",
    "11002222",
    "22112110",
    "212011110101",
    "222120212020",
    "10112212010201",
    "22111201010001",
];

/// The doubling level's symbol set.
///
/// `Red` and `Yellow` are unused by the demo boards but belong to the
/// level's palette, as scratch markers for the player's rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleSymbol {
    /// Ternary digit 0.
    Zero,
    /// Ternary digit 1.
    One,
    /// Ternary digit 2.
    Two,
    /// Background filler between and around numbers.
    Filler,
    /// Red scratch marker.
    Red,
    /// Yellow scratch marker.
    Yellow,
}

/// Symbol cycle through the full palette, then back to blank.
#[derive(Debug, Clone, Copy)]
pub struct DoubleAlphabet;

impl Alphabet for DoubleAlphabet {
    type Symbol = DoubleSymbol;

    fn advance(&self, current: Option<DoubleSymbol>) -> Option<DoubleSymbol> {
        match current {
            None => Some(DoubleSymbol::Zero),
            Some(DoubleSymbol::Zero) => Some(DoubleSymbol::One),
            Some(DoubleSymbol::One) => Some(DoubleSymbol::Two),
            Some(DoubleSymbol::Two) => Some(DoubleSymbol::Filler),
            Some(DoubleSymbol::Filler) => Some(DoubleSymbol::Red),
            Some(DoubleSymbol::Red) => Some(DoubleSymbol::Yellow),
            Some(DoubleSymbol::Yellow) => None,
        }
    }
}

/// Decode one digit character into a symbol.
const fn digit(value: char) -> DoubleSymbol {
    match value {
        '0' => DoubleSymbol::Zero,
        '1' => DoubleSymbol::One,
        '2' => DoubleSymbol::Two,
        _ => DoubleSymbol::Filler,
    }
}

/// Lay the given numbers out as board rows: a filler row above each
/// number, the number right-aligned with one filler column of margin, and
/// a filler row at the bottom.
fn rows(numbers: &[String]) -> Vec<Vec<DoubleSymbol>> {
    let mut rows = Vec::new();
    for number in numbers {
        rows.push(vec![DoubleSymbol::Filler; WIDTH]);

        let digits: Vec<DoubleSymbol> = number.chars().map(digit).collect();
        let pad = WIDTH.saturating_sub(digits.len().saturating_add(1));
        let mut row = vec![DoubleSymbol::Filler; pad];
        row.extend(digits);
        row.push(DoubleSymbol::Filler);
        rows.push(row);
    }
    rows.push(vec![DoubleSymbol::Filler; WIDTH]);
    rows
}

/// Double a ternary digit string, returning the result in base 3.
fn doubled(number: &str) -> String {
    // The inputs are compile-time constants of valid ternary digits, so
    // the parse cannot fail in practice.
    let value = u64::from_str_radix(number, 3).unwrap_or(0);
    to_base3(value.saturating_mul(2))
}

/// Format a value as base-3 digits, most significant first.
fn to_base3(mut value: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while value > 0 {
        let digit = value.checked_rem(3).unwrap_or(0);
        let glyph = char::from_digit(u32::try_from(digit).unwrap_or(0), 10).unwrap_or('0');
        digits.push(glyph);
        value = value.checked_div(3).unwrap_or(0);
    }
    digits.iter().rev().collect()
}

/// Build the doubling level. No demo rules are seeded.
pub fn build() -> Result<Puzzle<DoubleAlphabet>, PuzzleError> {
    let start_numbers: Vec<String> = NUMBERS.iter().map(|&n| n.to_owned()).collect();
    let goal_numbers: Vec<String> = NUMBERS.iter().map(|&n| doubled(n)).collect();

    Puzzle::new(
        TileGrid::from_rows(rows(&start_numbers)),
        TileGrid::from_rows(rows(&goal_numbers)),
        PatternSize::new(2, 2),
        DoubleAlphabet,
    )
}

/// Display glyph for a doubling symbol.
pub const fn glyph(symbol: DoubleSymbol) -> char {
    match symbol {
        DoubleSymbol::Zero => '0',
        DoubleSymbol::One => '1',
        DoubleSymbol::Two => '2',
        DoubleSymbol::Filler => '.',
        DoubleSymbol::Red => 'r',
        DoubleSymbol::Yellow => 'y',
    }
}
