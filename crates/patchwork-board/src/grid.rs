//! Sparse tile grid: the board representation used throughout Patchwork.
//!
//! A [`TileGrid`] maps integer `(x, y)` coordinates to values. Absence of a
//! key means "no tile here", which is semantically distinct from any stored
//! value -- pattern grids exploit this by storing an explicit wildcard
//! marker as a value (see [`crate::pattern`]). The grid is unbounded and
//! coordinates may be negative; its extent is derived on demand via
//! [`TileGrid::shape`], never stored.
//!
//! Internally the grid is a `BTreeMap<(i64, i64), T>`, so iteration order
//! is deterministic (sorted by x, then y). Callers must not rely on that
//! order for correctness: it is unspecified by contract and only affects
//! performance, never a result.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

/// Convert a dense row/column index into a signed coordinate.
///
/// Saturates at `i64::MAX` in the (practically impossible) case where the
/// index exceeds the signed range.
fn coord(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// The minimal bounding box covering every defined key of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Smallest defined x coordinate.
    pub x: i64,
    /// Smallest defined y coordinate.
    pub y: i64,
    /// Horizontal extent: `max_x - min_x + 1`.
    pub width: i64,
    /// Vertical extent: `max_y - min_y + 1`.
    pub height: i64,
}

impl Shape {
    /// Largest x coordinate still inside the box.
    pub const fn right(&self) -> i64 {
        self.x.saturating_add(self.width).saturating_sub(1)
    }

    /// Largest y coordinate still inside the box.
    pub const fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height).saturating_sub(1)
    }

    /// Whether the box contains the given position.
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// A sparse two-dimensional grid of tiles.
///
/// Cloning a grid is a full value copy, independent of the source; the
/// rewriter relies on this to leave the board it was handed untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid<T> {
    /// Defined tiles, keyed by `(x, y)`.
    tiles: BTreeMap<(i64, i64), T>,
}

impl<T> TileGrid<T> {
    /// Create an empty grid.
    pub const fn new() -> Self {
        Self {
            tiles: BTreeMap::new(),
        }
    }

    /// Build a grid from `((x, y), value)` pairs.
    ///
    /// Later pairs overwrite earlier ones at the same position.
    pub fn from_entries(entries: impl IntoIterator<Item = ((i64, i64), T)>) -> Self {
        let mut grid = Self::new();
        for ((x, y), value) in entries {
            grid.set(x, y, value);
        }
        grid
    }

    /// Build a grid from a dense rectangular array.
    ///
    /// The outer iterator supplies rows (row index = y), the inner one
    /// columns (column index = x), so the grid spans `(0, 0)` through
    /// `(width - 1, height - 1)`.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut grid = Self::new();
        for (j, row) in rows.into_iter().enumerate() {
            for (i, value) in row.into_iter().enumerate() {
                grid.set(coord(i), coord(j), value);
            }
        }
        grid
    }

    /// Return the tile at `(x, y)`, or `None` if the position is undefined.
    pub fn get(&self, x: i64, y: i64) -> Option<&T> {
        self.tiles.get(&(x, y))
    }

    /// Insert or overwrite the tile at `(x, y)`.
    ///
    /// There is no removal operation: once defined, a position stays
    /// defined for the grid's lifetime.
    pub fn set(&mut self, x: i64, y: i64, value: T) {
        self.tiles.insert((x, y), value);
    }

    /// Number of defined tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no defined tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over all defined tiles as `((x, y), &value)`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.tiles.iter(),
        }
    }

    /// Produce a new grid with identical keys and each value replaced by
    /// `f(value, x, y)`.
    pub fn map<U>(&self, mut f: impl FnMut(&T, i64, i64) -> U) -> TileGrid<U> {
        TileGrid {
            tiles: self
                .tiles
                .iter()
                .map(|(&(x, y), value)| ((x, y), f(value, x, y)))
                .collect(),
        }
    }

    /// The minimal bounding box over all defined keys, or `None` for an
    /// empty grid.
    ///
    /// Every pattern and board in a valid puzzle configuration is
    /// non-empty, so engine code reaches the `None` arm only as a guard.
    pub fn shape(&self) -> Option<Shape> {
        let mut bounds: Option<(i64, i64, i64, i64)> = None;
        for &(x, y) in self.tiles.keys() {
            bounds = Some(match bounds {
                None => (x, x, y, y),
                Some((min_x, max_x, min_y, max_y)) => {
                    (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
                }
            });
        }
        bounds.map(|(min_x, max_x, min_y, max_y)| Shape {
            x: min_x,
            y: min_y,
            width: max_x.saturating_sub(min_x).saturating_add(1),
            height: max_y.saturating_sub(min_y).saturating_add(1),
        })
    }
}

impl<T> Default for TileGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a TileGrid<T> {
    type Item = ((i64, i64), &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a grid's defined tiles.
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: btree_map::Iter<'a, (i64, i64), T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = ((i64, i64), &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&pos, value)| (pos, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
