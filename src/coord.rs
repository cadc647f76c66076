//! Board coordinates.

use core::fmt;
use core::ops::Add;

/// Offsets of the 3×3 block around a cell, the cell itself included.
const HALO_OFFSETS: [Coordinate; 9] = [
    Coordinate::new(-1, -1),
    Coordinate::new(-1, 0),
    Coordinate::new(-1, 1),
    Coordinate::new(0, -1),
    Coordinate::new(0, 0),
    Coordinate::new(0, 1),
    Coordinate::new(1, -1),
    Coordinate::new(1, 0),
    Coordinate::new(1, 1),
];

/// Orthogonal offsets: north, south, west, east.
const NEIGHBOR_OFFSETS: [Coordinate; 4] = [
    Coordinate::new(-1, 0),
    Coordinate::new(1, 0),
    Coordinate::new(0, -1),
    Coordinate::new(0, 1),
];

/// A point on the board. `x` is the row and `y` the column, both 1-based
/// when valid. Values outside the board are representable so that shots and
/// neighbour shots can be checked after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours, unfiltered.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS.into_iter().map(move |d| self + d)
    }

    /// The 3×3 block centred on this point, unfiltered.
    pub fn halo(self) -> impl Iterator<Item = Coordinate> {
        HALO_OFFSETS.into_iter().map(move |d| self + d)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
