//! Vessel definitions: a straight line of cells with a hit counter.

use core::fmt;

use crate::coord::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Grows along `y` (columns).
    Horizontal,
    /// Grows along `x` (rows).
    Vertical,
}

impl Orientation {
    /// Unit step from one cell of a vessel to the next.
    fn step(self) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(0, 1),
            Orientation::Vertical => Coordinate::new(1, 0),
        }
    }
}

/// A vessel anchored at `head` and extending `length` cells along its
/// orientation. Destruction is logical: the vessel stays on the grid with
/// `remaining_hits == 0`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    head: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Vessel {
    /// Build an intact vessel. Lengths that cannot fit a board are rejected
    /// by `Grid::deploy`, not here.
    pub fn new(head: Coordinate, length: usize, orientation: Orientation) -> Self {
        Vessel {
            head,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    pub fn head(&self) -> Coordinate {
        self.head
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Intact cells left before the vessel is destroyed.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    /// Occupied cells, head first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let head = self.head;
        let step = self.orientation.step();
        let length = i32::try_from(self.length).unwrap_or(i32::MAX);
        (0..length).map(move |i| head + Coordinate::new(step.x * i, step.y * i))
    }

    /// Whether `c` is one of this vessel's cells.
    pub fn contains(&self, c: Coordinate) -> bool {
        let step = self.orientation.step();
        let (along, across) = if step.x == 0 {
            (c.y - self.head.y, c.x - self.head.x)
        } else {
            (c.x - self.head.x, c.y - self.head.y)
        };
        across == 0 && along >= 0 && (along as usize) < self.length
    }

    /// Every cell of the 8-connected ring around the vessel plus the vessel
    /// itself, unfiltered and possibly repeated.
    pub fn halo(&self) -> impl Iterator<Item = Coordinate> {
        self.cells().flat_map(Coordinate::halo)
    }

    /// Record a hit. Returns `true` only for the hit that destroys the
    /// vessel; hits on a vessel already destroyed change nothing.
    pub fn register_hit(&mut self) -> bool {
        if self.remaining_hits == 0 {
            return false;
        }
        self.remaining_hits -= 1;
        self.remaining_hits == 0
    }

    pub fn is_destroyed(&self) -> bool {
        self.remaining_hits == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ head: {}, length: {}, orientation: {:?}, remaining: {} }}",
            self.head, self.length, self.orientation, self.remaining_hits,
        )
    }
}
