//! A square set of board cells packed into a single unsigned integer.
//!
//! The board side is chosen at runtime but must satisfy `size * size <=
//! T::BITS`. Cells are addressed with 1-based [`Coordinate`]s; anything
//! outside `[1, size]²` is never a member and is ignored on insertion.

use core::ops::{BitAnd, BitOr};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coord::Coordinate;

/// Errors returned by cell set construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSetError {
    /// Requested side `size` needs more bits than `T` holds.
    SizeTooLarge { size: i32, capacity: usize },
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSetError::SizeTooLarge { size, capacity } => {
                write!(f, "SizeTooLarge: {}x{} exceeds {} bits", size, size, capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CellSetError {}

/// Set of cells on a `size`×`size` board stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    size: i32,
    bits: T,
}

/// Cell set used by the grid; fits boards up to 11×11.
pub type Cells = CellSet<u128>;

impl<T> CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Empty set for a `size`×`size` board.
    pub fn try_new(size: i32) -> Result<Self, CellSetError> {
        let capacity = mem::size_of::<T>() * 8;
        if size < 0 || (size as usize) * (size as usize) > capacity {
            return Err(CellSetError::SizeTooLarge { size, capacity });
        }
        Ok(CellSet {
            size,
            bits: T::zero(),
        })
    }

    /// A set on the same board holding the in-range members of `cells`.
    pub fn mask<I>(&self, cells: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut mask = CellSet {
            size: self.size,
            bits: T::zero(),
        };
        for c in cells {
            mask.insert(c);
        }
        mask
    }

    #[inline]
    fn index(&self, c: Coordinate) -> Option<usize> {
        if c.x < 1 || c.y < 1 || c.x > self.size || c.y > self.size {
            None
        } else {
            Some(((c.x - 1) * self.size + (c.y - 1)) as usize)
        }
    }

    /// Membership test; out-of-range coordinates are never members.
    pub fn contains(&self, c: Coordinate) -> bool {
        match self.index(c) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `c`. Returns `true` if it is in range and was not already present.
    pub fn insert(&mut self, c: Coordinate) -> bool {
        match self.index(c) {
            Some(idx) => {
                let bit = T::one() << idx;
                let fresh = (self.bits & bit).is_zero();
                self.bits = self.bits | bit;
                fresh
            }
            None => false,
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// True when the two sets share no cell.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        (self.bits & other.bits).is_zero()
    }

    /// Members in row-major order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { set: self, idx: 0 }
    }
}

impl<T> fmt::Debug for CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}x{}>:", self.size, self.size)?;
        for x in 1..=self.size {
            for y in 1..=self.size {
                let ch = if self.contains(Coordinate::new(x, y)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a cell set.
#[derive(Clone, Copy)]
pub struct Iter<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    set: &'a CellSet<T>,
    idx: usize,
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        let size = self.set.size as usize;
        while self.idx < size * size {
            let idx = self.idx;
            self.idx += 1;
            if ((self.set.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new(
                    (idx / size) as i32 + 1,
                    (idx % size) as i32 + 1,
                ));
            }
        }
        None
    }
}

/// Union. Both operands must cover the same board.
impl<T> BitOr for CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        CellSet {
            size: self.size,
            bits: self.bits | rhs.bits,
        }
    }
}

/// Intersection. Both operands must cover the same board.
impl<T> BitAnd for CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        CellSet {
            size: self.size,
            bits: self.bits & rhs.bits,
        }
    }
}
