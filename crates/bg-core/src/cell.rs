//! Lattice coordinates.
//!
//! The model lives on a bounded `width × height` grid with no wraparound.
//! Neighborhoods are Moore neighborhoods of a given radius, i.e. every cell
//! within Chebyshev distance `r`.

/// A cell on the lattice; `x` is the column, `y` the row.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance: `max(|dx|, |dy|)`.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Row-major index into a lattice `width` cells wide.
    #[inline]
    pub fn linear_index(self, width: u32) -> usize {
        self.y as usize * width as usize + self.x as usize
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
