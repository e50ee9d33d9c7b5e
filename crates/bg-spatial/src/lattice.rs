//! Bounded, non-toroidal 2-D lattice with one occupant per cell.
//!
//! # Data layout
//!
//! Three structures are kept in lock-step:
//!
//! - `cells`: dense row-major `Vec<Option<T>>`, O(1) occupancy checks.
//! - `positions`: `FxHashMap<T, Cell>`, O(1) reverse lookup for `remove`.
//! - `index`: an R-tree (via `rstar`) of occupied cells.  A Chebyshev ball
//!   of radius `r` is exactly the axis-aligned box `[x-r, x+r] × [y-r, y+r]`,
//!   so neighborhood queries are envelope queries.  Cells outside the grid
//!   hold no entries, which clips queries at the edges for free.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use rstar::{RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use bg_core::Cell;

use crate::{SpatialError, SpatialResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: the occupied cell as an `[x, y]` point plus
/// the occupant handle.
#[derive(Clone, PartialEq, Debug)]
struct LatticeEntry<T> {
    point:    [i64; 2], // [x, y]
    occupant: T,
}

impl<T> RTreeObject for LatticeEntry<T> {
    type Envelope = AABB<[i64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

fn point_of(cell: Cell) -> [i64; 2] {
    [i64::from(cell.x), i64::from(cell.y)]
}

// ── Lattice ───────────────────────────────────────────────────────────────────

/// A `width × height` grid holding at most one `T` per cell.
///
/// `T` is a lightweight handle (`FarmerId`, `PlantId`, …); the lattice never
/// owns agent state.
pub struct Lattice<T> {
    width:     u32,
    height:    u32,
    cells:     Vec<Option<T>>,
    positions: FxHashMap<T, Cell>,
    index:     RTree<LatticeEntry<T>>,
}

impl<T> Lattice<T>
where
    T: Copy + Eq + Hash + Debug + Display,
{
    /// An empty lattice.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells:     vec![None; width as usize * height as usize],
            positions: FxHashMap::default(),
            index:     RTree::new(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of occupants currently placed.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// The occupant of `cell`, if any.  Out-of-bounds cells are empty.
    pub fn occupant_at(&self, cell: Cell) -> Option<T> {
        if !self.in_bounds(cell) {
            return None;
        }
        self.cells[cell.linear_index(self.width)]
    }

    /// Where `occupant` currently sits, or `None` if it is not placed.
    pub fn position_of(&self, occupant: T) -> Option<Cell> {
        self.positions.get(&occupant).copied()
    }

    pub fn contains(&self, occupant: T) -> bool {
        self.positions.contains_key(&occupant)
    }

    /// Every placed occupant, in row-major cell order.
    pub fn occupants(&self) -> impl Iterator<Item = T> + '_ {
        self.cells.iter().filter_map(|c| *c)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `occupant` on `cell`.
    ///
    /// Fails if the cell is outside the grid, already taken, or if
    /// `occupant` is already placed somewhere.
    pub fn place(&mut self, occupant: T, cell: Cell) -> SpatialResult<()> {
        if !self.in_bounds(cell) {
            return Err(SpatialError::OutOfBounds {
                cell,
                width:  self.width,
                height: self.height,
            });
        }
        if let Some(&at) = self.positions.get(&occupant) {
            return Err(SpatialError::AlreadyPlaced { occupant: occupant.to_string(), cell: at });
        }
        let slot = &mut self.cells[cell.linear_index(self.width)];
        if let Some(other) = slot {
            return Err(SpatialError::CellOccupied { cell, occupant: other.to_string() });
        }

        *slot = Some(occupant);
        self.positions.insert(occupant, cell);
        self.index.insert(LatticeEntry { point: point_of(cell), occupant });
        Ok(())
    }

    /// Take `occupant` off the lattice, freeing its cell.  Returns the cell
    /// it occupied.
    ///
    /// Removing an occupant that is not placed (e.g. removing it twice) is
    /// an error.
    pub fn remove(&mut self, occupant: T) -> SpatialResult<Cell> {
        let cell = self
            .positions
            .remove(&occupant)
            .ok_or_else(|| SpatialError::NotPlaced(occupant.to_string()))?;

        self.cells[cell.linear_index(self.width)] = None;
        let removed = self.index.remove(&LatticeEntry { point: point_of(cell), occupant });
        debug_assert!(removed.is_some(), "R-tree out of sync with cell table");
        Ok(cell)
    }

    // ── Neighborhood queries ──────────────────────────────────────────────

    /// All occupants whose Chebyshev distance from `center` is in
    /// `1..=radius`, clipped to the grid, in row-major cell order.
    ///
    /// The occupant of `center` itself is never returned.  `radius == 0`
    /// yields an empty result.
    pub fn neighbors(&self, center: Cell, radius: u32) -> Vec<T> {
        if radius == 0 {
            return Vec::new();
        }
        let [cx, cy] = point_of(center);
        let r = i64::from(radius);
        let envelope = AABB::from_corners([cx - r, cy - r], [cx + r, cy + r]);

        let mut found: Vec<&LatticeEntry<T>> = self
            .index
            .locate_in_envelope(&envelope)
            .filter(|e| e.point != [cx, cy])
            .collect();
        found.sort_unstable_by_key(|e| (e.point[1], e.point[0]));
        found.into_iter().map(|e| e.occupant).collect()
    }
}
