//! Spatial-subsystem error type.
//!
//! Every variant is an invariant violation in the caller's bookkeeping; the
//! simulation treats them as fatal.

use thiserror::Error;

use bg_core::Cell;

/// Errors produced by `bg-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("cell {cell} is outside the {width}x{height} lattice")]
    OutOfBounds { cell: Cell, width: u32, height: u32 },

    #[error("cell {cell} is already occupied by {occupant}")]
    CellOccupied { cell: Cell, occupant: String },

    #[error("{occupant} is already placed at {cell}")]
    AlreadyPlaced { occupant: String, cell: Cell },

    #[error("{0} is not on the lattice (removed twice?)")]
    NotPlaced(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
