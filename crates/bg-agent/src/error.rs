use thiserror::Error;

use bg_core::{BgError, FarmerId, PlantId, Tick};

use crate::AdoptionState;
use bg_spatial::SpatialError;

/// Errors produced by `bg-agent`.
///
/// Apart from `Core` config errors, every variant signals broken
/// bookkeeping in the decision engine and is fatal to a run.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Core(#[from] BgError),

    #[error("lattice error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("{farmer} already adopted at {at}")]
    AlreadyAdopted { farmer: FarmerId, at: Tick },

    #[error("{farmer} is {state:?} but has no adoption time")]
    InconsistentState { farmer: FarmerId, state: AdoptionState },

    #[error("{0} enrolled twice in one plant")]
    DuplicateEnrolment(FarmerId),

    #[error("plant capacity {capacity} LSU is outside [{min}, {max}]")]
    CapacityOutOfRange { capacity: f64, min: f64, max: f64 },

    #[error("{plant} at {capacity} LSU cannot grow a size class with {additional} more LSU")]
    CannotUpgrade { plant: PlantId, capacity: f64, additional: f64 },
}

pub type AgentResult<T> = Result<T, AgentError>;
