//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `BgError` as one variant
//! via `#[from]`.

use thiserror::Error;

use crate::{FarmerId, PlantId};

/// The top-level error type for `bg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BgError {
    #[error("farmer {0} not found")]
    FarmerNotFound(FarmerId),

    #[error("plant {0} not found")]
    PlantNotFound(PlantId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `bg-*` crates.
pub type BgResult<T> = Result<T, BgError>;
