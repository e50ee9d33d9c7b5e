//! `bg-spatial`: the bounded lattice every agent lives on.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`lattice`] | `Lattice<T>` (dense cell table + R-tree), neighbor queries  |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! The lattice is generic over its occupant: the model keeps one
//! `Lattice<FarmerId>` and one `Lattice<PlantId>` of identical dimensions.

pub mod error;
pub mod lattice;


pub use error::{SpatialError, SpatialResult};
pub use lattice::Lattice;
