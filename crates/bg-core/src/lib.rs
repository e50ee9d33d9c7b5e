//! `bg-core`: foundational types for the biogas adoption model.
//!
//! This crate is a dependency of every other `bg-*` crate.  It has no `bg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `FarmerId`, `PlantId`, `AgentRef`                     |
//! | [`cell`]        | `Cell`, Chebyshev distance                            |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (the run's single random stream)             |
//! | [`validate`]    | `check_range` helper used by every config type        |
//! | [`error`]       | `BgError`, `BgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod validate;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{BgError, BgResult};
pub use ids::{AgentRef, FarmerId, PlantId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
pub use validate::check_range;
