//! `bg-agent`: farmer and plant state for the biogas adoption model.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`farmer`]     | `Farmer`, `AdoptionState`                                 |
//! | [`plant`]      | `Plant`: a built asset and its upgrade lifecycle         |
//! | [`world`]      | `World` (farmer/plant tables + two lattices), `ContributorOccupancy` |
//! | [`population`] | `PopulationBuilder`, `PopulationParams`, `LsuDistribution` |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                            |
//!
//! # Ownership
//!
//! `World` owns every `Farmer` and `Plant` in flat `Vec`s.  Cross-links are
//! typed handles (`FarmerId`, `PlantId`), never references, so there is no
//! ownership cycle between an owner and its plant.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on config types.         |

pub mod error;
pub mod farmer;
pub mod plant;
pub mod population;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::{AgentError, AgentResult};
pub use farmer::{AdoptionState, Farmer};
pub use plant::Plant;
pub use population::{LsuDistribution, PopulationBuilder, PopulationParams};
pub use world::{ContributorOccupancy, World};
