//! `bg-behavior`: the farmer decision engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`params`]   | `ModelParams`: learning, pooling and economic knobs            |
//! | [`context`]  | `StepContext<'a>`: tick, world and RNG for one agent step      |
//! | [`outcome`]  | `Outcome`, `SkipReason`: what a step did                       |
//! | [`model`]    | `BehaviorModel` trait                                           |
//! | [`adoption`] | `AdoptionModel`: learning, pooling, build and upgrade; `trim_pool` |
//! | [`noop`]     | `NoopBehavior`: placeholder that never acts                    |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! Agent steps are sequential and mutate the world in place, so a
//! contributor enrolled by one farmer is invisible to every farmer visited
//! after it in the same tick.  Order effects are part of the model; the
//! driver randomises the visitation order every tick.

pub mod adoption;
pub mod context;
pub mod error;
pub mod model;
pub mod noop;
pub mod outcome;
pub mod params;


pub use adoption::{trim_pool, AdoptionModel, Candidate, BELIEF_RADIUS, POOL_RADIUS};
pub use context::StepContext;
pub use error::{BehaviorError, BehaviorResult};
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
pub use outcome::{Outcome, SkipReason};
pub use params::ModelParams;
