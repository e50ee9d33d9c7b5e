//! `bg-sim`: tick loop orchestrator for the biogas adoption model.
//!
//! # Tick loop
//!
//! ```text
//! while clock < config.end_tick():
//!   ① Advance  : the clock moves first, so the first step sees Tick(1).
//!   ② Roster   : snapshot every farmer and plant as an AgentRef list.
//!   ③ Shuffle  : permute the roster with the run's SimRng.
//!   ④ Visit    : BehaviorModel::step_farmer / step_plant, in roster
//!                 order, each mutating the world immediately.
//!   ⑤ Collect  : TickSummary over the whole world.
//! ```
//!
//! Plants founded during a tick are not on that tick's roster; they are
//! first visited (and first pay out) on the next one.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bg_behavior::{AdoptionModel, ModelParams};
//! use bg_core::SimConfig;
//! use bg_sim::{NoopObserver, SimBuilder};
//!
//! let model = AdoptionModel::new(ModelParams::default())?;
//! let mut sim = SimBuilder::new(SimConfig::default(), model).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{} plants", sim.world.plant_count());
//! ```

pub mod audit;
pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;


pub use audit::audit;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::TickSummary;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
