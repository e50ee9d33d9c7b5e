//! The `BehaviorModel` trait: the driver's only view of agent decisions.

use bg_core::{FarmerId, PlantId};

use crate::{BehaviorResult, Outcome, StepContext};

/// Pluggable per-agent transition function.
///
/// The driver calls [`step_farmer`][Self::step_farmer] or
/// [`step_plant`][Self::step_plant] exactly once per agent per tick, in a
/// shuffled order.  Implementations mutate `ctx.world` directly and draw all
/// randomness from `ctx.rng`.
///
/// An `Err` means the world's bookkeeping is broken; the driver aborts the
/// run.
pub trait BehaviorModel {
    fn step_farmer(&self, farmer: FarmerId, ctx: &mut StepContext<'_>) -> BehaviorResult<Outcome>;

    fn step_plant(&self, plant: PlantId, ctx: &mut StepContext<'_>) -> BehaviorResult<Outcome>;
}
