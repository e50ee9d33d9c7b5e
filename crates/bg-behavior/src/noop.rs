//! A no-op behavior model: agents never act.

use bg_core::{FarmerId, PlantId};

use crate::{BehaviorModel, BehaviorResult, Outcome, StepContext};

/// A [`BehaviorModel`] under which nobody learns, builds or gets paid.
///
/// Useful for exercising the driver without any adoption dynamics.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn step_farmer(&self, _farmer: FarmerId, _ctx: &mut StepContext<'_>) -> BehaviorResult<Outcome> {
        Ok(Outcome::Idle)
    }

    fn step_plant(&self, _plant: PlantId, _ctx: &mut StepContext<'_>) -> BehaviorResult<Outcome> {
        Ok(Outcome::Idle)
    }
}
