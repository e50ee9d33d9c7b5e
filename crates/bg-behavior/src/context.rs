//! Mutable state handed to every behavior callback.

use bg_agent::World;
use bg_core::{SimRng, Tick};

/// Everything one agent step may read or change.
///
/// Built by the driver for each visit.  The world is borrowed mutably
/// because a step commits its decisions immediately; the next agent visited
/// sees them.
pub struct StepContext<'a> {
    /// Current tick.  The first step of a run sees `Tick(1)`.
    pub tick: Tick,

    pub world: &'a mut World,

    /// The run's single random stream.
    pub rng: &'a mut SimRng,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(tick: Tick, world: &'a mut World, rng: &'a mut SimRng) -> Self {
        Self { tick, world, rng }
    }
}
