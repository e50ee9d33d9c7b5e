//! Fluent builder for constructing a [`Sim`].

use bg_agent::{PopulationBuilder, PopulationParams, World};
use bg_behavior::BehaviorModel;
use bg_core::{SimConfig, SimRng};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: lattice size, total ticks, seed, snapshot interval
/// - `B: BehaviorModel`: usually [`bg_behavior::AdoptionModel`]
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                          |
/// |-----------------|--------------------------------------------------|
/// | `.population(p)`| `PopulationParams::default()`                    |
/// | `.world(w)`     | Sampled by `PopulationBuilder` from the seed     |
///
/// Population sampling draws from the same `SimRng` as the run, so one seed
/// fixes both the population and the trajectory.
pub struct SimBuilder<B: BehaviorModel> {
    config:     SimConfig,
    behavior:   B,
    population: PopulationParams,
    world:      Option<World>,
}

impl<B: BehaviorModel> SimBuilder<B> {
    pub fn new(config: SimConfig, behavior: B) -> Self {
        Self {
            config,
            behavior,
            population: PopulationParams::default(),
            world: None,
        }
    }

    pub fn population(mut self, params: PopulationParams) -> Self {
        self.population = params;
        self
    }

    /// Use a pre-built world instead of sampling one.  Its dimensions must
    /// match the config.
    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Validate inputs, sample the population if needed, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;
        let mut rng = SimRng::new(self.config.seed);

        let world = match self.world {
            Some(w) => {
                if (w.width(), w.height()) != (self.config.width, self.config.height) {
                    return Err(SimError::DimensionMismatch {
                        width:      self.config.width,
                        height:     self.config.height,
                        got_width:  w.width(),
                        got_height: w.height(),
                    });
                }
                w
            }
            None => PopulationBuilder::new(self.config.width, self.config.height)
                .params(self.population)
                .build(&mut rng)?,
        };

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            world,
            rng,
            behavior: self.behavior,
            history:  Vec::new(),
        })
    }
}
