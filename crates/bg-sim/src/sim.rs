//! The `Sim` struct and its tick loop.

use log::info;

use bg_agent::World;
use bg_behavior::{BehaviorModel, StepContext};
use bg_core::{AgentRef, SimClock, SimConfig, SimRng, Tick};

use crate::{SimObserver, SimResult, TickSummary};

/// The main simulation runner.
///
/// `Sim<B>` owns the world, the clock and the run's only RNG, and visits
/// every agent once per tick in a freshly shuffled order:
///
/// 1. **Advance** the clock.
/// 2. **Roster**: every farmer and every plant that exists now.
/// 3. **Shuffle** the roster.
/// 4. **Visit** each entry through the [`BehaviorModel`].
/// 5. **Collect** a [`TickSummary`] and append it to `history`.
///
/// Any error from a step aborts the run; the world is left as it was at the
/// failing step.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    pub config: SimConfig,

    pub clock: SimClock,

    /// Farmers, plants and both lattices.
    pub world: World,

    /// Single seeded stream for every draw after population sampling.
    pub rng: SimRng,

    pub behavior: B,

    /// One summary per completed tick, oldest first.
    pub history: Vec<TickSummary>,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let remaining = self.config.end_tick().0.saturating_sub(self.clock.current_tick.0);
        info!(
            "running {remaining} steps on a {}×{} lattice ({} farmers, seed {})",
            self.config.width,
            self.config.height,
            self.world.farmer_count(),
            self.config.seed,
        );
        self.run_ticks(remaining, observer)?;
        observer.on_sim_end(self.clock.current_tick);

        if let Some(last) = self.history.last() {
            info!(
                "finished at {}: {} plants, {} adopters ({:.1}%), {:.0} kW installed",
                last.tick,
                last.total_plants,
                last.cumulative_adopters,
                100.0 * last.adoption_rate(),
                last.total_kw,
            );
        }
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.clock.advance();
            let now = self.clock.current_tick;

            observer.on_tick_start(now);
            self.process_tick(now)?;

            let summary = TickSummary::collect(&self.world, now);
            observer.on_tick_end(&summary);
            self.history.push(summary);

            if self.config.output_interval_ticks > 0
                && now.0.is_multiple_of(self.config.output_interval_ticks)
            {
                observer.on_snapshot(now, &self.world);
            }
        }
        Ok(())
    }

    /// The most recent summary, if any tick has run.
    pub fn last_summary(&self) -> Option<&TickSummary> {
        self.history.last()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> SimResult<()> {
        let mut roster: Vec<AgentRef> = self
            .world
            .farmer_ids()
            .map(AgentRef::Farmer)
            .chain(self.world.plant_ids().map(AgentRef::Plant))
            .collect();
        self.rng.shuffle(&mut roster);

        let mut ctx = StepContext::new(now, &mut self.world, &mut self.rng);
        for agent in roster {
            match agent {
                AgentRef::Farmer(id) => self.behavior.step_farmer(id, &mut ctx)?,
                AgentRef::Plant(id)  => self.behavior.step_plant(id, &mut ctx)?,
            };
        }
        Ok(())
    }
}
