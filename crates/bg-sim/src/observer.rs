//! Simulation observer trait for progress reporting and data collection.

use bg_agent::World;
use bg_core::Tick;

use crate::TickSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_tick_end(&mut self, s: &TickSummary) {
///         println!("{}: {} plants, {} adopters", s.tick, s.total_plants, s.cumulative_adopters);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after the clock advances, before any agent is visited.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every agent has been visited.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to the whole world.
    fn on_snapshot(&mut self, _tick: Tick, _world: &World) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
