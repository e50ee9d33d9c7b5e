//! grid_run: run the biogas adoption model on a square lattice.
//!
//! ```text
//! grid_run [--config run.toml] [--seed N] [--steps N] [--progress N]
//! ```
//!
//! Without `--config` every parameter takes its default.  Set `RUST_LOG=debug`
//! to see every plant built or upgraded.

mod config;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use bg_behavior::AdoptionModel;
use bg_core::Tick;
use bg_sim::{SimBuilder, SimObserver, TickSummary};

use crate::config::RunFile;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML run file with optional [sim], [model] and [population] tables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override `sim.seed`.
    #[arg(long)]
    seed: Option<u64>,

    /// Override `sim.total_ticks`.
    #[arg(long)]
    steps: Option<u64>,

    /// Log a progress line every N steps.
    #[arg(long, default_value_t = 10)]
    progress: u64,
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct Progress {
    every: u64,
}

impl SimObserver for Progress {
    fn on_tick_end(&mut self, s: &TickSummary) {
        if self.every > 0 && s.tick.0.is_multiple_of(self.every) {
            log::info!(
                "{}: {} plants, {} adopters (+{}), {:.0} kW, {:.0} paid out",
                s.tick,
                s.total_plants,
                s.cumulative_adopters,
                s.new_adopters,
                s.total_kw,
                s.total_money,
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        log::debug!("stopped at {final_tick}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = Cli::parse();
    log::info!("{args:?}");

    let mut run = match &args.config {
        Some(file) => RunFile::load(file)?,
        None => RunFile::default(),
    };
    if let Some(seed) = args.seed {
        run.sim.seed = seed;
    }
    if let Some(steps) = args.steps {
        run.sim.total_ticks = steps;
    }
    run.validate()?;

    let model = AdoptionModel::new(run.model).context("failed to construct model")?;
    let mut sim = SimBuilder::new(run.sim, model)
        .population(run.population)
        .build()
        .context("failed to build simulation")?;

    let t0 = Instant::now();
    sim.run(&mut Progress { every: args.progress })
        .context("simulation aborted")?;
    let elapsed = t0.elapsed();

    if let Some(s) = sim.last_summary() {
        log::info!("farmers             : {}", s.total_farmers);
        log::info!("farmers with plants : {}", s.farmers_with_plants);
        log::info!("plants              : {} ({} upgrades)", s.total_plants, s.total_upgrades);
        log::info!("adopters            : {} ({:.1}%)", s.cumulative_adopters, 100.0 * s.adoption_rate());
        log::info!("installed power     : {:.1} kW", s.total_kw);
        log::info!("avg capex           : {:.0} per kW", s.avg_cost_per_kw);
        log::info!("money paid out      : {:.0}", s.total_money);
    }
    log::info!("completed in {:.3} s", elapsed.as_secs_f64());
    Ok(())
}
