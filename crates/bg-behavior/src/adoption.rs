//! The adoption model: learning, neighbour pooling, building and upgrading.
//!
//! # Prospect step
//!
//! | # | Phase        | Stops with                                       |
//! |---|--------------|--------------------------------------------------|
//! | 1 | Belief update (radius 2)                  | never                |
//! | 2 | Gate: `gen_bool(willingness_to_build³)`   | `Gate`               |
//! | 3 | Pool willing prospects (radius 1)         |                      |
//! | 4 | Trim smallest until `≤ MAX_SIZE`          | `TooLarge`           |
//! | 5 | Feasibility and utility                   | `TooSmall`, `LowUtility` |
//! | 6 | Draw against `sigmoid(s·u) · willingness` | `Declined`           |
//! | 7 | Found the plant and enrol the pool        | `Built`              |
//!
//! # Owner step
//!
//! Same gate and pooling; the added capacity alone is trimmed against
//! `MAX_SIZE`.  The upgrade applies only if it moves the plant up a size
//! class and the grown plant still fits in `MAX_SIZE`.
//!
//! # Plant step
//!
//! One year of tariff income is credited to the owner.

use log::{debug, trace};

use bg_agent::{AdoptionState, World};
use bg_core::{Cell, FarmerId, PlantId, Tick};
use bg_economics::{
    capital_cost, sigmoid, utility, UtilityInputs, MAINTENANCE_SHARE_OF_CAPEX, MAX_SIZE, MIN_SIZE,
};

use crate::{BehaviorModel, BehaviorResult, ModelParams, Outcome, SkipReason, StepContext};

/// Chebyshev radius for observing adopted neighbours.
pub const BELIEF_RADIUS: u32 = 2;

/// Chebyshev radius for pooling neighbour farms into a plant.
pub const POOL_RADIUS: u32 = 1;

/// A pool candidate: who, and how many LSU it brings.
pub type Candidate = (FarmerId, f64);

/// Sort `pool` by farm size descending, then drop the smallest remaining
/// candidate while `total > max`.  Returns the trimmed total.
///
/// `total` may include capacity that is not in `pool` (the founder's own
/// farm); it is never removed.  Ties in farm size are broken by id so the
/// result is independent of the input order.
pub fn trim_pool(pool: &mut Vec<Candidate>, mut total: f64, max: f64) -> f64 {
    if total <= max {
        return total;
    }
    pool.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    while total > max {
        let Some((_, size)) = pool.pop() else { break };
        total -= size;
    }
    total
}

/// The standard farmer decision engine.
pub struct AdoptionModel {
    params: ModelParams,
}

impl AdoptionModel {
    pub fn new(params: ModelParams) -> BehaviorResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Population-wide learning signal at `tick`, in `(0, 1)`.
    pub fn global_learning(&self, tick: Tick) -> f64 {
        sigmoid(self.params.learning_rate * (tick.as_f64() - self.params.learning_midpoint))
    }

    /// Fraction of farmers within [`BELIEF_RADIUS`] of `cell` that have
    /// adopted.  Zero with no neighbours.
    pub fn share_adopted(world: &World, cell: Cell) -> BehaviorResult<f64> {
        let neighbors = world.farmer_grid.neighbors(cell, BELIEF_RADIUS);
        if neighbors.is_empty() {
            return Ok(0.0);
        }
        let mut adopted = 0usize;
        for id in &neighbors {
            if world.farmer(*id)?.state().is_adopted() {
                adopted += 1;
            }
        }
        Ok(adopted as f64 / neighbors.len() as f64)
    }

    /// Recompute a prospect's beliefs from its base values, global learning
    /// and the adoption share around it.
    pub fn update_beliefs(&self, world: &mut World, farmer: FarmerId, tick: Tick) -> BehaviorResult<()> {
        let p = &self.params;
        let global = self.global_learning(tick);
        let cell = world.home_of(farmer)?;
        let social = Self::share_adopted(world, cell)?;

        let f = world.farmer_mut(farmer)?;
        let build = f.base_willingness_to_build()
            + p.weight_global_build * global
            + p.weight_social_build * social;
        let contribute = f.base_willingness_to_contribute()
            + p.weight_global_contribute * global
            + p.weight_social_contribute * social;
        f.set_beliefs(build, contribute);
        Ok(())
    }

    /// Prospects within [`POOL_RADIUS`] of `cell` willing to contribute.
    pub fn willing_neighbors(&self, world: &World, cell: Cell) -> BehaviorResult<Vec<Candidate>> {
        let mut pool = Vec::new();
        for id in world.farmer_grid.neighbors(cell, POOL_RADIUS) {
            let f = world.farmer(id)?;
            if f.state() == AdoptionState::Prospect
                && f.willingness_to_contribute() > self.params.contribute_threshold
            {
                pool.push((id, f.farm_size()));
            }
        }
        Ok(pool)
    }

    /// Expected utility for a farmer bringing `farm_size` LSU into a plant of
    /// `capacity` LSU shared by `n_owners`.
    pub fn expected_utility(&self, farm_size: f64, capacity: f64, n_owners: u32) -> f64 {
        let p = &self.params;
        utility(&UtilityInputs {
            capacity,
            farm_size,
            maintenance_cost: MAINTENANCE_SHARE_OF_CAPEX * capital_cost(capacity),
            maintenance_interval_years: 1,
            n_owners,
            lifetime_years: p.plant_lifetime_years,
            discount_rate: p.discount_rate,
            co_owner_penalty: p.co_owner_penalty,
            profit_scale: p.profit_scale,
            tariff_shift: p.tariff_shift,
        })
    }

    // ── Prospect ──────────────────────────────────────────────────────────

    fn step_prospect(&self, id: FarmerId, ctx: &mut StepContext<'_>) -> BehaviorResult<Outcome> {
        self.update_beliefs(ctx.world, id, ctx.tick)?;

        let (farm_size, willingness) = {
            let f = ctx.world.farmer(id)?;
            (f.farm_size(), f.willingness_to_build())
        };
        if !ctx.rng.gen_bool(willingness.powi(3)) {
            return Ok(skip(id, SkipReason::Gate));
        }

        let cell = ctx.world.home_of(id)?;
        let mut pool = self.willing_neighbors(ctx.world, cell)?;
        let pooled: f64 = pool.iter().map(|c| c.1).sum();
        let capacity = trim_pool(&mut pool, farm_size + pooled, MAX_SIZE);

        if capacity > MAX_SIZE {
            return Ok(skip(id, SkipReason::TooLarge));
        }
        if capacity < MIN_SIZE {
            return Ok(skip(id, SkipReason::TooSmall));
        }

        let n_owners = 1 + pool.len() as u32;
        let u = self.expected_utility(farm_size, capacity, n_owners);
        if u < self.params.utility_min_threshold {
            return Ok(skip(id, SkipReason::LowUtility));
        }

        let p_final = sigmoid(self.params.utility_sensitivity * u) * willingness;
        if ctx.rng.random::<f64>() >= p_final {
            return Ok(skip(id, SkipReason::Declined));
        }

        let contributors: Vec<FarmerId> = pool.iter().map(|c| c.0).collect();
        let n = contributors.len();
        let plant = ctx.world.found_plant(
            id,
            capacity,
            contributors,
            ctx.tick,
            self.params.contributor_occupancy,
        )?;
        debug!(
            "{}: {id} built {plant} ({capacity:.1} LSU, {n} contributors, utility {u:.3})",
            ctx.tick
        );
        Ok(Outcome::Built { plant, contributors: n })
    }

    // ── Owner ─────────────────────────────────────────────────────────────

    fn step_owner(&self, id: FarmerId, ctx: &mut StepContext<'_>) -> BehaviorResult<Outcome> {
        let (plant_id, willingness) = {
            let f = ctx.world.farmer(id)?;
            match f.biogas_plant() {
                Some(plant) => (plant, f.willingness_to_build()),
                None => return Ok(Outcome::Idle),
            }
        };
        if !ctx.rng.gen_bool(willingness.powi(3)) {
            return Ok(skip(id, SkipReason::Gate));
        }

        let cell = ctx.world.home_of(id)?;
        let mut pool = self.willing_neighbors(ctx.world, cell)?;
        if pool.is_empty() {
            return Ok(skip(id, SkipReason::NoCandidates));
        }

        let plant = ctx.world.plant(plant_id)?;
        let current = plant.capacity();
        let mut additional: f64 = pool.iter().map(|c| c.1).sum();
        if current + additional > MAX_SIZE {
            additional = trim_pool(&mut pool, additional, MAX_SIZE);
        }
        if pool.is_empty() {
            return Ok(skip(id, SkipReason::NoCandidates));
        }
        if !plant.can_upgrade(additional) {
            return Ok(skip(id, SkipReason::NoClassChange));
        }
        if current + additional > MAX_SIZE {
            return Ok(skip(id, SkipReason::OverCapacity));
        }

        let contributors: Vec<FarmerId> = pool.iter().map(|c| c.0).collect();
        ctx.world.upgrade_plant(
            plant_id,
            additional,
            &contributors,
            ctx.tick,
            self.params.contributor_occupancy,
        )?;
        debug!(
            "{}: {id} upgraded {plant_id} by {additional:.1} LSU ({} contributors)",
            ctx.tick,
            contributors.len()
        );
        Ok(Outcome::Upgraded { plant: plant_id, additional, contributors: contributors.len() })
    }
}

impl BehaviorModel for AdoptionModel {
    fn step_farmer(&self, farmer: FarmerId, ctx: &mut StepContext<'_>) -> BehaviorResult<Outcome> {
        match ctx.world.farmer(farmer)?.state() {
            AdoptionState::Prospect    => self.step_prospect(farmer, ctx),
            AdoptionState::Owner       => self.step_owner(farmer, ctx),
            AdoptionState::Contributor => Ok(Outcome::Idle),
        }
    }

    fn step_plant(&self, plant: PlantId, ctx: &mut StepContext<'_>) -> BehaviorResult<Outcome> {
        let amount = ctx.world.pay_out(plant, self.params.tariff_shift)?;
        Ok(Outcome::Paid { plant, amount })
    }
}

fn skip(id: FarmerId, reason: SkipReason) -> Outcome {
    trace!("{id}: skipped ({reason:?})");
    Outcome::Skipped(reason)
}
