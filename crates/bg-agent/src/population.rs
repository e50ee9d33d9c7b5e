//! Fluent builder that fills a lattice with one sampled farmer per cell.
//!
//! # Usage
//!
//! ```rust
//! use bg_agent::{PopulationBuilder, PopulationParams};
//! use bg_core::SimRng;
//!
//! let mut rng = SimRng::new(42);
//! let world = PopulationBuilder::new(10, 10)
//!     .params(PopulationParams::default())
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(world.farmer_count(), 100);
//! assert_eq!(world.plant_count(), 0);
//! ```
//!
//! # Sampling
//!
//! Cells are filled column by column (`x` outer, `y` inner).  Per farmer, in
//! draw order:
//!
//! 1. farm size from [`LsuDistribution`], plus `farm_capacity_shift`,
//!    floored at 0;
//! 2. innovator coin with probability `innovator_share`;
//! 3. base build willingness, uniform in the innovator or majority range;
//! 4. base contribute willingness `min(1, build + U(contribute_bonus))`;
//! 5. build ceiling `min(1, build + U(max_willingness_headroom))`.

use rand::distributions::WeightedIndex;

use bg_core::{check_range, BgError, BgResult, Cell, SimRng};

use crate::{AgentResult, Farmer, World};

// ── LSU distribution ──────────────────────────────────────────────────────────

/// Farm-size bins in LSU, `(low, high)`.  The last bin caps an open-ended
/// "over 120" class.
const LSU_BINS: [(f64, f64); 8] = [
    (0.0, 10.0),
    (11.0, 20.0),
    (21.0, 40.0),
    (41.0, 60.0),
    (61.0, 80.0),
    (81.0, 100.0),
    (101.0, 120.0),
    (121.0, 150.0),
];

/// Relative bin weights.  `WeightedIndex` normalises them.
const LSU_WEIGHTS: [f64; 8] = [0.04, 0.12, 0.30, 0.37, 0.06, 0.06, 0.02, 0.03];

/// Empirical farm-size distribution: pick a bin by weight, then a uniform
/// value inside it.
pub struct LsuDistribution {
    bins: WeightedIndex<f64>,
}

impl LsuDistribution {
    pub fn new() -> BgResult<Self> {
        let bins = WeightedIndex::new(LSU_WEIGHTS)
            .map_err(|e| BgError::Config(format!("LSU bin weights: {e}")))?;
        Ok(Self { bins })
    }

    /// One farm size, shifted by `shift` and floored at 0.
    pub fn sample(&self, rng: &mut SimRng, shift: f64) -> f64 {
        let (low, high) = LSU_BINS[rng.sample(&self.bins)];
        (rng.gen_range(low..high) + shift).max(0.0)
    }

    /// Mean of the unshifted distribution.
    pub fn mean() -> f64 {
        let total: f64 = LSU_WEIGHTS.iter().sum();
        LSU_BINS
            .iter()
            .zip(LSU_WEIGHTS)
            .map(|(&(low, high), w)| w / total * (low + high) / 2.0)
            .sum()
    }
}

// ── Parameters ────────────────────────────────────────────────────────────────

/// Knobs for population sampling.  Ranges are `(low, high)` pairs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopulationParams {
    /// Probability that a farmer is an innovator.
    pub innovator_share: f64,

    /// Added to every sampled farm size before flooring at 0.
    pub farm_capacity_shift: f64,

    pub innovator_willingness: (f64, f64),
    pub majority_willingness: (f64, f64),

    /// Added to base build willingness to get base contribute willingness.
    pub contribute_bonus: (f64, f64),

    /// Added to base build willingness to get the personal build ceiling.
    pub max_willingness_headroom: (f64, f64),
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            innovator_share: 0.05,
            farm_capacity_shift: 0.0,
            innovator_willingness: (0.6, 0.9),
            majority_willingness: (0.0, 0.3),
            contribute_bonus: (0.0, 0.2),
            max_willingness_headroom: (0.1, 0.4),
        }
    }
}

impl PopulationParams {
    pub fn validate(&self) -> BgResult<()> {
        check_range("innovator_share", self.innovator_share, 0.0..=1.0)?;
        check_range("farm_capacity_shift", self.farm_capacity_shift, f64::MIN..=f64::MAX)?;
        for (name, (low, high)) in [
            ("innovator_willingness", self.innovator_willingness),
            ("majority_willingness", self.majority_willingness),
            ("contribute_bonus", self.contribute_bonus),
            ("max_willingness_headroom", self.max_willingness_headroom),
        ] {
            check_range(name, low, 0.0..=1.0)?;
            check_range(name, high, low..=1.0)?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for a fully populated [`World`].
pub struct PopulationBuilder {
    width:  u32,
    height: u32,
    params: PopulationParams,
}

impl PopulationBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, params: PopulationParams::default() }
    }

    pub fn params(mut self, params: PopulationParams) -> Self {
        self.params = params;
        self
    }

    /// Sample one farmer per cell.  All draws come from `rng`.
    pub fn build(self, rng: &mut SimRng) -> AgentResult<World> {
        self.params.validate()?;
        let lsu = LsuDistribution::new()?;
        let p = &self.params;

        let mut world = World::new(self.width, self.height);
        for x in 0..self.width {
            for y in 0..self.height {
                let farm_size = lsu.sample(rng, p.farm_capacity_shift);
                let (low, high) = if rng.random::<f64>() < p.innovator_share {
                    p.innovator_willingness
                } else {
                    p.majority_willingness
                };
                let build = uniform(rng, low, high);
                let contribute = (build + uniform(rng, p.contribute_bonus.0, p.contribute_bonus.1)).min(1.0);
                let farmer = Farmer::sample_with_headroom(
                    farm_size,
                    build,
                    contribute,
                    p.max_willingness_headroom,
                    rng,
                );
                world.add_farmer(farmer, Cell::new(x, y))?;
            }
        }
        Ok(world)
    }
}

/// Uniform in `[low, high]`, tolerating a degenerate range.
fn uniform(rng: &mut SimRng, low: f64, high: f64) -> f64 {
    if high > low { rng.gen_range(low..=high) } else { low }
}
