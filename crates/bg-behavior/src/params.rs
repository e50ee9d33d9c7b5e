//! Model-level parameters of the decision engine.

use bg_agent::ContributorOccupancy;
use bg_core::{check_range, BgResult};

/// Learning, pooling and economic parameters shared by every farmer.
///
/// Every field has a default, so a config file need only list overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelParams {
    // ── Learning ──────────────────────────────────────────────────────────
    /// Steepness of the global learning sigmoid.
    pub learning_rate: f64,

    /// Tick at which global learning reaches one half.
    pub learning_midpoint: f64,

    pub weight_global_build:      f64,
    pub weight_social_build:      f64,
    pub weight_global_contribute: f64,
    pub weight_social_contribute: f64,

    // ── Pooling ───────────────────────────────────────────────────────────
    /// A prospect neighbour joins a pool only if its contribute willingness
    /// is strictly above this.
    pub contribute_threshold: f64,

    pub contributor_occupancy: ContributorOccupancy,

    // ── Economics ─────────────────────────────────────────────────────────
    pub co_owner_penalty:      f64,
    pub utility_sensitivity:   f64,
    pub utility_min_threshold: f64,
    pub plant_lifetime_years:  u32,
    pub discount_rate:         f64,
    pub profit_scale:          f64,

    /// Added to every tariff, in currency per kWh.
    pub tariff_shift: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.05,
            learning_midpoint: 25.0,
            weight_global_build: 0.5,
            weight_social_build: 0.05,
            weight_global_contribute: 0.5,
            weight_social_contribute: 0.1,
            contribute_threshold: 0.7,
            contributor_occupancy: ContributorOccupancy::Remove,
            co_owner_penalty: 0.1,
            utility_sensitivity: 1.0,
            utility_min_threshold: 0.0,
            plant_lifetime_years: 20,
            discount_rate: 0.05,
            profit_scale: 1e6,
            tariff_shift: 0.0,
        }
    }
}

impl ModelParams {
    pub fn validate(&self) -> BgResult<()> {
        let any = f64::MIN..=f64::MAX;
        check_range("learning_rate", self.learning_rate, 0.0..=f64::MAX)?;
        check_range("learning_midpoint", self.learning_midpoint, any.clone())?;
        check_range("weight_global_build", self.weight_global_build, any.clone())?;
        check_range("weight_social_build", self.weight_social_build, any.clone())?;
        check_range("weight_global_contribute", self.weight_global_contribute, any.clone())?;
        check_range("weight_social_contribute", self.weight_social_contribute, any.clone())?;
        check_range("contribute_threshold", self.contribute_threshold, 0.0..=1.0)?;
        check_range("co_owner_penalty", self.co_owner_penalty, 0.0..=f64::MAX)?;
        check_range("utility_sensitivity", self.utility_sensitivity, any.clone())?;
        check_range("utility_min_threshold", self.utility_min_threshold, any.clone())?;
        check_range("discount_rate", self.discount_rate, 0.0..=1.0)?;
        check_range("profit_scale", self.profit_scale, f64::MIN_POSITIVE..=f64::MAX)?;
        check_range("tariff_shift", self.tariff_shift, any)?;
        Ok(())
    }
}
