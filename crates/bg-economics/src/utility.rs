//! Discounted net-present-value utility of joining a plant.

use crate::{annual_revenue, capital_cost};

/// Utility returned for degenerate inputs: a plant that must never be built.
pub const UTILITY_NEVER_BUILD: f64 = -1e9;

/// Yearly maintenance estimated as a share of capital cost.
pub const MAINTENANCE_SHARE_OF_CAPEX: f64 = 0.03;

/// Logistic function `1 / (1 + e^-x)`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Everything [`utility`] needs to score one farmer's participation.
#[derive(Clone, Debug, PartialEq)]
pub struct UtilityInputs {
    /// Plant capacity in LSU.
    pub capacity: f64,
    /// The deciding farmer's own contribution in LSU.
    pub farm_size: f64,
    /// Maintenance cost incurred once per `maintenance_interval_years`.
    pub maintenance_cost: f64,
    pub maintenance_interval_years: u32,
    /// Owner plus contributors.
    pub n_owners: u32,
    pub lifetime_years: u32,
    pub discount_rate: f64,
    /// Utility lost per co-owner beyond the first.
    pub co_owner_penalty: f64,
    /// NPV divisor that makes the score dimensionless.
    pub profit_scale: f64,
    /// Added to the tiered tariff.
    pub tariff_shift: f64,
}

/// Dimensionless desirability of participating in a plant.
///
/// ```text
/// share   = clamp(farm_size / capacity, 0, 1)
/// profit  = share × (revenue − maintenance / max(1, interval))
/// capex   = capital_cost / max(1, n_owners)
/// npv     = −capex + Σ_{y=1..lifetime} profit / (1 + r)^y
/// utility = npv / profit_scale − penalty × max(0, n_owners − 1)
/// ```
///
/// Non-positive `capacity` or `farm_size` returns [`UTILITY_NEVER_BUILD`].
pub fn utility(inputs: &UtilityInputs) -> f64 {
    if inputs.capacity <= 0.0 || inputs.farm_size <= 0.0 {
        return UTILITY_NEVER_BUILD;
    }

    let revenue = annual_revenue(inputs.capacity, inputs.tariff_shift);
    let maintenance = inputs.maintenance_cost / f64::from(inputs.maintenance_interval_years.max(1));
    let share = (inputs.farm_size / inputs.capacity).clamp(0.0, 1.0);
    let annual_profit = share * (revenue - maintenance);

    let n_owners = inputs.n_owners.max(1);
    let capex_share = capital_cost(inputs.capacity) / f64::from(n_owners);

    let growth = 1.0 + inputs.discount_rate;
    let discounted: f64 = (1..=inputs.lifetime_years)
        .map(|year| annual_profit / growth.powi(year as i32))
        .sum();
    let npv = discounted - capex_share;

    npv / inputs.profit_scale - inputs.co_owner_penalty * f64::from(n_owners - 1)
}
