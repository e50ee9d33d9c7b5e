//! Electrical output, capital cost, and feed-in tariff as functions of
//! capacity.
//!
//! All three are piecewise functions clamped outside their defined bands,
//! so any finite capacity maps to a finite value.

/// Hours of operation per simulated year.
pub const HOURS_PER_YEAR: f64 = 24.0 * 365.0;

/// Base conversion from livestock units to electrical kW.
pub const KW_PER_LSU: f64 = 0.18;

/// Maximum relative output gain of the largest installations.
pub const MAX_EFFICIENCY_BOOST: f64 = 0.30;

/// Capacity (LSU) at which the efficiency ramp starts and ends.
const EFFICIENCY_RAMP: (f64, f64) = (75.0, 1_000.0);

/// kW band over which the specific capital cost falls.
const COST_RAMP_KW: (f64, f64) = (75.0, 150.0);

/// Specific capital cost (currency per kW) at each end of `COST_RAMP_KW`.
const COST_PER_KW: (f64, f64) = (9_000.0, 6_500.0);

/// Feed-in tariff tiers: `(upper kW bound inclusive, currency per kWh)`.
const TARIFF_TIERS: [(f64, f64); 2] = [(50.0, 0.27), (100.0, 0.25)];

/// Tariff above the last tier.
const TARIFF_LARGE: f64 = 0.22;

/// Linear interpolation of `x` from `(x0, x1)` onto `(y0, y1)`, clamped to
/// the end values outside the band.
fn interp(x: f64, (x0, x1): (f64, f64), (y0, y1): (f64, f64)) -> f64 {
    let t = ((x - x0) / (x1 - x0)).clamp(0.0, 1.0);
    y0 + t * (y1 - y0)
}

/// Electrical output in kW.
///
/// `capacity × 0.18`, boosted by up to 30 % as capacity ramps from 75 to
/// 1000 LSU.
pub fn power_kw(capacity: f64) -> f64 {
    let base = capacity * KW_PER_LSU;
    let efficiency = interp(capacity, EFFICIENCY_RAMP, (0.0, 1.0));
    base * (1.0 + MAX_EFFICIENCY_BOOST * efficiency)
}

/// Total capital cost of a plant of `capacity`.
///
/// The price per kW falls linearly from 9000 to 6500 as output rises from
/// 75 to 150 kW and is flat outside that band.
pub fn capital_cost(capacity: f64) -> f64 {
    let kw = power_kw(capacity);
    interp(kw, COST_RAMP_KW, COST_PER_KW) * kw
}

/// Feed-in tariff (currency per kWh) for a plant of `capacity`, tiered on
/// its output: 0.27 up to 50 kW, 0.25 up to 100 kW, 0.22 above.
pub fn tariff(capacity: f64) -> f64 {
    let kw = power_kw(capacity);
    TARIFF_TIERS
        .iter()
        .find(|&&(bound, _)| kw <= bound)
        .map_or(TARIFF_LARGE, |&(_, rate)| rate)
}

/// Gross yearly revenue of a plant: `(tariff + tariff_shift) × kW × 8760`.
pub fn annual_revenue(capacity: f64, tariff_shift: f64) -> f64 {
    power_kw(capacity) * HOURS_PER_YEAR * (tariff(capacity) + tariff_shift)
}
