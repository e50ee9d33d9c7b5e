//! Per-tick aggregate metrics.

use bg_agent::World;
use bg_core::Tick;

/// Whole-world aggregates recorded at the end of a tick.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TickSummary {
    pub tick: Tick,

    pub total_farmers:       usize,
    pub farmers_with_plants: usize,
    pub total_plants:        usize,

    /// Tariff income paid out so far, summed over all farmers.
    pub total_money: f64,

    /// Farmers with an adoption time, owners and contributors alike.
    pub cumulative_adopters: usize,

    /// Farmers whose adoption time is this tick.
    pub new_adopters: usize,

    pub total_kw: f64,

    /// `Σ capital cost / Σ kW` over all plants; 0 with no plants.
    pub avg_cost_per_kw: f64,

    pub total_upgrades: u32,
}

impl TickSummary {
    /// One pass over farmers and one over plants.
    pub fn collect(world: &World, tick: Tick) -> Self {
        let mut s = TickSummary { tick, ..Default::default() };

        for (_, f) in world.farmers() {
            s.total_farmers += 1;
            s.total_money += f.money_received();
            if f.has_biogas_plant() {
                s.farmers_with_plants += 1;
            }
            if let Some(at) = f.time_of_adoption() {
                s.cumulative_adopters += 1;
                if at == tick {
                    s.new_adopters += 1;
                }
            }
        }

        let mut total_cost = 0.0;
        for p in world.plants() {
            s.total_plants += 1;
            s.total_kw += p.power_kw();
            total_cost += p.capital_cost();
            s.total_upgrades += p.num_upgrades();
        }
        if s.total_kw > 0.0 {
            s.avg_cost_per_kw = total_cost / s.total_kw;
        }
        s
    }

    /// Share of farmers that have adopted, in `[0, 1]`.
    pub fn adoption_rate(&self) -> f64 {
        if self.total_farmers == 0 {
            0.0
        } else {
            self.cumulative_adopters as f64 / self.total_farmers as f64
        }
    }
}
