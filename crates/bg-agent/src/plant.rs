//! A built biogas plant and its upgrade lifecycle.
//!
//! | Operation        | Effect                                                  |
//! |------------------|---------------------------------------------------------|
//! | `Plant::new`     | Validate `MIN_SIZE ≤ capacity ≤ MAX_SIZE`, classify     |
//! | `can_upgrade`    | Would `capacity + additional` reach a larger class?     |
//! | `upgrade`        | Grow capacity, append contributors, reclassify          |
//! | `annual_payout`  | Yearly tariff income, never negative                    |

use bg_core::{FarmerId, PlantId};
use bg_economics::{annual_revenue, capital_cost, power_kw, size_class, PlantType, MAX_SIZE, MIN_SIZE};

use crate::{AgentError, AgentResult};

/// A plant owned by one farmer and fed by zero or more contributors.
///
/// `plant_type` is always `size_class(capacity)`; both change only through
/// [`Plant::upgrade`].
#[derive(Clone, Debug)]
pub struct Plant {
    id:           PlantId,
    capacity:     f64,
    owner:        FarmerId,
    contributors: Vec<FarmerId>,
    plant_type:   PlantType,
    num_upgrades: u32,
}

impl Plant {
    pub fn new(
        id:           PlantId,
        owner:        FarmerId,
        capacity:     f64,
        contributors: Vec<FarmerId>,
    ) -> AgentResult<Self> {
        check_capacity(capacity)?;
        Ok(Self {
            id,
            capacity,
            owner,
            contributors,
            plant_type: size_class(capacity),
            num_upgrades: 0,
        })
    }

    pub fn id(&self) -> PlantId {
        self.id
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn owner(&self) -> FarmerId {
        self.owner
    }

    /// Contributors in enrolment order.  Never contains the owner.
    pub fn contributors(&self) -> &[FarmerId] {
        &self.contributors
    }

    pub fn plant_type(&self) -> PlantType {
        self.plant_type
    }

    pub fn num_upgrades(&self) -> u32 {
        self.num_upgrades
    }

    pub fn power_kw(&self) -> f64 {
        power_kw(self.capacity)
    }

    pub fn capital_cost(&self) -> f64 {
        capital_cost(self.capacity)
    }

    /// `true` iff adding `additional` LSU moves the plant into a strictly
    /// larger size class.
    pub fn can_upgrade(&self, additional: f64) -> bool {
        size_class(self.capacity + additional) > self.plant_type
    }

    /// Grow by `additional` LSU and enrol `new_contributors`.
    ///
    /// Fails without mutating if the class would not grow or the new
    /// capacity would exceed `MAX_SIZE`.
    pub fn upgrade(&mut self, additional: f64, new_contributors: &[FarmerId]) -> AgentResult<()> {
        if !self.can_upgrade(additional) {
            return Err(AgentError::CannotUpgrade {
                plant: self.id,
                capacity: self.capacity,
                additional,
            });
        }
        let grown = self.capacity + additional;
        check_capacity(grown)?;

        self.capacity = grown;
        self.plant_type = size_class(grown);
        self.contributors.extend_from_slice(new_contributors);
        self.num_upgrades += 1;
        Ok(())
    }

    /// One year of tariff income at the current capacity, floored at zero.
    pub fn annual_payout(&self, tariff_shift: f64) -> f64 {
        annual_revenue(self.capacity, tariff_shift).max(0.0)
    }
}

fn check_capacity(capacity: f64) -> AgentResult<()> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&capacity) {
        return Err(AgentError::CapacityOutOfRange { capacity, min: MIN_SIZE, max: MAX_SIZE });
    }
    Ok(())
}
