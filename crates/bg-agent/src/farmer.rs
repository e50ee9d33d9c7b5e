//! Per-farmer attributes and adoption state.

use bg_core::{FarmerId, PlantId, SimRng, Tick};

use crate::{AgentError, AgentResult};

/// Where a farmer stands in the adoption process.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AdoptionState {
    /// No plant, not contributing.  Still learning and deciding.
    Prospect,
    /// Pooled its farm into someone else's plant.  Takes no further action.
    Contributor,
    /// Founded a plant.  May still try to upgrade it.
    Owner,
}

impl AdoptionState {
    /// `true` for `Contributor` and `Owner`.
    #[inline]
    pub fn is_adopted(self) -> bool {
        !matches!(self, AdoptionState::Prospect)
    }
}

/// One farm on the lattice.
///
/// Attributes fixed at creation are private with getters; the two current
/// beliefs are written only through [`Farmer::set_beliefs`], which enforces
/// their bounds.
#[derive(Clone, Debug)]
pub struct Farmer {
    farm_size:                      f64,
    base_willingness_to_build:      f64,
    base_willingness_to_contribute: f64,
    max_willingness_to_build:       f64,

    willingness_to_build:      f64,
    willingness_to_contribute: f64,

    has_biogas_plant:            bool,
    contributes_to_biogas_plant: bool,
    biogas_plant:                Option<PlantId>,
    time_of_adoption:            Option<Tick>,
    money_received:              f64,
}

impl Farmer {
    /// A prospect with fixed attributes.  Current beliefs start at the base
    /// values (build belief capped by `max_willingness_to_build`).
    pub fn new(
        farm_size:                      f64,
        base_willingness_to_build:      f64,
        base_willingness_to_contribute: f64,
        max_willingness_to_build:       f64,
    ) -> Self {
        let max_willingness_to_build = max_willingness_to_build.clamp(0.0, 1.0);
        Self {
            farm_size,
            base_willingness_to_build,
            base_willingness_to_contribute,
            max_willingness_to_build,
            willingness_to_build: base_willingness_to_build.clamp(0.0, max_willingness_to_build),
            willingness_to_contribute: base_willingness_to_contribute.clamp(0.0, 1.0),
            has_biogas_plant: false,
            contributes_to_biogas_plant: false,
            biogas_plant: None,
            time_of_adoption: None,
            money_received: 0.0,
        }
    }

    /// Create a farmer, sampling its personal build ceiling as
    /// `min(1, base_build + U(0.1, 0.4))`.
    pub fn sample(
        farm_size:                      f64,
        base_willingness_to_build:      f64,
        base_willingness_to_contribute: f64,
        rng:                            &mut SimRng,
    ) -> Self {
        Self::sample_with_headroom(
            farm_size,
            base_willingness_to_build,
            base_willingness_to_contribute,
            (0.1, 0.4),
            rng,
        )
    }

    /// As [`Farmer::sample`] with a configurable ceiling headroom range.
    pub fn sample_with_headroom(
        farm_size:                      f64,
        base_willingness_to_build:      f64,
        base_willingness_to_contribute: f64,
        (lo, hi):                       (f64, f64),
        rng:                            &mut SimRng,
    ) -> Self {
        let headroom = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
        let ceiling = (base_willingness_to_build + headroom).min(1.0);
        Self::new(farm_size, base_willingness_to_build, base_willingness_to_contribute, ceiling)
    }

    // ── Attributes ────────────────────────────────────────────────────────

    pub fn farm_size(&self) -> f64 {
        self.farm_size
    }

    pub fn base_willingness_to_build(&self) -> f64 {
        self.base_willingness_to_build
    }

    pub fn base_willingness_to_contribute(&self) -> f64 {
        self.base_willingness_to_contribute
    }

    pub fn max_willingness_to_build(&self) -> f64 {
        self.max_willingness_to_build
    }

    pub fn willingness_to_build(&self) -> f64 {
        self.willingness_to_build
    }

    pub fn willingness_to_contribute(&self) -> f64 {
        self.willingness_to_contribute
    }

    pub fn has_biogas_plant(&self) -> bool {
        self.has_biogas_plant
    }

    pub fn contributes_to_biogas_plant(&self) -> bool {
        self.contributes_to_biogas_plant
    }

    /// The plant this farmer founded, if any.
    pub fn biogas_plant(&self) -> Option<PlantId> {
        self.biogas_plant
    }

    pub fn time_of_adoption(&self) -> Option<Tick> {
        self.time_of_adoption
    }

    pub fn money_received(&self) -> f64 {
        self.money_received
    }

    pub fn state(&self) -> AdoptionState {
        if self.has_biogas_plant {
            AdoptionState::Owner
        } else if self.contributes_to_biogas_plant {
            AdoptionState::Contributor
        } else {
            AdoptionState::Prospect
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Store new beliefs, clamped to `[0, max_willingness_to_build]` and
    /// `[0, 1]`.
    pub fn set_beliefs(&mut self, build: f64, contribute: f64) {
        self.willingness_to_build = build.clamp(0.0, self.max_willingness_to_build);
        self.willingness_to_contribute = contribute.clamp(0.0, 1.0);
    }

    /// Mark this farmer as the founder of `plant` at `now`.
    pub(crate) fn become_owner(&mut self, id: FarmerId, plant: PlantId, now: Tick) -> AgentResult<()> {
        self.record_adoption(id, now)?;
        self.has_biogas_plant = true;
        self.contributes_to_biogas_plant = true;
        self.biogas_plant = Some(plant);
        Ok(())
    }

    /// Mark this farmer as a contributor to someone else's plant at `now`.
    pub(crate) fn become_contributor(&mut self, id: FarmerId, now: Tick) -> AgentResult<()> {
        self.record_adoption(id, now)?;
        self.contributes_to_biogas_plant = true;
        Ok(())
    }

    /// Write-once adoption time.
    fn record_adoption(&mut self, id: FarmerId, now: Tick) -> AgentResult<()> {
        if let Some(at) = self.time_of_adoption {
            return Err(AgentError::AlreadyAdopted { farmer: id, at });
        }
        self.time_of_adoption = Some(now);
        Ok(())
    }

    /// Add tariff income.  Negative amounts are ignored.
    pub fn credit(&mut self, amount: f64) {
        self.money_received += amount.max(0.0);
    }
}
