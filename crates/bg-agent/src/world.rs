//! The shared mutable world: farmer and plant tables plus their lattices.
//!
//! Farmers sit on `farmer_grid`; plants sit on a separate `plant_grid` at
//! their owner's cell, so siting a plant never collides with the owner and
//! neighbour queries over farmers never see plants.
//!
//! Every compound mutation (founding, upgrading) checks its preconditions
//! before writing anything, so a returned error leaves the world unchanged.

use bg_core::{BgError, Cell, FarmerId, PlantId, Tick};
use bg_spatial::Lattice;

use crate::{AdoptionState, AgentError, AgentResult, Farmer, Plant};

/// What happens to a contributor's lattice position when it joins a plant.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContributorOccupancy {
    /// Take the contributor off the farmer lattice.  Its cell becomes empty.
    #[default]
    Remove,
    /// Leave the contributor in place.  It stays visible to neighbours but
    /// can never be pooled again.
    Retain,
}

/// Farmers, plants, and the two lattices that locate them.
pub struct World {
    farmers: Vec<Farmer>,
    homes:   Vec<Cell>,
    plants:  Vec<Plant>,

    /// One farmer per cell.  Contributors may be absent (see
    /// [`ContributorOccupancy`]).
    pub farmer_grid: Lattice<FarmerId>,

    /// One plant per cell, at the owner's home.
    pub plant_grid: Lattice<PlantId>,
}

impl World {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            farmers: Vec::new(),
            homes: Vec::new(),
            plants: Vec::new(),
            farmer_grid: Lattice::new(width, height),
            plant_grid: Lattice::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.farmer_grid.width()
    }

    pub fn height(&self) -> u32 {
        self.farmer_grid.height()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn farmer_count(&self) -> usize {
        self.farmers.len()
    }

    pub fn plant_count(&self) -> usize {
        self.plants.len()
    }

    pub fn farmer(&self, id: FarmerId) -> AgentResult<&Farmer> {
        self.farmers
            .get(id.index())
            .ok_or(AgentError::Core(BgError::FarmerNotFound(id)))
    }

    pub fn farmer_mut(&mut self, id: FarmerId) -> AgentResult<&mut Farmer> {
        self.farmers
            .get_mut(id.index())
            .ok_or(AgentError::Core(BgError::FarmerNotFound(id)))
    }

    pub fn plant(&self, id: PlantId) -> AgentResult<&Plant> {
        self.plants
            .get(id.index())
            .ok_or(AgentError::Core(BgError::PlantNotFound(id)))
    }

    /// The cell a farmer was placed on, even after it left the lattice.
    pub fn home_of(&self, id: FarmerId) -> AgentResult<Cell> {
        self.homes
            .get(id.index())
            .copied()
            .ok_or(AgentError::Core(BgError::FarmerNotFound(id)))
    }

    pub fn farmers(&self) -> impl Iterator<Item = (FarmerId, &Farmer)> + '_ {
        self.farmers
            .iter()
            .enumerate()
            .map(|(i, f)| (FarmerId(i as u32), f))
    }

    pub fn plants(&self) -> impl Iterator<Item = &Plant> + '_ {
        self.plants.iter()
    }

    pub fn farmer_ids(&self) -> impl Iterator<Item = FarmerId> + '_ {
        (0..self.farmers.len() as u32).map(FarmerId)
    }

    pub fn plant_ids(&self) -> impl Iterator<Item = PlantId> + '_ {
        (0..self.plants.len() as u32).map(PlantId)
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Register `farmer` and place it on `cell`.
    pub fn add_farmer(&mut self, farmer: Farmer, cell: Cell) -> AgentResult<FarmerId> {
        let id = FarmerId(self.farmers.len() as u32);
        self.farmer_grid.place(id, cell)?;
        self.farmers.push(farmer);
        self.homes.push(cell);
        Ok(id)
    }

    // ── Adoption ──────────────────────────────────────────────────────────

    /// Build a plant of `capacity` LSU owned by `owner`, fed by
    /// `contributors`, and site it at the owner's home.
    ///
    /// Owner and every contributor must be prospects; each gets
    /// `time_of_adoption = now`.
    pub fn found_plant(
        &mut self,
        owner:        FarmerId,
        capacity:     f64,
        contributors: Vec<FarmerId>,
        now:          Tick,
        occupancy:    ContributorOccupancy,
    ) -> AgentResult<PlantId> {
        self.require_prospect(owner)?;
        self.require_prospects(&contributors)?;
        if contributors.contains(&owner) {
            return Err(AgentError::DuplicateEnrolment(owner));
        }

        let id = PlantId(self.plants.len() as u32);
        let cell = self.home_of(owner)?;
        let plant = Plant::new(id, owner, capacity, contributors.clone())?;
        self.plant_grid.place(id, cell)?;
        self.plants.push(plant);

        self.farmer_mut(owner)?.become_owner(owner, id, now)?;
        self.enrol(&contributors, now, occupancy)?;
        Ok(id)
    }

    /// Grow `plant` by `additional` LSU and enrol `contributors`.
    pub fn upgrade_plant(
        &mut self,
        plant:        PlantId,
        additional:   f64,
        contributors: &[FarmerId],
        now:          Tick,
        occupancy:    ContributorOccupancy,
    ) -> AgentResult<()> {
        self.require_prospects(contributors)?;
        self.plants
            .get_mut(plant.index())
            .ok_or(AgentError::Core(BgError::PlantNotFound(plant)))?
            .upgrade(additional, contributors)?;
        self.enrol(contributors, now, occupancy)
    }

    /// Credit one year of tariff income to the plant's owner.  Returns the
    /// amount credited.
    pub fn pay_out(&mut self, plant: PlantId, tariff_shift: f64) -> AgentResult<f64> {
        let plant = self.plant(plant)?;
        let (owner, amount) = (plant.owner(), plant.annual_payout(tariff_shift));
        self.farmer_mut(owner)?.credit(amount);
        Ok(amount)
    }

    fn enrol(
        &mut self,
        contributors: &[FarmerId],
        now:          Tick,
        occupancy:    ContributorOccupancy,
    ) -> AgentResult<()> {
        for &id in contributors {
            self.farmer_mut(id)?.become_contributor(id, now)?;
            if occupancy == ContributorOccupancy::Remove {
                self.farmer_grid.remove(id)?;
            }
        }
        Ok(())
    }

    fn require_prospect(&self, id: FarmerId) -> AgentResult<()> {
        let farmer = self.farmer(id)?;
        match (farmer.state(), farmer.time_of_adoption()) {
            (AdoptionState::Prospect, None) => Ok(()),
            (_, Some(at)) => Err(AgentError::AlreadyAdopted { farmer: id, at }),
            (state, None) => Err(AgentError::InconsistentState { farmer: id, state }),
        }
    }

    fn require_prospects(&self, ids: &[FarmerId]) -> AgentResult<()> {
        for (i, &id) in ids.iter().enumerate() {
            self.require_prospect(id)?;
            if ids[..i].contains(&id) {
                return Err(AgentError::DuplicateEnrolment(id));
            }
        }
        Ok(())
    }
}
