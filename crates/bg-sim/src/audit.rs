//! Whole-world consistency check.
//!
//! | Rule                                                                  |
//! |-----------------------------------------------------------------------|
//! | A farmer has an adoption time iff it owns or contributes to a plant   |
//! | An owner's plant names it as owner; every plant's owner points back   |
//! | `MIN_SIZE ≤ capacity ≤ MAX_SIZE` and `plant_type` matches capacity    |
//! | Each farmer appears at most once across all owners and contributors   |
//! | Every contributor is enrolled; no owner is listed as a contributor    |

use bg_agent::{AdoptionState, World};
use bg_core::FarmerId;
use bg_economics::{size_class, MAX_SIZE, MIN_SIZE};

use crate::{SimError, SimResult};

/// Return the first broken rule, if any.
pub fn audit(world: &World) -> SimResult<()> {
    for (id, f) in world.farmers() {
        let adopted = f.has_biogas_plant() || f.contributes_to_biogas_plant();
        if adopted != f.time_of_adoption().is_some() {
            return Err(violation(format!(
                "{id} adopted={adopted} but time_of_adoption={:?}",
                f.time_of_adoption(),
            )));
        }
        if let Some(pid) = f.biogas_plant() {
            if world.plant(pid)?.owner() != id {
                return Err(violation(format!("{id} owns {pid} but the plant names another owner")));
            }
        }
    }

    let mut seen = vec![false; world.farmer_count()];
    let mut claim = |id: FarmerId| -> SimResult<()> {
        match seen.get_mut(id.index()) {
            Some(slot) if !*slot => {
                *slot = true;
                Ok(())
            }
            Some(_) => Err(violation(format!("{id} is enrolled in more than one plant"))),
            None => Err(violation(format!("{id} is not a known farmer"))),
        }
    };

    for p in world.plants() {
        let capacity = p.capacity();
        if !(MIN_SIZE..=MAX_SIZE).contains(&capacity) {
            return Err(violation(format!("{} has capacity {capacity}", p.id())));
        }
        if p.plant_type() != size_class(capacity) {
            return Err(violation(format!("{} is {} at {capacity} LSU", p.id(), p.plant_type())));
        }
        if world.farmer(p.owner())?.biogas_plant() != Some(p.id()) {
            return Err(violation(format!("{} owner {} does not point back", p.id(), p.owner())));
        }
        claim(p.owner())?;
        for &c in p.contributors() {
            if world.farmer(c)?.state() != AdoptionState::Contributor {
                return Err(violation(format!("{c} listed by {} is not a contributor", p.id())));
            }
            claim(c)?;
        }
    }

    for (id, f) in world.farmers() {
        if f.state() == AdoptionState::Contributor && !seen[id.index()] {
            return Err(violation(format!("{id} contributes but no plant lists it")));
        }
    }
    Ok(())
}

fn violation(msg: String) -> SimError {
    SimError::Invariant(msg)
}
