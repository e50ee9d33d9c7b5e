//! Unit tests for bg-agent.

#[cfg(test)]
mod helpers {
    use bg_core::Cell;

    use crate::{Farmer, World};

    /// A `w × h` world where every farmer has `farm_size` LSU and neutral
    /// beliefs.  Farmer at `(x, y)` has id `x * h + y`.
    pub fn uniform_world(w: u32, h: u32, farm_size: f64) -> World {
        let mut world = World::new(w, h);
        for x in 0..w {
            for y in 0..h {
                world
                    .add_farmer(Farmer::new(farm_size, 0.2, 0.3, 0.5), Cell::new(x, y))
                    .unwrap();
            }
        }
        world
    }
}

// ── Farmer ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod farmer {
    use bg_core::{SimRng, Tick};

    use crate::{AdoptionState, Farmer};

    #[test]
    fn new_farmer_is_a_prospect() {
        let f = Farmer::new(40.0, 0.2, 0.3, 0.5);
        assert_eq!(f.state(), AdoptionState::Prospect);
        assert!(!f.state().is_adopted());
        assert_eq!(f.time_of_adoption(), None);
        assert_eq!(f.biogas_plant(), None);
        assert_eq!(f.money_received(), 0.0);
        assert_eq!(f.willingness_to_build(), 0.2);
        assert_eq!(f.willingness_to_contribute(), 0.3);
    }

    #[test]
    fn initial_build_belief_respects_ceiling() {
        let f = Farmer::new(40.0, 0.8, 0.9, 0.6);
        assert_eq!(f.willingness_to_build(), 0.6);
    }

    #[test]
    fn beliefs_are_clamped() {
        let mut f = Farmer::new(40.0, 0.2, 0.3, 0.5);
        f.set_beliefs(0.9, 1.7);
        assert_eq!(f.willingness_to_build(), 0.5);
        assert_eq!(f.willingness_to_contribute(), 1.0);
        f.set_beliefs(-0.1, -3.0);
        assert_eq!(f.willingness_to_build(), 0.0);
        assert_eq!(f.willingness_to_contribute(), 0.0);
    }

    #[test]
    fn sampled_ceiling_is_above_base_and_capped() {
        let mut rng = SimRng::new(7);
        for _ in 0..200 {
            let f = Farmer::sample(10.0, 0.3, 0.4, &mut rng);
            assert!(f.max_willingness_to_build() >= 0.4 - 1e-12);
            assert!(f.max_willingness_to_build() <= 0.7 + 1e-12);
        }
        let f = Farmer::sample(10.0, 0.9, 0.9, &mut rng);
        assert_eq!(f.max_willingness_to_build(), 1.0);
    }

    #[test]
    fn credit_ignores_negative_amounts() {
        let mut f = Farmer::new(40.0, 0.2, 0.3, 0.5);
        f.credit(100.0);
        f.credit(-50.0);
        assert_eq!(f.money_received(), 100.0);
    }

    #[test]
    fn adoption_time_is_write_once() {
        use bg_core::FarmerId;
        use crate::AgentError;

        let mut f = Farmer::new(40.0, 0.2, 0.3, 0.5);
        f.become_contributor(FarmerId(0), Tick(3)).unwrap();
        assert_eq!(f.time_of_adoption(), Some(Tick(3)));
        assert_eq!(f.state(), AdoptionState::Contributor);

        let err = f.become_contributor(FarmerId(0), Tick(4)).unwrap_err();
        assert!(matches!(err, AgentError::AlreadyAdopted { at: Tick(3), .. }));
        assert_eq!(f.time_of_adoption(), Some(Tick(3)));
    }
}

// ── Plant ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod plant {
    use bg_core::{FarmerId, PlantId};
    use bg_economics::{annual_revenue, PlantType};

    use crate::{AgentError, Plant};

    fn plant(capacity: f64) -> Plant {
        Plant::new(PlantId(0), FarmerId(0), capacity, vec![FarmerId(1)]).unwrap()
    }

    #[test]
    fn capacity_bounds_enforced_at_creation() {
        for bad in [74.9, 850.1, 0.0, f64::NAN] {
            let err = Plant::new(PlantId(0), FarmerId(0), bad, vec![]).unwrap_err();
            assert!(matches!(err, AgentError::CapacityOutOfRange { .. }));
        }
        assert_eq!(plant(75.0).plant_type(), PlantType::Small);
        assert_eq!(plant(850.0).plant_type(), PlantType::Large);
    }

    #[test]
    fn can_upgrade_requires_class_change() {
        let p = plant(90.0);
        assert!(!p.can_upgrade(10.0));
        assert!(p.can_upgrade(10.5));
        assert!(p.can_upgrade(600.0));
        assert!(!plant(850.0).can_upgrade(0.0));
    }

    #[test]
    fn upgrade_grows_and_reclassifies() {
        let mut p = plant(90.0);
        p.upgrade(60.0, &[FarmerId(2), FarmerId(3)]).unwrap();
        assert_eq!(p.capacity(), 150.0);
        assert_eq!(p.plant_type(), PlantType::Medium);
        assert_eq!(p.num_upgrades(), 1);
        assert_eq!(p.contributors(), &[FarmerId(1), FarmerId(2), FarmerId(3)]);
    }

    #[test]
    fn rejected_upgrade_leaves_plant_unchanged() {
        let mut p = plant(150.0);
        let err = p.upgrade(10.0, &[FarmerId(2)]).unwrap_err();
        assert!(matches!(err, AgentError::CannotUpgrade { .. }));

        let err = p.upgrade(750.0, &[FarmerId(2)]).unwrap_err();
        assert!(matches!(err, AgentError::CapacityOutOfRange { .. }));

        assert_eq!(p.capacity(), 150.0);
        assert_eq!(p.num_upgrades(), 0);
        assert_eq!(p.contributors(), &[FarmerId(1)]);
    }

    #[test]
    fn payout_matches_revenue_and_floors_at_zero() {
        let p = plant(400.0);
        assert_eq!(p.annual_payout(0.0), annual_revenue(400.0, 0.0));
        assert!(p.annual_payout(0.0) > 0.0);
        assert_eq!(p.annual_payout(-1.0), 0.0);
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod world {
    use bg_core::{Cell, FarmerId, PlantId, Tick};

    use super::helpers::uniform_world;
    use crate::{AdoptionState, AgentError, ContributorOccupancy, Farmer, World};

    #[test]
    fn add_farmer_rejects_occupied_cell() {
        let mut world = World::new(2, 2);
        world.add_farmer(Farmer::new(10.0, 0.1, 0.1, 0.5), Cell::new(0, 0)).unwrap();
        let err = world
            .add_farmer(Farmer::new(10.0, 0.1, 0.1, 0.5), Cell::new(0, 0))
            .unwrap_err();
        assert!(matches!(err, AgentError::Spatial(_)));
        assert_eq!(world.farmer_count(), 1);
    }

    #[test]
    fn found_plant_removes_contributors() {
        let mut world = uniform_world(3, 3, 40.0);
        let owner = FarmerId(4); // (1, 1)
        let pool = vec![FarmerId(0), FarmerId(1)];
        let pid = world
            .found_plant(owner, 120.0, pool.clone(), Tick(5), ContributorOccupancy::Remove)
            .unwrap();

        assert_eq!(pid, PlantId(0));
        assert_eq!(world.plant_grid.position_of(pid), Some(Cell::new(1, 1)));

        let o = world.farmer(owner).unwrap();
        assert_eq!(o.state(), AdoptionState::Owner);
        assert_eq!(o.biogas_plant(), Some(pid));
        assert_eq!(o.time_of_adoption(), Some(Tick(5)));
        assert!(world.farmer_grid.contains(owner));

        for id in pool {
            let c = world.farmer(id).unwrap();
            assert_eq!(c.state(), AdoptionState::Contributor);
            assert_eq!(c.time_of_adoption(), Some(Tick(5)));
            assert!(!world.farmer_grid.contains(id));
            assert!(world.home_of(id).is_ok());
        }
        assert_eq!(world.farmer_grid.len(), 7);
    }

    #[test]
    fn found_plant_retains_contributors() {
        let mut world = uniform_world(3, 3, 40.0);
        world
            .found_plant(FarmerId(4), 120.0, vec![FarmerId(0), FarmerId(1)], Tick(1), ContributorOccupancy::Retain)
            .unwrap();
        assert_eq!(world.farmer_grid.len(), 9);
        assert!(world.farmer_grid.contains(FarmerId(0)));
        assert_eq!(world.farmer(FarmerId(0)).unwrap().state(), AdoptionState::Contributor);
    }

    #[test]
    fn enrolled_farmer_cannot_join_a_second_plant() {
        let mut world = uniform_world(3, 3, 40.0);
        world
            .found_plant(FarmerId(4), 120.0, vec![FarmerId(0), FarmerId(1)], Tick(1), ContributorOccupancy::Retain)
            .unwrap();

        let err = world
            .found_plant(FarmerId(8), 80.0, vec![FarmerId(1)], Tick(2), ContributorOccupancy::Retain)
            .unwrap_err();
        assert!(matches!(err, AgentError::AlreadyAdopted { at: Tick(1), .. }));

        // Nothing was written by the failed attempt.
        assert_eq!(world.plant_count(), 1);
        assert_eq!(world.farmer(FarmerId(8)).unwrap().state(), AdoptionState::Prospect);
    }

    #[test]
    fn owner_listed_as_contributor_is_rejected() {
        let mut world = uniform_world(3, 3, 40.0);
        let err = world
            .found_plant(FarmerId(4), 80.0, vec![FarmerId(4)], Tick(1), ContributorOccupancy::Remove)
            .unwrap_err();
        assert!(matches!(err, AgentError::DuplicateEnrolment(FarmerId(4))));
        assert_eq!(world.plant_count(), 0);
    }

    #[test]
    fn upgrade_enrols_new_contributors() {
        let mut world = uniform_world(3, 3, 40.0);
        let pid = world
            .found_plant(FarmerId(4), 80.0, vec![FarmerId(0)], Tick(1), ContributorOccupancy::Remove)
            .unwrap();
        world
            .upgrade_plant(pid, 80.0, &[FarmerId(2), FarmerId(6)], Tick(3), ContributorOccupancy::Remove)
            .unwrap();

        let plant = world.plant(pid).unwrap();
        assert_eq!(plant.capacity(), 160.0);
        assert_eq!(plant.num_upgrades(), 1);
        assert_eq!(world.farmer(FarmerId(6)).unwrap().time_of_adoption(), Some(Tick(3)));
        assert!(!world.farmer_grid.contains(FarmerId(2)));
    }

    #[test]
    fn pay_out_credits_owner() {
        let mut world = uniform_world(2, 2, 40.0);
        let pid = world
            .found_plant(FarmerId(0), 120.0, vec![FarmerId(1), FarmerId(2)], Tick(1), ContributorOccupancy::Remove)
            .unwrap();
        let paid = world.pay_out(pid, 0.0).unwrap();
        world.pay_out(pid, 0.0).unwrap();
        assert!(paid > 0.0);
        assert_eq!(world.farmer(FarmerId(0)).unwrap().money_received(), 2.0 * paid);
        assert_eq!(world.farmer(FarmerId(1)).unwrap().money_received(), 0.0);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let world = uniform_world(2, 2, 40.0);
        assert!(world.farmer(FarmerId(99)).is_err());
        assert!(world.plant(PlantId(0)).is_err());
    }
}

// ── Population ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod population {
    use bg_core::{Cell, FarmerId, SimRng};

    use crate::{AdoptionState, LsuDistribution, PopulationBuilder, PopulationParams};

    #[test]
    fn one_farmer_per_cell_column_major() {
        let mut rng = SimRng::new(1);
        let world = PopulationBuilder::new(4, 3).build(&mut rng).unwrap();
        assert_eq!(world.farmer_count(), 12);
        assert_eq!(world.farmer_grid.len(), 12);
        assert_eq!(world.home_of(FarmerId(0)).unwrap(), Cell::new(0, 0));
        assert_eq!(world.home_of(FarmerId(1)).unwrap(), Cell::new(0, 1));
        assert_eq!(world.home_of(FarmerId(3)).unwrap(), Cell::new(1, 0));
    }

    #[test]
    fn sampled_attributes_in_range() {
        let mut rng = SimRng::new(2);
        let world = PopulationBuilder::new(30, 30).build(&mut rng).unwrap();
        for (_, f) in world.farmers() {
            assert!((0.0..=150.0).contains(&f.farm_size()));
            assert!((0.0..=0.9).contains(&f.base_willingness_to_build()));
            assert!(f.base_willingness_to_contribute() >= f.base_willingness_to_build());
            assert!(f.base_willingness_to_contribute() <= 1.0);
            assert!(f.max_willingness_to_build() <= 1.0);
            assert!(f.willingness_to_build() <= f.max_willingness_to_build());
            assert_eq!(f.state(), AdoptionState::Prospect);
        }
    }

    #[test]
    fn same_seed_same_population() {
        let a = PopulationBuilder::new(8, 8).build(&mut SimRng::new(9)).unwrap();
        let b = PopulationBuilder::new(8, 8).build(&mut SimRng::new(9)).unwrap();
        let sizes = |w: &crate::World| w.farmers().map(|(_, f)| f.farm_size()).collect::<Vec<_>>();
        assert_eq!(sizes(&a), sizes(&b));
    }

    #[test]
    fn innovator_share_one_makes_everyone_an_innovator() {
        let params = PopulationParams { innovator_share: 1.0, ..Default::default() };
        let world = PopulationBuilder::new(10, 10)
            .params(params)
            .build(&mut SimRng::new(3))
            .unwrap();
        assert!(world.farmers().all(|(_, f)| f.base_willingness_to_build() >= 0.6));
    }

    #[test]
    fn negative_shift_floors_at_zero() {
        let params = PopulationParams { farm_capacity_shift: -1000.0, ..Default::default() };
        let world = PopulationBuilder::new(5, 5)
            .params(params)
            .build(&mut SimRng::new(4))
            .unwrap();
        assert!(world.farmers().all(|(_, f)| f.farm_size() == 0.0));
    }

    #[test]
    fn invalid_params_rejected() {
        let params = PopulationParams { innovator_share: 1.5, ..Default::default() };
        assert!(PopulationBuilder::new(2, 2).params(params).build(&mut SimRng::new(0)).is_err());

        let params = PopulationParams { contribute_bonus: (0.3, 0.1), ..Default::default() };
        assert!(PopulationBuilder::new(2, 2).params(params).build(&mut SimRng::new(0)).is_err());
    }

    #[test]
    fn lsu_sample_mean_near_analytic_mean() {
        let dist = LsuDistribution::new().unwrap();
        let mut rng = SimRng::new(11);
        let n = 20_000;
        let mean = (0..n).map(|_| dist.sample(&mut rng, 0.0)).sum::<f64>() / n as f64;
        assert!((mean - LsuDistribution::mean()).abs() < 2.0, "mean {mean}");
    }
}
