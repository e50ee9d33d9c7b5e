//! Unit tests for bg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentRef, FarmerId, PlantId};

    #[test]
    fn index_roundtrip() {
        let id = FarmerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(FarmerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(FarmerId(0) < FarmerId(1));
        assert!(PlantId(100) > PlantId(99));
    }

    #[test]
    fn display() {
        assert_eq!(FarmerId(7).to_string(), "FarmerId(7)");
        assert_eq!(AgentRef::Plant(PlantId(3)).to_string(), "PlantId(3)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn chebyshev_is_king_move_distance() {
        let c = Cell::new(5, 5);
        assert_eq!(c.chebyshev(c), 0);
        assert_eq!(c.chebyshev(Cell::new(6, 6)), 1);
        assert_eq!(c.chebyshev(Cell::new(3, 6)), 2);
        assert_eq!(c.chebyshev(Cell::new(5, 0)), 5);
    }

    #[test]
    fn linear_index_is_row_major() {
        assert_eq!(Cell::new(0, 0).linear_index(10), 0);
        assert_eq!(Cell::new(3, 0).linear_index(10), 3);
        assert_eq!(Cell::new(3, 2).linear_index(10), 23);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_orders_and_displays() {
        assert!(Tick(3) < Tick(10));
        assert_eq!(Tick(7).as_f64(), 7.0);
        assert_eq!(Tick(7).to_string(), "T7");
    }

    #[test]
    fn clock_advances_one_tick() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn sim_config_defaults_validate() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_tick(), Tick(80));
    }

    #[test]
    fn zero_width_rejected() {
        let cfg = SimConfig { width: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.1f64..=0.4);
            assert!((0.1..=0.4).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.0), "probabilities above 1 are clamped");
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(9);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod validate {
    use crate::{check_range, BgError};

    #[test]
    fn inside_and_outside() {
        assert!(check_range("p", 0.5, 0.0..=1.0).is_ok());
        let err = check_range("p", 1.5, 0.0..=1.0).unwrap_err();
        assert!(matches!(err, BgError::Config(ref m) if m.contains("p must be")));
    }

    #[test]
    fn nan_rejected() {
        assert!(check_range("p", f64::NAN, 0.0..=1.0).is_err());
    }
}
