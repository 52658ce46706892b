//! Unit tests for am-core primitives.

#[cfg(test)]
mod geo {
    use crate::Coordinate;

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(35.667, 138.569);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = Coordinate::new(35.0, 138.0);
        let b = Coordinate::new(36.0, 138.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(35.667, 138.569);
        let b = Coordinate::new(35.668170044075985, 138.57070443965304);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
        // Kofu station to the hazard point is roughly 200 m.
        assert!((a.distance_m(b) - 201.6).abs() < 1.0);
    }

    #[test]
    fn offset_north_round_trips() {
        let h = Coordinate::new(35.668170044075985, 138.57070443965304);
        for m in [1.0, 49.999, 50.001, 250.0] {
            let p = h.offset_north_m(m);
            assert!((h.distance_m(p) - m).abs() < 1e-6, "{m} m gave {}", h.distance_m(p));
        }
    }

    #[test]
    fn validity() {
        assert!(Coordinate::new(35.0, 138.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(Coordinate::new(35.667, 138.569).to_string(), "(35.667000, 138.569000)");
    }
}

#[cfg(test)]
mod ids {
    use crate::Generation;

    #[test]
    fn next_is_monotonic() {
        let g = Generation::ZERO;
        assert_eq!(g.next(), Generation(1));
        assert!(g.next().next() > g.next());
        assert_eq!(Generation(7).to_string(), "G7");
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{SimClock, Tick};

    #[test]
    fn tick_display() {
        assert_eq!(Tick(10).to_string(), "T10");
        assert_eq!(Tick::ZERO, Tick::default());
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(1_000);
        assert_eq!(clock.elapsed_secs_at(clock.current_tick), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_secs_at(clock.current_tick), 2.0);
        assert_eq!(clock.period(), Duration::from_secs(1));
    }

    #[test]
    fn rewind_returns_to_zero() {
        let mut clock = SimClock::new(250);
        for _ in 0..4 {
            clock.advance();
        }
        assert_eq!(clock.to_string(), "T4 (+1.0s)");
        clock.rewind();
        assert_eq!(clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn elapsed_with_huge_period_does_not_overflow() {
        let clock = SimClock::new(u64::MAX / 2);
        let secs = clock.elapsed_secs_at(Tick(3));
        assert!(secs.is_finite());
        assert!(secs > 2.7e16, "got {secs}");
    }
}

#[cfg(test)]
mod config {
    use crate::config::MAX_TICK_PERIOD_MS;
    use crate::{CoreError, Coordinate, DemoConfig};

    #[test]
    fn defaults_match_demo_constants() {
        let cfg = DemoConfig::default();
        assert_eq!(cfg.start, Coordinate::new(35.667, 138.569));
        assert_eq!(cfg.hazard_radius_m, 50.0);
        assert_eq!(cfg.tick_period_ms, 1_000);
        assert_eq!(cfg.alert_asset.to_str(), Some("bird.mp3"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_radius() {
        let cfg = DemoConfig { hazard_radius_m: 0.0, ..DemoConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_zero_period() {
        let cfg = DemoConfig { tick_period_ms: 0, ..DemoConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_period_longer_than_an_hour() {
        let cfg = DemoConfig { tick_period_ms: u64::MAX / 2, ..DemoConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));

        let cfg = DemoConfig { tick_period_ms: MAX_TICK_PERIOD_MS, ..DemoConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_coordinate() {
        let cfg = DemoConfig { end: Coordinate::new(0.0, 200.0), ..DemoConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: DemoConfig =
            serde_json::from_str(r#"{ "hazard_radius_m": 75.0, "tick_period_ms": 200 }"#).unwrap();
        assert_eq!(cfg.hazard_radius_m, 75.0);
        assert_eq!(cfg.tick_period_ms, 200);
        assert_eq!(cfg, DemoConfig { hazard_radius_m: 75.0, tick_period_ms: 200, ..DemoConfig::default() });
    }
}
