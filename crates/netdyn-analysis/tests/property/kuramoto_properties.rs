use std::f64::consts::TAU;

use netdyn_analysis::kuramoto::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn coherence_in_unit_interval(phases in prop::collection::vec(-100.0f64..100.0, 0..200)) {
        let r = coherence(&phases);
        prop_assert!((0.0..=1.0).contains(&r), "r = {}", r);
    }

    #[test]
    fn coherence_invariant_under_rotation(
        phases in prop::collection::vec(0.0f64..TAU, 1..100),
        shift in -10.0f64..10.0,
    ) {
        let rotated: Vec<f64> = phases.iter().map(|p| p + shift).collect();
        prop_assert!((coherence(&phases) - coherence(&rotated)).abs() < 1e-9);
    }

    #[test]
    fn evolution_length_and_bounds(
        omega in prop::collection::vec(-3.0f64..3.0, 1..40),
        k in 0.0f64..10.0,
        steps in 1usize..60,
    ) {
        let theta0: Vec<f64> = (0..omega.len()).map(|i| i as f64 * 0.37).collect();
        // dt = 0.5 keeps T / dt exact.
        let params = IntegrationParams::new(k, steps as f64 * 0.5, 0.5);
        let r = evolve_system(&omega, &theta0, &params).unwrap();
        prop_assert_eq!(r.len(), steps);
        prop_assert!(r.iter().all(|&v| (0.0..=1.0).contains(&v)));
        prop_assert!((r[0] - coherence(&theta0)).abs() < 1e-12);
    }

    #[test]
    fn coupling_range_half_open(quarters in -20i32..20, len in 0usize..50) {
        let step = 0.25;
        let start = quarters as f64 * step;
        let stop = start + len as f64 * step;
        let ks = coupling_range(start, stop, step).unwrap();
        prop_assert_eq!(ks.len(), len);
        prop_assert!(ks.iter().all(|&k| k >= start && k < stop));
        prop_assert!(ks.windows(2).all(|w| w[0] < w[1]));
    }
}
