//! Kuramoto simulation tests: initialization, integration, experiments.

use std::f64::consts::PI;

use netdyn_analysis::kuramoto::*;
use netdyn_core::errors::{NetdynErrorCode, SimulationError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn ensemble(n: usize, seed: u64) -> Ensemble {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    initialize_system_by_name(n, "normal", "uniform", &mut rng).unwrap()
}

#[test]
fn balanced_phases_stay_incoherent_without_frequencies() {
    let theta0 = [0.0, PI / 2.0, PI, 3.0 * PI / 2.0];
    let r = evolve_system(&[0.0; 4], &theta0, &IntegrationParams::new(5.0, 2.0, 0.1)).unwrap();
    assert_eq!(r.len(), 20);
    assert!(r.iter().all(|&v| v < 1e-9), "r = {r:?}");
}

#[test]
fn identical_oscillators_stay_locked() {
    let theta0 = [1.2; 10];
    let r = evolve_system(&[0.4; 10], &theta0, &IntegrationParams::new(2.0, 3.0, 0.05)).unwrap();
    assert!(r.iter().all(|&v| (v - 1.0).abs() < 1e-12));
}

#[test]
fn coherence_bounded_over_whole_run() {
    let e = ensemble(200, 8);
    for k in [0.0, 1.0, 5.0] {
        let r = evolve_system(e.frequencies(), e.phases(), &IntegrationParams::new(k, 10.0, 0.05)).unwrap();
        assert!(r.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}

#[test]
fn same_seed_same_trajectory() {
    let params = IntegrationParams::new(2.0, 5.0, 0.1);
    let a = ensemble(100, 3);
    let b = ensemble(100, 3);
    let ra = evolve_system(a.frequencies(), a.phases(), &params).unwrap();
    let rb = evolve_system(b.frequencies(), b.phases(), &params).unwrap();
    assert_eq!(ra, rb);

    let c = ensemble(100, 4);
    assert_ne!(a.phases(), c.phases());
}

#[test]
fn initial_coherence_of_random_phases_is_small() {
    let e = ensemble(2000, 12);
    // E[r] ~ sqrt(pi / 4N) for uniform phases.
    assert!(coherence(e.phases()) < 0.1);
}

#[test]
fn sweep_over_half_open_range() {
    let e = ensemble(30, 1);
    let ks = coupling_range(0.0, 2.0, 0.5).unwrap();
    assert_eq!(ks, vec![0.0, 0.5, 1.0, 1.5]);
    let finals = sweep_coupling(&e, &ks, 1.0, 0.1).unwrap();
    assert_eq!(finals.len(), ks.len());
    assert!(finals.iter().all(|&r| (0.0..=1.0).contains(&r)));
}

#[test]
fn empty_sweep_is_fine() {
    let e = ensemble(5, 1);
    assert!(sweep_coupling(&e, &[], 1.0, 0.1).unwrap().is_empty());
}

#[test]
fn experiments_are_reproducible() {
    let params = MultiRunParams {
        runs: 3,
        integration: IntegrationParams::new(2.0, 1.0, 0.1),
        seed: 99,
    };
    let (omega_a, runs_a) = fixed_frequency_runs(25, &FrequencyDistribution::default(), &params).unwrap();
    let (omega_b, runs_b) = fixed_frequency_runs(25, &FrequencyDistribution::default(), &params).unwrap();
    assert_eq!(omega_a, omega_b);
    assert_eq!(runs_a, runs_b);

    let e = ensemble(25, 99);
    assert_eq!(
        fixed_phase_runs(e.phases(), &params).unwrap(),
        fixed_phase_runs(e.phases(), &params).unwrap()
    );
}

#[test]
fn zero_runs_yield_no_series() {
    let params = MultiRunParams {
        runs: 0,
        integration: IntegrationParams::new(1.0, 1.0, 0.1),
        seed: 1,
    };
    let (omega, series) = fixed_frequency_runs(8, &FrequencyDistribution::default(), &params).unwrap();
    assert_eq!(omega.len(), 8);
    assert!(series.is_empty());
}

#[test]
fn invalid_inputs_carry_error_codes() {
    let err = evolve_system(&[0.0; 3], &[0.0; 2], &IntegrationParams::new(1.0, 1.0, 0.1)).unwrap_err();
    assert!(matches!(err, SimulationError::LengthMismatch { .. }));
    assert_eq!(err.error_code(), "SIMULATION_ERROR");

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let err = initialize_system_by_name(10, "lorentzian", "uniform", &mut rng).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_ARGUMENT");
}

#[test]
fn uniform_frequency_threshold_below_normal() {
    let normal = FrequencyDistribution::default().critical_coupling();
    let uniform: FrequencyDistribution = "uniform".parse().unwrap();
    assert!(uniform.critical_coupling() < normal);
}
