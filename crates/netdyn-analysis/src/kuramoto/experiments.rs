//! Experiment drivers: coupling sweeps and repeated randomized runs.
//!
//! Runs are independent and execute on the rayon pool. Every run that needs
//! randomness gets its own `ChaCha8Rng` seeded from `seed + run + 1`, so
//! results do not depend on thread scheduling.

use netdyn_core::constants::MAX_SWEEP_POINTS;
use netdyn_core::errors::SimulationError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::init::{Ensemble, FrequencyDistribution, PhaseDistribution};
use super::integrator::{evolve_system, IntegrationParams};

/// One coherence time series and what produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceSeries {
    /// Legend label, e.g. `K=2` or `Run 3`.
    pub label: String,
    pub coupling: f64,
    pub values: Vec<f64>,
}

impl CoherenceSeries {
    pub fn final_value(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// Shared settings of the repeated-run experiments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiRunParams {
    pub runs: usize,
    pub integration: IntegrationParams,
    /// Base seed; run i draws from `seed + i + 1`.
    pub seed: u64,
}

/// start, start + step, ... while < stop.
pub fn coupling_range(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, SimulationError> {
    if !(step.is_finite() && step > 0.0) {
        return Err(SimulationError::InvalidArgument {
            parameter: "sweep_step".to_string(),
            message: format!("must be positive and finite, got {step}"),
        });
    }
    if !(start.is_finite() && stop.is_finite()) {
        return Err(SimulationError::InvalidArgument {
            parameter: "sweep range".to_string(),
            message: format!("bounds must be finite, got [{start}, {stop})"),
        });
    }
    let count = ((stop - start) / step).ceil().max(0.0);
    if count > MAX_SWEEP_POINTS as f64 {
        return Err(SimulationError::InvalidArgument {
            parameter: "sweep_step".to_string(),
            message: format!(
                "[{start}, {stop}) with step {step} exceeds {MAX_SWEEP_POINTS} couplings"
            ),
        });
    }
    let count = count as usize;
    Ok((0..count).map(|i| start + i as f64 * step).collect())
}

/// Final coherence r(T) for each coupling, all runs from the same ensemble.
pub fn sweep_coupling(
    ensemble: &Ensemble,
    couplings: &[f64],
    total_time: f64,
    dt: f64,
) -> Result<Vec<f64>, SimulationError> {
    let base = IntegrationParams::new(0.0, total_time, dt);
    base.validate()?;
    if base.step_count() == 0 {
        return Err(SimulationError::InvalidTimeGrid {
            message: format!("no steps in [0, {total_time}) with dt = {dt}"),
        });
    }

    let finals = couplings
        .par_iter()
        .map(|&k| -> Result<f64, SimulationError> {
            let series = evolve_system(ensemble.frequencies(), ensemble.phases(), &base.with_coupling(k))?;
            let last = series.last().copied().unwrap_or(0.0);
            debug!(coupling = k, coherence = last, "sweep point");
            Ok(last)
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(points = finals.len(), "coupling sweep finished");
    Ok(finals)
}

/// Full coherence series for each coupling, all from the same ensemble.
pub fn time_series_for_couplings(
    ensemble: &Ensemble,
    couplings: &[f64],
    total_time: f64,
    dt: f64,
) -> Result<Vec<CoherenceSeries>, SimulationError> {
    let base = IntegrationParams::new(0.0, total_time, dt);
    couplings
        .par_iter()
        .map(|&k| -> Result<CoherenceSeries, SimulationError> {
            let values = evolve_system(ensemble.frequencies(), ensemble.phases(), &base.with_coupling(k))?;
            Ok(CoherenceSeries {
                label: format!("K={k}"),
                coupling: k,
                values,
            })
        })
        .collect()
}

/// Frequencies drawn once from `frequencies` (seeded with `params.seed`),
/// fresh uniform phases for every run. Returns the shared frequencies and
/// one series per run.
pub fn fixed_frequency_runs(
    oscillators: usize,
    frequencies: &FrequencyDistribution,
    params: &MultiRunParams,
) -> Result<(Vec<f64>, Vec<CoherenceSeries>), SimulationError> {
    params.integration.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let omega = frequencies.sample(oscillators, &mut rng)?;

    let series = (0..params.runs)
        .into_par_iter()
        .map(|run| -> Result<CoherenceSeries, SimulationError> {
            let mut rng = run_rng(params.seed, run);
            let theta0 = PhaseDistribution::Uniform.sample(oscillators, &mut rng)?;
            let values = evolve_system(&omega, &theta0, &params.integration)?;
            Ok(run_series(run, params.integration.coupling, values))
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(runs = series.len(), oscillators, "fixed-frequency runs finished");
    Ok((omega, series))
}

/// Phases held at `fixed_phases`, fresh N(0, 1) frequencies for every run.
pub fn fixed_phase_runs(
    fixed_phases: &[f64],
    params: &MultiRunParams,
) -> Result<Vec<CoherenceSeries>, SimulationError> {
    params.integration.validate()?;
    let frequencies = FrequencyDistribution::default();

    let series = (0..params.runs)
        .into_par_iter()
        .map(|run| -> Result<CoherenceSeries, SimulationError> {
            let mut rng = run_rng(params.seed, run);
            let omega = frequencies.sample(fixed_phases.len(), &mut rng)?;
            let values = evolve_system(&omega, fixed_phases, &params.integration)?;
            Ok(run_series(run, params.integration.coupling, values))
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(runs = series.len(), oscillators = fixed_phases.len(), "fixed-phase runs finished");
    Ok(series)
}

fn run_rng(seed: u64, run: usize) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.wrapping_add(run as u64).wrapping_add(1))
}

fn run_series(run: usize, coupling: f64, values: Vec<f64>) -> CoherenceSeries {
    CoherenceSeries {
        label: format!("Run {}", run + 1),
        coupling,
        values,
    }
}
