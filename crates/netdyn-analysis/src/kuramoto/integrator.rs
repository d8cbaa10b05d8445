//! Fixed-step explicit Euler integration of the mean-field Kuramoto model.
//!
//! Each step uses the current coherence r and the arithmetic mean of the raw
//! phases in place of the pairwise coupling sum:
//!
//!   θᵢ ← θᵢ + dt · (ωᵢ + K · r · sin(θ̄ − θᵢ))
//!
//! θ̄ is not the circular mean and phases are never wrapped, so this is an
//! approximation of the full model.

use netdyn_core::constants::MAX_TIME_STEPS;
use netdyn_core::errors::SimulationError;
use serde::{Deserialize, Serialize};

/// Coupling strength and time grid of one integration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationParams {
    pub coupling: f64,
    pub total_time: f64,
    pub dt: f64,
}

impl IntegrationParams {
    pub fn new(coupling: f64, total_time: f64, dt: f64) -> Self {
        Self {
            coupling,
            total_time,
            dt,
        }
    }

    /// Same time grid, different coupling.
    pub fn with_coupling(&self, coupling: f64) -> Self {
        Self { coupling, ..*self }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimulationError::InvalidTimeGrid {
                message: format!("dt must be positive and finite, got {}", self.dt),
            });
        }
        if !(self.total_time.is_finite() && self.total_time >= 0.0) {
            return Err(SimulationError::InvalidTimeGrid {
                message: format!(
                    "total time must be non-negative and finite, got {}",
                    self.total_time
                ),
            });
        }
        if self.total_time / self.dt > MAX_TIME_STEPS as f64 {
            return Err(SimulationError::InvalidTimeGrid {
                message: format!(
                    "T / dt = {} / {} exceeds {MAX_TIME_STEPS} steps",
                    self.total_time, self.dt
                ),
            });
        }
        if !self.coupling.is_finite() {
            return Err(SimulationError::InvalidArgument {
                parameter: "coupling".to_string(),
                message: format!("must be finite, got {}", self.coupling),
            });
        }
        Ok(())
    }

    pub fn step_count(&self) -> usize {
        step_count(self.total_time, self.dt)
    }
}

/// Number of points in [0, T) spaced by dt: ceil(T / dt), 0 for an invalid
/// grid or one longer than `MAX_TIME_STEPS`.
pub fn step_count(total_time: f64, dt: f64) -> usize {
    if dt.is_nan() || dt <= 0.0 || !total_time.is_finite() || total_time <= 0.0 {
        return 0;
    }
    let steps = (total_time / dt).ceil();
    if steps > MAX_TIME_STEPS as f64 {
        return 0;
    }
    steps as usize
}

/// Times t_k = k · dt for each step.
pub fn time_axis(total_time: f64, dt: f64) -> Vec<f64> {
    (0..step_count(total_time, dt)).map(|k| k as f64 * dt).collect()
}

/// Integrate from `initial_phases` and return the coherence recorded at the
/// start of every step. The caller's phases are copied, never mutated.
pub fn evolve_system(
    frequencies: &[f64],
    initial_phases: &[f64],
    params: &IntegrationParams,
) -> Result<Vec<f64>, SimulationError> {
    if frequencies.len() != initial_phases.len() {
        return Err(SimulationError::LengthMismatch {
            frequencies: frequencies.len(),
            phases: initial_phases.len(),
        });
    }
    if frequencies.is_empty() {
        return Err(SimulationError::InvalidArgument {
            parameter: "oscillators".to_string(),
            message: "at least one oscillator is required".to_string(),
        });
    }
    params.validate()?;
    if frequencies
        .iter()
        .chain(initial_phases)
        .any(|v| !v.is_finite())
    {
        return Err(SimulationError::InvalidArgument {
            parameter: "ensemble".to_string(),
            message: "frequencies and phases must be finite".to_string(),
        });
    }

    let steps = params.step_count();
    let n = frequencies.len() as f64;
    let (k, dt) = (params.coupling, params.dt);
    let mut theta = initial_phases.to_vec();
    let mut r_values = Vec::with_capacity(steps);

    for _ in 0..steps {
        let (mut sum_cos, mut sum_sin, mut sum_theta) = (0.0, 0.0, 0.0);
        for &t in &theta {
            sum_cos += t.cos();
            sum_sin += t.sin();
            sum_theta += t;
        }
        let (mean_cos, mean_sin) = (sum_cos / n, sum_sin / n);
        let r = (mean_cos * mean_cos + mean_sin * mean_sin).sqrt().min(1.0);
        let mean_phase = sum_theta / n;
        r_values.push(r);

        for (t, &omega) in theta.iter_mut().zip(frequencies) {
            *t += dt * (omega + k * r * (mean_phase - *t).sin());
        }
    }

    Ok(r_values)
}
