//! Kuramoto simulation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FREQUENCY_DISTRIBUTION, DEFAULT_OSCILLATORS, DEFAULT_PHASE_DISTRIBUTION,
    DEFAULT_RUNS, DEFAULT_RUN_COUPLING, DEFAULT_RUN_FREQUENCY_MEAN, DEFAULT_RUN_FREQUENCY_STD,
    DEFAULT_RUN_TIME_STEP, DEFAULT_RUN_TOTAL_TIME, DEFAULT_SEED, DEFAULT_SWEEP_START,
    DEFAULT_SWEEP_STEP, DEFAULT_SWEEP_STOP, DEFAULT_TIME_SERIES_COUPLINGS, DEFAULT_TIME_STEP,
    DEFAULT_TOTAL_TIME,
};

/// Configuration for the oscillator ensemble, the integrator, and the
/// experiment sweeps.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KuramotoConfig {
    /// Run the Kuramoto pipeline. Default: true.
    pub enabled: Option<bool>,
    /// Number of oscillators N. Default: 2000.
    pub oscillators: Option<usize>,
    /// Simulated time T for the sweeps. Default: 100.
    pub total_time: Option<f64>,
    /// Euler step dt for the sweeps. Default: 0.01.
    pub time_step: Option<f64>,
    /// `normal` or `uniform`. Default: normal.
    pub frequency_distribution: Option<String>,
    /// Only `uniform` is supported.
    pub phase_distribution: Option<String>,
    /// Base RNG seed. Default: 42.
    pub seed: Option<u64>,
    /// Coupling sweep start (inclusive). Default: 0.
    pub sweep_start: Option<f64>,
    /// Coupling sweep stop (exclusive). Default: 5.
    pub sweep_stop: Option<f64>,
    /// Coupling sweep step. Default: 0.2.
    pub sweep_step: Option<f64>,
    /// Couplings plotted as full time series. Default: [1, 2, 3, 4, 5].
    #[serde(default)]
    pub time_series_couplings: Vec<f64>,
    /// Runs per multi-run experiment. Default: 10.
    pub runs: Option<usize>,
    /// Simulated time for multi-run experiments. Default: 50.
    pub run_total_time: Option<f64>,
    /// Euler step for multi-run experiments. Default: 0.1.
    pub run_time_step: Option<f64>,
    /// Coupling for multi-run experiments. Default: 3.
    pub run_coupling: Option<f64>,
    /// Mean of the fixed frequencies in the varying-phase experiment. Default: 0.
    pub run_frequency_mean: Option<f64>,
    /// Std of the fixed frequencies in the varying-phase experiment. Default: 0.5.
    pub run_frequency_std: Option<f64>,
}

impl KuramotoConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_oscillators(&self) -> usize {
        self.oscillators.unwrap_or(DEFAULT_OSCILLATORS)
    }

    pub fn effective_total_time(&self) -> f64 {
        self.total_time.unwrap_or(DEFAULT_TOTAL_TIME)
    }

    pub fn effective_time_step(&self) -> f64 {
        self.time_step.unwrap_or(DEFAULT_TIME_STEP)
    }

    pub fn effective_frequency_distribution(&self) -> &str {
        self.frequency_distribution
            .as_deref()
            .unwrap_or(DEFAULT_FREQUENCY_DISTRIBUTION)
    }

    pub fn effective_phase_distribution(&self) -> &str {
        self.phase_distribution
            .as_deref()
            .unwrap_or(DEFAULT_PHASE_DISTRIBUTION)
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Returns (start, stop, step) of the coupling sweep.
    pub fn effective_sweep(&self) -> (f64, f64, f64) {
        (
            self.sweep_start.unwrap_or(DEFAULT_SWEEP_START),
            self.sweep_stop.unwrap_or(DEFAULT_SWEEP_STOP),
            self.sweep_step.unwrap_or(DEFAULT_SWEEP_STEP),
        )
    }

    pub fn effective_time_series_couplings(&self) -> Vec<f64> {
        if self.time_series_couplings.is_empty() {
            DEFAULT_TIME_SERIES_COUPLINGS.to_vec()
        } else {
            self.time_series_couplings.clone()
        }
    }

    pub fn effective_runs(&self) -> usize {
        self.runs.unwrap_or(DEFAULT_RUNS)
    }

    pub fn effective_run_total_time(&self) -> f64 {
        self.run_total_time.unwrap_or(DEFAULT_RUN_TOTAL_TIME)
    }

    pub fn effective_run_time_step(&self) -> f64 {
        self.run_time_step.unwrap_or(DEFAULT_RUN_TIME_STEP)
    }

    pub fn effective_run_coupling(&self) -> f64 {
        self.run_coupling.unwrap_or(DEFAULT_RUN_COUPLING)
    }

    pub fn effective_run_frequency_mean(&self) -> f64 {
        self.run_frequency_mean.unwrap_or(DEFAULT_RUN_FREQUENCY_MEAN)
    }

    pub fn effective_run_frequency_std(&self) -> f64 {
        self.run_frequency_std.unwrap_or(DEFAULT_RUN_FREQUENCY_STD)
    }

    pub(crate) fn merge_from(&mut self, other: &KuramotoConfig) {
        if other.enabled.is_some() {
            self.enabled = other.enabled;
        }
        if other.oscillators.is_some() {
            self.oscillators = other.oscillators;
        }
        if other.total_time.is_some() {
            self.total_time = other.total_time;
        }
        if other.time_step.is_some() {
            self.time_step = other.time_step;
        }
        if other.frequency_distribution.is_some() {
            self.frequency_distribution = other.frequency_distribution.clone();
        }
        if other.phase_distribution.is_some() {
            self.phase_distribution = other.phase_distribution.clone();
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        if other.sweep_start.is_some() {
            self.sweep_start = other.sweep_start;
        }
        if other.sweep_stop.is_some() {
            self.sweep_stop = other.sweep_stop;
        }
        if other.sweep_step.is_some() {
            self.sweep_step = other.sweep_step;
        }
        if !other.time_series_couplings.is_empty() {
            self.time_series_couplings = other.time_series_couplings.clone();
        }
        if other.runs.is_some() {
            self.runs = other.runs;
        }
        if other.run_total_time.is_some() {
            self.run_total_time = other.run_total_time;
        }
        if other.run_time_step.is_some() {
            self.run_time_step = other.run_time_step;
        }
        if other.run_coupling.is_some() {
            self.run_coupling = other.run_coupling;
        }
        if other.run_frequency_mean.is_some() {
            self.run_frequency_mean = other.run_frequency_mean;
        }
        if other.run_frequency_std.is_some() {
            self.run_frequency_std = other.run_frequency_std;
        }
    }
}
