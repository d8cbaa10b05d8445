//! Oscillator ensemble initialization.

use std::f64::consts::{PI, TAU};
use std::str::FromStr;

use netdyn_core::errors::SimulationError;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Distribution of natural frequencies ω.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrequencyDistribution {
    Normal { mean: f64, std_dev: f64 },
    Uniform { low: f64, high: f64 },
}

impl Default for FrequencyDistribution {
    fn default() -> Self {
        Self::Normal {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl FromStr for FrequencyDistribution {
    type Err = SimulationError;

    /// `normal` is N(0, 1); `uniform` is U[−0.5, 0.5).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::default()),
            "uniform" => Ok(Self::Uniform {
                low: -0.5,
                high: 0.5,
            }),
            other => Err(SimulationError::InvalidArgument {
                parameter: "frequency_distribution".to_string(),
                message: format!("unsupported distribution '{other}', choose 'normal' or 'uniform'"),
            }),
        }
    }
}

impl FrequencyDistribution {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal { .. } => "normal",
            Self::Uniform { .. } => "uniform",
        }
    }

    /// Draw `n` frequencies.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, SimulationError> {
        match *self {
            Self::Normal { mean, std_dev } => {
                let dist = Normal::new(mean, std_dev).map_err(|e| SimulationError::InvalidArgument {
                    parameter: "std_dev".to_string(),
                    message: e.to_string(),
                })?;
                Ok(dist.sample_iter(rng).take(n).collect())
            }
            Self::Uniform { low, high } => {
                let dist = uniform(low, high, "frequency range")?;
                Ok(dist.sample_iter(rng).take(n).collect())
            }
        }
    }

    /// Mean-field critical coupling K_c = 2 / (π g(ω̄)), g the frequency
    /// density at its centre.
    pub fn critical_coupling(&self) -> f64 {
        match *self {
            Self::Normal { std_dev, .. } => 2.0 * std_dev * TAU.sqrt() / PI,
            Self::Uniform { low, high } => 2.0 * (high - low) / PI,
        }
    }
}

/// Distribution of initial phases θ₀.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseDistribution {
    /// U[0, 2π).
    #[default]
    Uniform,
}

impl FromStr for PhaseDistribution {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Self::Uniform),
            other => Err(SimulationError::InvalidArgument {
                parameter: "phase_distribution".to_string(),
                message: format!("unsupported distribution '{other}', only 'uniform' is implemented"),
            }),
        }
    }
}

impl PhaseDistribution {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, SimulationError> {
        match self {
            Self::Uniform => Ok(uniform(0.0, TAU, "phase range")?
                .sample_iter(rng)
                .take(n)
                .collect()),
        }
    }
}

/// Natural frequencies and phases of N oscillators. Both vectors always have
/// the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ensemble {
    frequencies: Vec<f64>,
    phases: Vec<f64>,
}

impl Ensemble {
    pub fn new(frequencies: Vec<f64>, phases: Vec<f64>) -> Result<Self, SimulationError> {
        if frequencies.len() != phases.len() {
            return Err(SimulationError::LengthMismatch {
                frequencies: frequencies.len(),
                phases: phases.len(),
            });
        }
        Ok(Self {
            frequencies,
            phases,
        })
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn phases(&self) -> &[f64] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.frequencies, self.phases)
    }
}

/// Sample N natural frequencies, then N initial phases, from `rng`.
pub fn initialize_system<R: Rng + ?Sized>(
    n: usize,
    frequencies: &FrequencyDistribution,
    phases: PhaseDistribution,
    rng: &mut R,
) -> Result<Ensemble, SimulationError> {
    if n == 0 {
        return Err(SimulationError::InvalidArgument {
            parameter: "oscillators".to_string(),
            message: "at least one oscillator is required".to_string(),
        });
    }
    let omega = frequencies.sample(n, rng)?;
    let theta0 = phases.sample(n, rng)?;
    debug!(
        n,
        frequencies = frequencies.name(),
        phases = phases.name(),
        "ensemble initialized"
    );
    Ensemble::new(omega, theta0)
}

/// `initialize_system` with distributions given by name.
pub fn initialize_system_by_name<R: Rng + ?Sized>(
    n: usize,
    frequency_distribution: &str,
    phase_distribution: &str,
    rng: &mut R,
) -> Result<Ensemble, SimulationError> {
    let frequencies: FrequencyDistribution = frequency_distribution.parse()?;
    let phases: PhaseDistribution = phase_distribution.parse()?;
    initialize_system(n, &frequencies, phases, rng)
}

fn uniform(low: f64, high: f64, what: &str) -> Result<Uniform<f64>, SimulationError> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(SimulationError::InvalidArgument {
            parameter: what.to_string(),
            message: format!("empty or non-finite interval [{low}, {high})"),
        });
    }
    Ok(Uniform::new(low, high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_initialize_lengths_and_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let ensemble =
            initialize_system(500, &FrequencyDistribution::default(), PhaseDistribution::Uniform, &mut rng)
                .unwrap();
        assert_eq!(ensemble.len(), 500);
        assert_eq!(ensemble.phases().len(), 500);
        assert!(ensemble.phases().iter().all(|&p| (0.0..TAU).contains(&p)));
    }

    #[test]
    fn test_uniform_frequencies_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let ensemble = initialize_system_by_name(300, "uniform", "uniform", &mut rng).unwrap();
        assert!(ensemble.frequencies().iter().all(|&w| (-0.5..0.5).contains(&w)));
    }

    #[test]
    fn test_unsupported_names() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = initialize_system_by_name(10, "cauchy", "uniform", &mut rng).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidArgument { .. }));
        let err = initialize_system_by_name(10, "normal", "normal", &mut rng).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidArgument { .. }));
    }

    #[test]
    fn test_zero_oscillators_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(initialize_system_by_name(0, "normal", "uniform", &mut rng).is_err());
    }

    #[test]
    fn test_same_seed_same_ensemble() {
        let a = initialize_system_by_name(64, "normal", "uniform", &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let b = initialize_system_by_name(64, "normal", "uniform", &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_critical_coupling() {
        let kc = FrequencyDistribution::default().critical_coupling();
        assert!((kc - 1.595_769).abs() < 1e-5, "kc = {kc}");
        let kc = FrequencyDistribution::Uniform { low: -0.5, high: 0.5 }.critical_coupling();
        assert!((kc - 2.0 / PI).abs() < 1e-12);
    }

    #[test]
    fn test_ensemble_length_mismatch() {
        let err = Ensemble::new(vec![0.0; 3], vec![0.0; 2]).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::LengthMismatch { frequencies: 3, phases: 2 }
        ));
    }

    #[test]
    fn test_invalid_normal_rejected() {
        let dist = FrequencyDistribution::Normal { mean: 0.0, std_dev: -1.0 };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(dist.sample(4, &mut rng).is_err());
    }
}
