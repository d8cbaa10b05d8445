//! Poisson goodness of fit via Pearson's chi-square test.
//!
//! Categories are the unique observed degrees. Expected counts come from the
//! Poisson pmf at the mean degree, rescaled to the observed total. A small
//! constant is added to every observed and expected count so empty tails do
//! not divide by zero; the resulting p-value is an approximation.

use netdyn_core::constants::CHI_SQUARE_EPSILON;
use netdyn_core::errors::FitError;
use netdyn_core::types::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF, Discrete, Poisson};
use tracing::info;

use super::check_degrees;
use crate::network::graph::Network;

/// Result of the Poisson chi-square test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoissonFit {
    /// Mean degree used as the Poisson rate.
    pub lambda: f64,
    pub chi_square: f64,
    pub p_value: f64,
    pub degrees_of_freedom: usize,
    /// Number of unique degree values.
    pub categories: usize,
}

/// Chi-square test of `degrees` against Poisson(mean degree).
pub fn fit_poisson(degrees: &[u64]) -> Result<PoissonFit, FitError> {
    check_degrees(degrees)?;

    let mut histogram: BTreeMap<u64, u64> = BTreeMap::new();
    for &d in degrees {
        *histogram.entry(d).or_default() += 1;
    }

    let n = degrees.len() as f64;
    let lambda = degrees.iter().map(|&d| d as f64).sum::<f64>() / n;
    let poisson = Poisson::new(lambda).map_err(|e| FitError::Distribution(e.to_string()))?;

    let observed: Vec<f64> = histogram.values().map(|&c| c as f64).collect();
    let mut expected: Vec<f64> = histogram.keys().map(|&k| poisson.pmf(k) * n).collect();

    let observed_total: f64 = observed.iter().sum();
    let expected_total: f64 = expected.iter().sum();
    if expected_total > 0.0 {
        let scale = observed_total / expected_total;
        expected.iter_mut().for_each(|e| *e *= scale);
    }

    let chi_square: f64 = observed
        .iter()
        .zip(&expected)
        .map(|(&o, &e)| {
            let (o, e) = (o + CHI_SQUARE_EPSILON, e + CHI_SQUARE_EPSILON);
            (o - e) * (o - e) / e
        })
        .sum();

    let categories = histogram.len();
    let degrees_of_freedom = categories - 1;
    let p_value = if degrees_of_freedom == 0 {
        1.0
    } else {
        ChiSquared::new(degrees_of_freedom as f64)
            .map_err(|e| FitError::Distribution(e.to_string()))?
            .sf(chi_square)
    };

    Ok(PoissonFit {
        lambda,
        chi_square,
        p_value,
        degrees_of_freedom,
        categories,
    })
}

/// Poisson goodness of fit of the graph's total degrees.
pub fn goodness_of_fit_poisson(network: &Network) -> Result<PoissonFit, FitError> {
    let fit = fit_poisson(&network.degree_sequence())?;
    info!(
        lambda = fit.lambda,
        chi_square = fit.chi_square,
        p_value = fit.p_value,
        "poisson goodness of fit"
    );
    Ok(fit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_category_has_unit_p_value() {
        let fit = fit_poisson(&[3, 3, 3, 3]).unwrap();
        assert_eq!(fit.categories, 1);
        assert_eq!(fit.degrees_of_freedom, 0);
        assert_eq!(fit.p_value, 1.0);
        assert!(fit.chi_square.abs() < 1e-9);
        assert_eq!(fit.lambda, 3.0);
    }

    #[test]
    fn test_expected_rescaled_to_observed_total() {
        // Poisson(2) mass at {1, 2, 3} is well short of 1; without rescaling the
        // statistic would be dominated by the missing mass.
        let fit = fit_poisson(&[1, 2, 2, 3]).unwrap();
        assert_eq!(fit.categories, 3);
        assert_eq!(fit.degrees_of_freedom, 2);
        assert!(fit.chi_square < 1.0, "chi2 = {}", fit.chi_square);
        assert!(fit.p_value > 0.5 && fit.p_value <= 1.0);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        assert!(matches!(
            fit_poisson(&[]),
            Err(FitError::DegenerateDegrees { .. })
        ));
        assert!(matches!(
            fit_poisson(&[0, 0, 0]),
            Err(FitError::DegenerateDegrees { .. })
        ));
    }

    #[test]
    fn test_heavy_tail_rejected() {
        let mut degrees = vec![1u64; 500];
        degrees.extend([2; 100]);
        degrees.extend([50, 80, 120, 200, 400]);
        let fit = fit_poisson(&degrees).unwrap();
        assert!(fit.p_value < 1e-6, "p = {}", fit.p_value);
    }
}
