//! Discrete power-law fit.
//!
//! For a candidate lower cutoff x_min the exponent uses the continuous
//! approximation to the discrete MLE,
//!
//!   α = 1 + n / Σ ln(x / (x_min − ½)),
//!
//! and goodness of fit is the Kolmogorov–Smirnov distance between the
//! empirical tail CDF and P(X ≤ x) = 1 − ζ(α, x + 1) / ζ(α, x_min).
//! Without a fixed cutoff every unique value except the largest is tried and
//! the one with the smallest distance wins.

use std::path::PathBuf;

use netdyn_core::errors::{FitError, PipelineError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::check_degrees;
use super::zeta::hurwitz_zeta;
use crate::network::graph::Network;
use crate::plot::{plot_power_law_pdf, PlotStyle};

/// Log-spaced bins per decade in the empirical PDF.
const BINS_PER_DECADE: f64 = 10.0;

/// Fitted discrete power law over the tail x ≥ x_min.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerLawFit {
    pub alpha: f64,
    pub xmin: u64,
    /// Standard error of alpha, (α − 1) / √n.
    pub sigma: f64,
    pub ks_distance: f64,
    /// Observations ≥ x_min.
    pub tail_size: usize,
    /// Nonzero observations considered.
    pub sample_size: usize,
}

impl PowerLawFit {
    /// p(x) = x^−α / ζ(α, x_min) for x ≥ x_min, 0 below.
    pub fn pdf(&self, x: u64) -> f64 {
        if x < self.xmin {
            return 0.0;
        }
        (x as f64).powf(-self.alpha) / hurwitz_zeta(self.alpha, self.xmin as f64)
    }

    /// P(X ≤ x).
    pub fn cdf(&self, x: u64) -> f64 {
        if x < self.xmin {
            return 0.0;
        }
        let norm = hurwitz_zeta(self.alpha, self.xmin as f64);
        1.0 - hurwitz_zeta(self.alpha, (x + 1) as f64) / norm
    }
}

/// How `goodness_of_fit_powerlaw` fits and what it renders.
#[derive(Debug, Clone, Default)]
pub struct PowerLawOptions {
    /// Fixed lower cutoff; scanned when `None`.
    pub xmin: Option<u64>,
    /// Where to write the PDF overlay; no plot when `None`.
    pub plot_path: Option<PathBuf>,
    pub style: PlotStyle,
}

/// Fit a discrete power law to `degrees`. Zero degrees are ignored.
pub fn fit_power_law(degrees: &[u64], xmin: Option<u64>) -> Result<PowerLawFit, FitError> {
    check_degrees(degrees)?;

    let mut data: Vec<u64> = degrees.iter().copied().filter(|&d| d > 0).collect();
    data.sort_unstable();
    let sample_size = data.len();

    if let Some(xmin) = xmin {
        if xmin == 0 {
            return Err(FitError::InvalidParameter {
                parameter: "xmin".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let start = data.partition_point(|&x| x < xmin);
        if start == data.len() {
            return Err(FitError::InvalidParameter {
                parameter: "xmin".to_string(),
                message: format!("no observations at or above {xmin}"),
            });
        }
        return Ok(fit_tail(&data[start..], xmin, sample_size));
    }

    let mut unique = data.clone();
    unique.dedup();
    let candidates = if unique.len() > 1 {
        &unique[..unique.len() - 1]
    } else {
        &unique[..]
    };

    let fits: Vec<PowerLawFit> = candidates
        .par_iter()
        .map(|&xmin| {
            let start = data.partition_point(|&x| x < xmin);
            fit_tail(&data[start..], xmin, sample_size)
        })
        .collect();
    debug!(candidates = fits.len(), "scanned power-law cutoffs");

    // Ties keep the smaller cutoff.
    fits.into_iter()
        .filter(|f| f.ks_distance.is_finite())
        .reduce(|best, f| {
            if f.ks_distance < best.ks_distance {
                f
            } else {
                best
            }
        })
        .ok_or_else(|| FitError::DegenerateDegrees {
            reason: "no cutoff produced a finite KS distance".to_string(),
        })
}

/// Fit α for a sorted tail whose smallest admissible value is `xmin`.
fn fit_tail(tail: &[u64], xmin: u64, sample_size: usize) -> PowerLawFit {
    let n = tail.len() as f64;
    let shift = xmin as f64 - 0.5;
    let log_sum: f64 = tail.iter().map(|&x| (x as f64 / shift).ln()).sum();
    let alpha = 1.0 + n / log_sum;
    PowerLawFit {
        alpha,
        xmin,
        sigma: (alpha - 1.0) / n.sqrt(),
        ks_distance: ks_distance(tail, alpha, xmin),
        tail_size: tail.len(),
        sample_size,
    }
}

/// Two-sided KS distance over a sorted tail, checked on both sides of every
/// step of the empirical CDF. NaN when ζ(α, x_min) underflows, which happens
/// for very short tails of large, nearly equal values.
fn ks_distance(tail: &[u64], alpha: f64, xmin: u64) -> f64 {
    let n = tail.len() as f64;
    let norm = hurwitz_zeta(alpha, xmin as f64);
    if !(norm.is_finite() && norm > 0.0) {
        return f64::NAN;
    }
    let mut distance: f64 = 0.0;
    let mut i = 0;
    while i < tail.len() {
        let x = tail[i];
        let below = i as f64 / n;
        let j = i + tail[i..].partition_point(|&v| v == x);
        let at_or_below = j as f64 / n;

        let fit_below = 1.0 - hurwitz_zeta(alpha, x as f64) / norm;
        let fit_at = 1.0 - hurwitz_zeta(alpha, (x + 1) as f64) / norm;
        distance = distance
            .max((below - fit_below).abs())
            .max((at_or_below - fit_at).abs());
        i = j;
    }
    distance
}

/// Empirical PDF of the tail with logarithmic binning: (geometric bin
/// centre, density) for each non-empty bin.
pub fn log_binned_pdf(degrees: &[u64], xmin: u64) -> Vec<(f64, f64)> {
    let xmin = xmin.max(1);
    let mut tail: Vec<u64> = degrees.iter().copied().filter(|&d| d >= xmin).collect();
    if tail.is_empty() {
        return Vec::new();
    }
    tail.sort_unstable();
    let xmax = tail[tail.len() - 1];

    let mut edges: Vec<u64> = Vec::new();
    let mut i = 0;
    loop {
        let edge = (xmin as f64 * 10f64.powf(i as f64 / BINS_PER_DECADE)).floor() as u64;
        if edges.last() != Some(&edge) {
            edges.push(edge);
        }
        if edge > xmax {
            break;
        }
        i += 1;
    }

    let n = tail.len() as f64;
    edges
        .windows(2)
        .filter_map(|w| {
            let (lo, hi) = (w[0], w[1]);
            let count = tail.partition_point(|&x| x < hi) - tail.partition_point(|&x| x < lo);
            if count == 0 {
                return None;
            }
            let centre = (lo as f64 * hi as f64).sqrt();
            Some((centre, count as f64 / (n * (hi - lo) as f64)))
        })
        .collect()
}

/// Fitted PDF evaluated at each unique tail value.
pub fn fitted_pdf_curve(fit: &PowerLawFit, degrees: &[u64]) -> Vec<(f64, f64)> {
    let mut xs: Vec<u64> = degrees.iter().copied().filter(|&d| d >= fit.xmin).collect();
    xs.sort_unstable();
    xs.dedup();
    xs.into_iter().map(|x| (x as f64, fit.pdf(x))).collect()
}

/// Power-law fit of the graph's total degrees, with the PDF overlay rendered
/// when `options.plot_path` is set.
pub fn goodness_of_fit_powerlaw(
    network: &Network,
    options: &PowerLawOptions,
) -> Result<PowerLawFit, PipelineError> {
    let degrees = network.degree_sequence();
    let fit = fit_power_law(&degrees, options.xmin)?;
    info!(
        alpha = fit.alpha,
        xmin = fit.xmin,
        ks_distance = fit.ks_distance,
        tail = fit.tail_size,
        "power-law fit"
    );

    if let Some(path) = &options.plot_path {
        let empirical = log_binned_pdf(&degrees, fit.xmin);
        let fitted = fitted_pdf_curve(&fit, &degrees);
        plot_power_law_pdf(&empirical, &fitted, fit.alpha, path, &options.style)?;
    }
    Ok(fit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Discrete power-law sample by rounding the continuous inverse CDF.
    fn sample(n: usize, alpha: f64, xmin: u64, seed: u64) -> Vec<u64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                let u: f64 = rng.gen();
                let x = (xmin as f64 - 0.5) * (1.0 - u).powf(-1.0 / (alpha - 1.0)) + 0.5;
                x.floor() as u64
            })
            .collect()
    }

    #[test]
    fn test_recovers_exponent_with_fixed_xmin() {
        let data = sample(5000, 2.5, 5, 7);
        let fit = fit_power_law(&data, Some(5)).unwrap();
        assert_eq!(fit.xmin, 5);
        assert_eq!(fit.tail_size, 5000);
        assert!((fit.alpha - 2.5).abs() < 0.15, "alpha = {}", fit.alpha);
        assert!(fit.ks_distance < 0.05, "ks = {}", fit.ks_distance);
    }

    #[test]
    fn test_scan_picks_plausible_cutoff() {
        let data = sample(5000, 2.5, 1, 11);
        let fit = fit_power_law(&data, None).unwrap();
        assert!(fit.alpha > 2.0 && fit.alpha < 3.0, "alpha = {}", fit.alpha);
        assert!(fit.ks_distance < 0.06, "ks = {}", fit.ks_distance);
        assert!(fit.tail_size >= 50, "tail = {}", fit.tail_size);
        assert_eq!(fit.sample_size, 5000);
    }

    #[test]
    fn test_underflowing_cutoff_is_never_chosen() {
        // Tail [378, 382] gives α ≈ 153, and ζ(α, 378) underflows to 0.
        let short = fit_power_law(&[378, 382], Some(378)).unwrap();
        assert!(short.ks_distance.is_nan());

        let mut data = vec![1u64; 60];
        data.extend([2; 20]);
        data.extend([3; 8]);
        data.extend([4; 4]);
        data.extend([378, 382]);
        let fit = fit_power_law(&data, None).unwrap();
        assert!(fit.xmin <= 4, "xmin = {}", fit.xmin);
        assert!(fit.ks_distance.is_finite() && fit.ks_distance > 0.0);
    }

    #[test]
    fn test_zeros_dropped() {
        let fit = fit_power_law(&[0, 0, 1, 1, 2, 4], Some(1)).unwrap();
        assert_eq!(fit.sample_size, 4);
        assert_eq!(fit.tail_size, 4);
    }

    #[test]
    fn test_xmin_validation() {
        assert!(matches!(
            fit_power_law(&[1, 2, 3], Some(0)),
            Err(FitError::InvalidParameter { .. })
        ));
        assert!(matches!(
            fit_power_law(&[1, 2, 3], Some(10)),
            Err(FitError::InvalidParameter { .. })
        ));
        assert!(matches!(
            fit_power_law(&[0, 0], None),
            Err(FitError::DegenerateDegrees { .. })
        ));
    }

    #[test]
    fn test_single_unique_value() {
        let fit = fit_power_law(&[3, 3, 3], None).unwrap();
        assert_eq!(fit.xmin, 3);
        assert!(fit.alpha > 1.0);
    }

    #[test]
    fn test_log_binned_pdf_small_values() {
        // Edges 1, 2, 3 (after flooring and dedup): bins [1,2) and [2,3).
        let pdf = log_binned_pdf(&[1, 1, 2, 2], 1);
        assert_eq!(pdf.len(), 2);
        assert!((pdf[0].1 - 0.5).abs() < 1e-12);
        assert!((pdf[1].0 - 6f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_cdf_reaches_one() {
        let fit = PowerLawFit {
            alpha: 2.5,
            xmin: 1,
            sigma: 0.0,
            ks_distance: 0.0,
            tail_size: 1,
            sample_size: 1,
        };
        assert_eq!(fit.cdf(0), 0.0);
        assert!((fit.cdf(1) - fit.pdf(1)).abs() < 1e-12);
        assert!(fit.cdf(1_000_000) > 0.999_99);
    }

    #[test]
    fn test_log_binned_pdf_points_are_positive_and_ordered() {
        let data = sample(2000, 2.2, 1, 3);
        let pdf = log_binned_pdf(&data, 1);
        assert!(!pdf.is_empty());
        assert!(pdf.iter().all(|&(x, p)| x >= 1.0 && p > 0.0));
        assert!(pdf.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
