//! Goodness-of-fit tests on synthetic graphs with known degree structure.

use netdyn_analysis::network::fit::fitted_pdf_curve;
use netdyn_analysis::network::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// G(n, p) directed random graph. Total degrees are close to Poisson(2·n·p).
fn random_graph(n: i64, p: f64, seed: u64) -> Network {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for from in 0..n {
        for to in 0..n {
            if from != to && rng.gen_bool(p) {
                edges.push((from, to));
            }
        }
    }
    Network::from_edges(&edges)
}

/// Hub-and-leaf graph: hub i links to k_i fresh leaves, k_i drawn from a
/// discrete power law with exponent `alpha` and x_min = 1. Hub degrees are
/// exactly k_i; every leaf has degree 1.
fn heavy_tailed_graph(hubs: i64, alpha: f64, seed: u64) -> Network {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = Vec::new();
    let mut next_leaf = hubs;
    for hub in 0..hubs {
        let u: f64 = rng.gen();
        let k = (0.5 * (1.0 - u).powf(-1.0 / (alpha - 1.0)) + 0.5).floor() as i64;
        for _ in 0..k {
            edges.push((hub, next_leaf));
            next_leaf += 1;
        }
    }
    Network::from_edges(&edges)
}

#[test]
fn random_graph_is_compatible_with_poisson() {
    let net = random_graph(500, 0.01, 17);
    let fit = goodness_of_fit_poisson(&net).unwrap();

    assert!((fit.lambda - 9.98).abs() < 1.0, "lambda = {}", fit.lambda);
    assert!(fit.p_value > 0.1, "p = {}", fit.p_value);
    assert_eq!(fit.degrees_of_freedom, fit.categories - 1);
}

#[test]
fn heavy_tailed_graph_rejects_poisson() {
    let net = heavy_tailed_graph(3000, 2.2, 5);
    let fit = goodness_of_fit_poisson(&net).unwrap();
    assert!(fit.p_value < 1e-6, "p = {}", fit.p_value);

    let random = goodness_of_fit_poisson(&random_graph(500, 0.01, 17)).unwrap();
    assert!(random.p_value > 1e3 * fit.p_value.max(1e-300));
}

#[test]
fn heavy_tailed_graph_power_law_fit() {
    let net = heavy_tailed_graph(3000, 2.2, 5);
    let fit = goodness_of_fit_powerlaw(&net, &PowerLawOptions::default()).unwrap();

    assert!(fit.alpha > 1.8 && fit.alpha < 2.6, "alpha = {}", fit.alpha);
    assert!(fit.ks_distance < 0.1, "ks = {}", fit.ks_distance);
    assert!(fit.xmin >= 1 && fit.xmin <= 10, "xmin = {}", fit.xmin);
    assert!(fit.tail_size >= 100, "tail = {}", fit.tail_size);
    assert_eq!(fit.sample_size, net.node_count());
}

#[test]
fn random_graph_is_a_poor_power_law() {
    let heavy = goodness_of_fit_powerlaw(&heavy_tailed_graph(3000, 2.2, 5), &PowerLawOptions::default())
        .unwrap();
    let random = goodness_of_fit_powerlaw(&random_graph(500, 0.01, 17), &PowerLawOptions::default())
        .unwrap();
    // A Poisson tail decays faster than any power law, so the fitted
    // exponent is far steeper.
    assert!(random.alpha > heavy.alpha + 1.0, "{} vs {}", random.alpha, heavy.alpha);
}

#[test]
fn fixed_xmin_is_honoured() {
    let net = heavy_tailed_graph(1000, 2.5, 9);
    let options = PowerLawOptions {
        xmin: Some(3),
        ..PowerLawOptions::default()
    };
    let fit = goodness_of_fit_powerlaw(&net, &options).unwrap();
    assert_eq!(fit.xmin, 3);
    let expected_tail = net.degree_sequence().iter().filter(|&&d| d >= 3).count();
    assert_eq!(fit.tail_size, expected_tail);
}

#[test]
fn empty_graph_fits_fail() {
    let net = Network::new();
    assert!(goodness_of_fit_poisson(&net).is_err());
    assert!(goodness_of_fit_powerlaw(&net, &PowerLawOptions::default()).is_err());
}

#[test]
fn fitted_curve_follows_tail() {
    let net = heavy_tailed_graph(2000, 2.3, 21);
    let degrees = net.degree_sequence();
    let fit = fit_power_law(&degrees, None).unwrap();
    let curve = fitted_pdf_curve(&fit, &degrees);

    assert!(!curve.is_empty());
    assert!(curve.iter().all(|&(x, p)| x >= fit.xmin as f64 && p > 0.0));
    // Strictly decreasing density along the tail.
    assert!(curve.windows(2).all(|w| w[1].1 < w[0].1));
}
