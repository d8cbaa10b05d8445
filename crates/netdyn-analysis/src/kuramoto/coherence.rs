//! Kuramoto order parameter.

/// Coherence r = |⟨e^{iθ}⟩| in [0, 1]. Empty input gives 0.
pub fn coherence(phases: &[f64]) -> f64 {
    order_parameter(phases).0
}

/// (r, ψ): magnitude and circular mean phase of ⟨e^{iθ}⟩.
pub fn order_parameter(phases: &[f64]) -> (f64, f64) {
    if phases.is_empty() {
        return (0.0, 0.0);
    }
    let (sum_cos, sum_sin) = phases
        .iter()
        .fold((0.0, 0.0), |(c, s), &theta| (c + theta.cos(), s + theta.sin()));
    let n = phases.len() as f64;
    let (mean_cos, mean_sin) = (sum_cos / n, sum_sin / n);
    let r = (mean_cos * mean_cos + mean_sin * mean_sin).sqrt().min(1.0);
    (r, mean_sin.atan2(mean_cos))
}
