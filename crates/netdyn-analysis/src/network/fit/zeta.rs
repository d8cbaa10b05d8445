//! Hurwitz zeta function ζ(s, q) = Σ_{k≥0} (q + k)^−s for s > 1, q > 0.
//!
//! Euler–Maclaurin summation: DIRECT_TERMS explicit terms, then the integral
//! tail plus six Bernoulli corrections.

const DIRECT_TERMS: usize = 10;

/// B_{2j} / (2j)! for j = 1..=6.
const BERNOULLI_COEFFS: [f64; 6] = [
    1.0 / 12.0,
    -1.0 / 720.0,
    1.0 / 30_240.0,
    -1.0 / 1_209_600.0,
    1.0 / 47_900_160.0,
    -691.0 / 1_307_674_368_000.0,
];

/// Returns NaN when s ≤ 1 or q ≤ 0.
pub fn hurwitz_zeta(s: f64, q: f64) -> f64 {
    if s.is_nan() || q.is_nan() || s <= 1.0 || q <= 0.0 {
        return f64::NAN;
    }

    let mut sum = 0.0;
    for k in 0..DIRECT_TERMS {
        sum += (q + k as f64).powf(-s);
    }

    let a = q + DIRECT_TERMS as f64;
    sum += a.powf(1.0 - s) / (s - 1.0);
    sum += 0.5 * a.powf(-s);

    let a2 = a * a;
    let mut fac = s * a.powf(-s - 1.0);
    for (j, coeff) in BERNOULLI_COEFFS.iter().enumerate() {
        sum += coeff * fac;
        let m = 2.0 * (j as f64 + 1.0);
        fac *= (s + m - 1.0) * (s + m) / a2;
    }
    sum
}
