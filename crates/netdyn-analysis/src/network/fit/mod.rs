//! Goodness of fit of degree sequences: Poisson (chi-square) and discrete
//! power law (KS distance).

pub mod poisson;
pub mod powerlaw;
pub mod zeta;

use netdyn_core::errors::FitError;

pub use poisson::{fit_poisson, goodness_of_fit_poisson, PoissonFit};
pub use powerlaw::{
    fit_power_law, fitted_pdf_curve, goodness_of_fit_powerlaw, log_binned_pdf, PowerLawFit,
    PowerLawOptions,
};

/// Both fits reject empty and all-zero degree sequences.
pub(crate) fn check_degrees(degrees: &[u64]) -> Result<(), FitError> {
    if degrees.is_empty() {
        return Err(FitError::DegenerateDegrees {
            reason: "degree sequence is empty".to_string(),
        });
    }
    if degrees.iter().all(|&d| d == 0) {
        return Err(FitError::DegenerateDegrees {
            reason: format!("all {} degrees are zero", degrees.len()),
        });
    }
    Ok(())
}
