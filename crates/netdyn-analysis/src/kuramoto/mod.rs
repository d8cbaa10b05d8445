//! Kuramoto coupled-oscillator simulation: ensemble initialization, the order
//! parameter, a mean-field Euler integrator, and experiment drivers.

pub mod coherence;
pub mod experiments;
pub mod init;
pub mod integrator;

pub use coherence::{coherence, order_parameter};
pub use experiments::{
    coupling_range, fixed_frequency_runs, fixed_phase_runs, sweep_coupling,
    time_series_for_couplings, CoherenceSeries, MultiRunParams,
};
pub use init::{
    initialize_system, initialize_system_by_name, Ensemble, FrequencyDistribution,
    PhaseDistribution,
};
pub use integrator::{evolve_system, step_count, time_axis, IntegrationParams};
