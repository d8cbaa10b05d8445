//! Kuramoto pipeline: initialize one ensemble, run the four experiments,
//! render their plots, and summarize them in a report.

use std::path::PathBuf;

use netdyn_core::config::{KuramotoConfig, NetdynConfig};
use netdyn_core::errors::PipelineError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{write_report, KURAMOTO_REPORT_FILE};
use crate::kuramoto::{
    coupling_range, fixed_frequency_runs, fixed_phase_runs, initialize_system, sweep_coupling,
    time_axis, time_series_for_couplings, CoherenceSeries, FrequencyDistribution,
    IntegrationParams, MultiRunParams, PhaseDistribution,
};
use crate::plot::{plot_coherence_over_time, plot_coherence_vs_coupling, PlotStyle};

const SWEEP_PLOT_FILE: &str = "coherence_vs_coupling.png";
const TIME_SERIES_PLOT_FILE: &str = "coherence_time_series.png";
const FIXED_FREQUENCY_PLOT_FILE: &str = "fixed_frequencies_varying_phases.png";
const FIXED_PHASE_PLOT_FILE: &str = "fixed_phases_varying_frequencies.png";

/// Condensed view of one coherence series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub label: String,
    pub coupling: f64,
    pub steps: usize,
    pub initial_coherence: Option<f64>,
    pub final_coherence: Option<f64>,
    pub mean_coherence: Option<f64>,
}

impl From<&CoherenceSeries> for SeriesSummary {
    fn from(series: &CoherenceSeries) -> Self {
        let mean = if series.values.is_empty() {
            None
        } else {
            Some(series.values.iter().sum::<f64>() / series.values.len() as f64)
        };
        Self {
            label: series.label.clone(),
            coupling: series.coupling,
            steps: series.values.len(),
            initial_coherence: series.values.first().copied(),
            final_coherence: series.final_value(),
            mean_coherence: mean,
        }
    }
}

/// Results of the four Kuramoto experiments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KuramotoReport {
    pub oscillators: usize,
    pub seed: u64,
    pub frequency_distribution: FrequencyDistribution,
    pub phase_distribution: PhaseDistribution,
    /// Mean-field threshold of the sweep's frequency distribution.
    pub critical_coupling: f64,
    pub initial_coherence: f64,
    pub sweep_couplings: Vec<f64>,
    pub sweep_final_coherence: Vec<f64>,
    pub time_series: Vec<SeriesSummary>,
    pub fixed_frequency_runs: Vec<SeriesSummary>,
    pub fixed_phase_runs: Vec<SeriesSummary>,
    pub plots: Vec<PathBuf>,
}

/// Run every experiment described by `config`. Plots are rendered only when
/// `style` is given.
pub fn run_kuramoto_experiments(
    config: &KuramotoConfig,
    style: Option<&PlotStyle>,
) -> Result<KuramotoReport, PipelineError> {
    let n = config.effective_oscillators();
    let seed = config.effective_seed();
    let frequencies: FrequencyDistribution = config.effective_frequency_distribution().parse()?;
    let phases: PhaseDistribution = config.effective_phase_distribution().parse()?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ensemble = initialize_system(n, &frequencies, phases, &mut rng)?;
    let initial_coherence = crate::kuramoto::coherence(ensemble.phases());
    info!(n, seed, initial_coherence, "system initialized");

    let (total_time, dt) = (config.effective_total_time(), config.effective_time_step());
    let (start, stop, step) = config.effective_sweep();
    let couplings = coupling_range(start, stop, step)?;
    let finals = sweep_coupling(&ensemble, &couplings, total_time, dt)?;

    let series_couplings = config.effective_time_series_couplings();
    let series = time_series_for_couplings(&ensemble, &series_couplings, total_time, dt)?;
    info!(couplings = series.len(), "time series computed");

    let multi = MultiRunParams {
        runs: config.effective_runs(),
        integration: IntegrationParams::new(
            config.effective_run_coupling(),
            config.effective_run_total_time(),
            config.effective_run_time_step(),
        ),
        seed,
    };
    let run_frequencies = FrequencyDistribution::Normal {
        mean: config.effective_run_frequency_mean(),
        std_dev: config.effective_run_frequency_std(),
    };
    let (_, varying_phases) = fixed_frequency_runs(n, &run_frequencies, &multi)?;
    let varying_frequencies = fixed_phase_runs(ensemble.phases(), &multi)?;

    let critical_coupling = frequencies.critical_coupling();
    let mut plots = Vec::new();
    if let Some(style) = style {
        if couplings.is_empty() {
            warn!(start, stop, "empty coupling sweep, skipping its plot");
        } else {
            let path = style.output_path(SWEEP_PLOT_FILE);
            plot_coherence_vs_coupling(&couplings, &finals, Some(critical_coupling), &path, style)?;
            plots.push(path);
        }

        let time = time_axis(total_time, dt);
        let run_time = time_axis(multi.integration.total_time, multi.integration.dt);
        let figures = [
            (
                TIME_SERIES_PLOT_FILE,
                "Time Evolution of Coherence for Various Coupling Constants",
                &time,
                &series,
            ),
            (
                FIXED_FREQUENCY_PLOT_FILE,
                "Time Evolution for Varying Phases",
                &run_time,
                &varying_phases,
            ),
            (
                FIXED_PHASE_PLOT_FILE,
                "Time Evolution for Varying Natural Frequencies",
                &run_time,
                &varying_frequencies,
            ),
        ];
        for (file, title, time, series) in figures {
            if time.is_empty() {
                warn!(plot = file, "zero-length time axis, skipping plot");
                continue;
            }
            let path = style.output_path(file);
            plot_coherence_over_time(title, time, series, &path, style)?;
            plots.push(path);
        }
    }

    Ok(KuramotoReport {
        oscillators: n,
        seed,
        frequency_distribution: frequencies,
        phase_distribution: phases,
        critical_coupling,
        initial_coherence,
        sweep_couplings: couplings,
        sweep_final_coherence: finals,
        time_series: series.iter().map(SeriesSummary::from).collect(),
        fixed_frequency_runs: varying_phases.iter().map(SeriesSummary::from).collect(),
        fixed_phase_runs: varying_frequencies.iter().map(SeriesSummary::from).collect(),
        plots,
    })
}

/// Run the experiments and write `kuramoto_report.json` into the plot output
/// directory.
pub fn run_kuramoto_pipeline(config: &NetdynConfig) -> Result<KuramotoReport, PipelineError> {
    let style = PlotStyle::from_config(&config.plot);
    let plot_style = config.plot.effective_enabled().then_some(&style);
    let report = run_kuramoto_experiments(&config.kuramoto, plot_style)?;
    write_report(&style.output_path(KURAMOTO_REPORT_FILE), &report)?;
    Ok(report)
}
