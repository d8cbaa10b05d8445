//! Network statistics pipeline: download → load → graph → statistics → fits
//! → plots → report.

use std::path::{Path, PathBuf};

use netdyn_core::config::{NetdynConfig, NetworkConfig};
use netdyn_core::errors::PipelineError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{write_report, NETWORK_REPORT_FILE};
use crate::network::{
    compute_adjacency_matrix, compute_clustering_coefficients, ensure_dataset,
    goodness_of_fit_poisson, goodness_of_fit_powerlaw, load_edge_list, plot_degree_distribution,
    AdjacencyMode, DegreeDistribution, EdgeList, EdgeListFormat, Network, PoissonFit,
    PowerLawFit, PowerLawOptions,
};
use crate::plot::PlotStyle;

/// File name of the power-law PDF overlay.
const POWERLAW_PLOT_FILE: &str = "powerlaw_pdf.png";

/// Everything the network pipeline measured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkReport {
    pub dataset: String,
    /// Edge lines parsed, duplicates included.
    pub edges_loaded: usize,
    pub comment_lines: usize,
    pub skipped_lines: usize,
    pub nodes: usize,
    /// Distinct directed edges.
    pub edges: usize,
    pub adjacency_mode: AdjacencyMode,
    pub adjacency_nonzeros: usize,
    /// `None` for an empty graph.
    pub average_clustering: Option<f64>,
    pub mean_degree: Option<f64>,
    pub max_degree: Option<u64>,
    pub degree_distribution: DegreeDistribution,
    /// `None` when the degree sequence is empty or all zero.
    pub poisson: Option<PoissonFit>,
    pub power_law: Option<PowerLawFit>,
    pub plots: Vec<PathBuf>,
}

/// Compute every statistic of `edge_list`. Plots are rendered only when
/// `style` is given.
pub fn analyze_network(
    dataset: &str,
    edge_list: &EdgeList,
    config: &NetworkConfig,
    style: Option<&PlotStyle>,
) -> Result<NetworkReport, PipelineError> {
    let network = Network::from_edge_list(edge_list);
    info!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        "graph built"
    );

    let mode: AdjacencyMode = config.effective_adjacency_mode().parse()?;
    let adjacency = compute_adjacency_matrix(&network, mode, config.effective_max_dense_nodes())?;

    let clustering = compute_clustering_coefficients(&network);
    match clustering.average {
        Some(avg) => info!(average_clustering = avg, "clustering coefficients computed"),
        None => warn!("average clustering coefficient is undefined for an empty graph"),
    }

    let distribution = DegreeDistribution::from_network(&network);
    let mut plots = Vec::new();

    let (poisson, power_law) = if distribution.points.iter().any(|p| p.degree > 0 && p.count > 0) {
        let poisson = goodness_of_fit_poisson(&network)?;
        let options = PowerLawOptions {
            xmin: config.powerlaw_xmin,
            plot_path: style.map(|s| s.output_path(POWERLAW_PLOT_FILE)),
            style: style.cloned().unwrap_or_default(),
        };
        let power_law = goodness_of_fit_powerlaw(&network, &options)?;
        plots.extend(options.plot_path);
        (Some(poisson), Some(power_law))
    } else {
        warn!("degree sequence is empty or all zero, skipping distribution fits");
        (None, None)
    };

    if let Some(style) = style {
        if distribution.is_empty() {
            warn!("empty graph, skipping degree distribution plot");
        } else {
            let target = style.output_path(config.effective_degree_plot_file());
            plots.extend(plot_degree_distribution(
                &network,
                config.effective_log_scale(),
                Some(&target),
                style,
            )?);
        }
    }

    Ok(NetworkReport {
        dataset: dataset.to_string(),
        edges_loaded: edge_list.len(),
        comment_lines: edge_list.comment_lines,
        skipped_lines: edge_list.skipped_lines,
        nodes: network.node_count(),
        edges: network.edge_count(),
        adjacency_mode: mode,
        adjacency_nonzeros: adjacency.nnz(),
        average_clustering: clustering.average,
        mean_degree: distribution.mean_degree(),
        max_degree: distribution.max_degree(),
        degree_distribution: distribution,
        poisson,
        power_law,
        plots,
    })
}

/// Fetch the configured dataset if missing, analyze it, and write
/// `network_report.json` into the plot output directory.
pub fn run_network_pipeline(config: &NetdynConfig) -> Result<NetworkReport, PipelineError> {
    let network_config = &config.network;
    let dataset_path = Path::new(network_config.effective_dataset_path());
    let status = ensure_dataset(network_config.effective_dataset_url(), dataset_path)?;
    info!(path = %dataset_path.display(), ?status, "dataset ready");

    let format = EdgeListFormat::from_config(network_config);
    let edge_list = load_edge_list(dataset_path, &format)?;

    let style = PlotStyle::from_config(&config.plot);
    let plot_style = config.plot.effective_enabled().then_some(&style);
    let report = analyze_network(
        &dataset_path.display().to_string(),
        &edge_list,
        network_config,
        plot_style,
    )?;

    write_report(&style.output_path(NETWORK_REPORT_FILE), &report)?;
    Ok(report)
}
