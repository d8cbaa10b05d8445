//! `netdyn`: run the network statistics and Kuramoto pipelines configured by
//! `netdyn.toml` in the working directory.

use std::process::ExitCode;

use netdyn_analysis::pipeline::{run_kuramoto_pipeline, run_network_pipeline};
use netdyn_core::config::NetdynConfig;
use netdyn_core::constants::VERSION;
use netdyn_core::errors::NetdynErrorCode;
use netdyn_core::tracing::init_tracing;
use tracing::{error, info};

fn main() -> ExitCode {
    init_tracing();
    info!(version = VERSION, "netdyn starting");

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!(error = %e, "cannot resolve working directory");
            return ExitCode::FAILURE;
        }
    };
    let config = match NetdynConfig::load(&root) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e.report_string());
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;

    if config.network.effective_enabled() {
        match run_network_pipeline(&config) {
            Ok(report) => info!(
                nodes = report.nodes,
                edges = report.edges,
                average_clustering = report.average_clustering,
                "network pipeline finished"
            ),
            Err(e) => {
                error!("network pipeline failed: {}", e.report_string());
                failed = true;
            }
        }
    }

    if config.kuramoto.effective_enabled() {
        match run_kuramoto_pipeline(&config) {
            Ok(report) => info!(
                oscillators = report.oscillators,
                critical_coupling = report.critical_coupling,
                "kuramoto pipeline finished"
            ),
            Err(e) => {
                error!("kuramoto pipeline failed: {}", e.report_string());
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
