//! End-to-end pipeline tests with plot rendering disabled; rendering is
//! covered by `plot_test.rs`.

use netdyn_analysis::network::{parse_edge_list, EdgeListFormat};
use netdyn_analysis::pipeline::*;
use netdyn_core::config::{KuramotoConfig, NetdynConfig, NetworkConfig, PlotConfig};
use netdyn_core::errors::{NetdynErrorCode, PipelineError};

const EDGES: &str = "\
# FromNodeId\tToNodeId
0\t1
0\t2
1\t2
2\t0
2\t3
3\t4
4\t2
5\t2
";

fn small_kuramoto() -> KuramotoConfig {
    KuramotoConfig {
        oscillators: Some(20),
        total_time: Some(1.0),
        time_step: Some(0.1),
        seed: Some(42),
        sweep_start: Some(0.0),
        sweep_stop: Some(2.0),
        sweep_step: Some(1.0),
        time_series_couplings: vec![1.0, 3.0],
        runs: Some(2),
        run_total_time: Some(1.0),
        run_time_step: Some(0.1),
        ..KuramotoConfig::default()
    }
}

#[test]
fn analyze_network_without_plots() {
    let list = parse_edge_list(EDGES.as_bytes(), &EdgeListFormat::default());
    let report = analyze_network("inline", &list, &NetworkConfig::default(), None).unwrap();

    assert_eq!(report.dataset, "inline");
    assert_eq!(report.edges_loaded, 8);
    assert_eq!(report.comment_lines, 1);
    assert_eq!(report.nodes, 6);
    assert_eq!(report.edges, 8);
    assert_eq!(report.adjacency_nonzeros, 8);
    assert_eq!(report.max_degree, Some(6));
    assert!(report.average_clustering.is_some());
    assert!(report.poisson.is_some());
    assert!(report.power_law.is_some());
    assert!(report.plots.is_empty());
}

#[test]
fn analyze_empty_edge_list_skips_fits() {
    let list = parse_edge_list("# nothing here\n".as_bytes(), &EdgeListFormat::default());
    let report = analyze_network("empty", &list, &NetworkConfig::default(), None).unwrap();
    assert_eq!(report.nodes, 0);
    assert_eq!(report.average_clustering, None);
    assert!(report.poisson.is_none());
    assert!(report.power_law.is_none());
}

#[test]
fn dense_mode_over_limit_fails_with_analysis_code() {
    let list = parse_edge_list(EDGES.as_bytes(), &EdgeListFormat::default());
    let config = NetworkConfig {
        adjacency_mode: Some("dense".to_string()),
        max_dense_nodes: Some(3),
        ..NetworkConfig::default()
    };
    let err = analyze_network("inline", &list, &config, None).unwrap_err();
    assert!(matches!(err, PipelineError::Analysis(_)));
    assert_eq!(err.error_code(), "ANALYSIS_ERROR");
}

#[test]
fn network_pipeline_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("edges.txt");
    std::fs::write(&dataset, EDGES).unwrap();
    let output = dir.path().join("out");

    let config = NetdynConfig {
        network: NetworkConfig {
            dataset_path: Some(dataset.display().to_string()),
            ..NetworkConfig::default()
        },
        plot: PlotConfig {
            enabled: Some(false),
            output_dir: Some(output.display().to_string()),
            ..PlotConfig::default()
        },
        ..NetdynConfig::default()
    };

    let report = run_network_pipeline(&config).unwrap();
    assert_eq!(report.nodes, 6);

    let text = std::fs::read_to_string(output.join(NETWORK_REPORT_FILE)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["nodes"], 6);
    assert_eq!(json["adjacency_mode"], "sparse");
}

#[test]
fn kuramoto_experiments_without_plots() {
    let report = run_kuramoto_experiments(&small_kuramoto(), None).unwrap();

    assert_eq!(report.oscillators, 20);
    assert_eq!(report.sweep_couplings, vec![0.0, 1.0]);
    assert_eq!(report.sweep_final_coherence.len(), 2);
    assert_eq!(report.time_series.len(), 2);
    assert_eq!(report.time_series[1].label, "K=3");
    assert!(report.time_series.iter().all(|s| s.steps == 10));
    assert_eq!(report.fixed_frequency_runs.len(), 2);
    assert_eq!(report.fixed_phase_runs.len(), 2);
    assert!(report.plots.is_empty());
    // Every series of the fixed-phase runs starts from the same phases.
    for run in &report.fixed_phase_runs {
        let r0 = run.initial_coherence.unwrap();
        assert!((r0 - report.initial_coherence).abs() < 1e-12);
    }
}

#[test]
fn kuramoto_experiments_reproducible() {
    let a = run_kuramoto_experiments(&small_kuramoto(), None).unwrap();
    let b = run_kuramoto_experiments(&small_kuramoto(), None).unwrap();
    assert_eq!(a.sweep_final_coherence, b.sweep_final_coherence);
    assert_eq!(a.fixed_frequency_runs, b.fixed_frequency_runs);
}

#[test]
fn unknown_frequency_distribution_rejected() {
    let config = KuramotoConfig {
        frequency_distribution: Some("cauchy".to_string()),
        ..small_kuramoto()
    };
    let err = run_kuramoto_experiments(&config, None).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_ARGUMENT");
}

#[test]
fn kuramoto_pipeline_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = NetdynConfig {
        kuramoto: small_kuramoto(),
        plot: PlotConfig {
            enabled: Some(false),
            output_dir: Some(dir.path().display().to_string()),
            ..PlotConfig::default()
        },
        ..NetdynConfig::default()
    };
    run_kuramoto_pipeline(&config).unwrap();

    let text = std::fs::read_to_string(dir.path().join(KURAMOTO_REPORT_FILE)).unwrap();
    let report: KuramotoReport = serde_json::from_str(&text).unwrap();
    assert_eq!(report.seed, 42);
    assert_eq!(report.phase_distribution.name(), "uniform");
}
