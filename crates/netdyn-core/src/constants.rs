//! Shared constants and compiled defaults.

/// netdyn version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "netdyn.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "NETDYN_LOG";

/// Filter used when `NETDYN_LOG` is unset or does not parse.
pub const DEFAULT_LOG_FILTER: &str = "netdyn_core=info,netdyn_analysis=info,netdyn=info";

// Network statistics

/// SNAP Amazon co-purchasing network (March 2, 2003).
pub const DEFAULT_DATASET_URL: &str = "https://snap.stanford.edu/data/amazon0302.txt.gz";

/// Local path the dataset is downloaded to.
pub const DEFAULT_DATASET_PATH: &str = "datasets/amazon.txt.gz";

pub const DEFAULT_SEPARATOR: &str = "\t";

pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Node count above which a dense adjacency matrix is refused.
pub const DEFAULT_MAX_DENSE_NODES: usize = 20_000;

pub const DEFAULT_DEGREE_PLOT_FILE: &str = "amazon_degree_log.png";

/// Additive constant applied to observed and expected frequencies in the
/// Poisson chi-square test.
pub const CHI_SQUARE_EPSILON: f64 = 1e-6;

// Kuramoto simulation

pub const DEFAULT_OSCILLATORS: usize = 2000;
pub const DEFAULT_TOTAL_TIME: f64 = 100.0;
pub const DEFAULT_TIME_STEP: f64 = 0.01;
pub const DEFAULT_FREQUENCY_DISTRIBUTION: &str = "normal";
pub const DEFAULT_PHASE_DISTRIBUTION: &str = "uniform";
pub const DEFAULT_SEED: u64 = 42;

pub const DEFAULT_SWEEP_START: f64 = 0.0;
pub const DEFAULT_SWEEP_STOP: f64 = 5.0;
pub const DEFAULT_SWEEP_STEP: f64 = 0.2;
pub const DEFAULT_TIME_SERIES_COUPLINGS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

pub const DEFAULT_RUNS: usize = 10;
pub const DEFAULT_RUN_TOTAL_TIME: f64 = 50.0;
pub const DEFAULT_RUN_TIME_STEP: f64 = 0.1;
pub const DEFAULT_RUN_COUPLING: f64 = 3.0;
pub const DEFAULT_RUN_FREQUENCY_MEAN: f64 = 0.0;
pub const DEFAULT_RUN_FREQUENCY_STD: f64 = 0.5;

/// Upper bound on ceil(T / dt) for one integration.
pub const MAX_TIME_STEPS: usize = 100_000_000;

/// Upper bound on the number of couplings in one sweep.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

// Plotting

pub const DEFAULT_PLOT_WIDTH: u32 = 1200;
pub const DEFAULT_PLOT_HEIGHT: u32 = 800;
pub const DEFAULT_OUTPUT_DIR: &str = "plots";

/// Frequency distribution names accepted by the system initializer.
pub const SUPPORTED_FREQUENCY_DISTRIBUTIONS: [&str; 2] = ["normal", "uniform"];

/// Phase distribution names accepted by the system initializer.
pub const SUPPORTED_PHASE_DISTRIBUTIONS: [&str; 1] = ["uniform"];

/// Adjacency matrix representations.
pub const SUPPORTED_ADJACENCY_MODES: [&str; 2] = ["sparse", "dense"];
