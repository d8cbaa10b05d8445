//! Network statistics pipeline: dataset download, edge-list loading, directed
//! graph construction, adjacency, clustering, degree distribution, and
//! distribution fitting.

pub mod adjacency;
pub mod clustering;
pub mod degree;
pub mod download;
pub mod fit;
pub mod graph;
pub mod loader;
pub mod types;

pub use adjacency::{compute_adjacency_matrix, AdjacencyMatrix, AdjacencyMode};
pub use clustering::{compute_clustering_coefficients, ClusteringReport};
pub use degree::{degree_plot_paths, plot_degree_distribution, DegreeDistribution, DegreePoint};
pub use download::{download_data, ensure_dataset, partial_path, DatasetStatus};
pub use fit::{
    fit_poisson, fit_power_law, goodness_of_fit_poisson, goodness_of_fit_powerlaw, PoissonFit,
    PowerLawFit, PowerLawOptions,
};
pub use graph::Network;
pub use loader::{load_edge_list, parse_edge_list};
pub use types::{Edge, EdgeList, EdgeListFormat, NodeId};
