//! Local clustering coefficients.

use netdyn_core::types::collections::FxHashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::graph::Network;
use super::types::NodeId;

/// Per-node clustering coefficients and their unweighted mean.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusteringReport {
    pub coefficients: FxHashMap<NodeId, f64>,
    /// `None` for an empty graph.
    pub average: Option<f64>,
}

impl ClusteringReport {
    pub fn get(&self, node: NodeId) -> Option<f64> {
        self.coefficients.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

/// Compute c(v) = 2·links / (d·(d−1)) for every node.
///
/// d counts the distinct successors of v other than v itself. Two neighbours
/// are linked when an edge joins them in either direction. Nodes with fewer
/// than two neighbours get 0.
pub fn compute_clustering_coefficients(network: &Network) -> ClusteringReport {
    let nodes: Vec<NodeId> = network.nodes().collect();
    if nodes.is_empty() {
        return ClusteringReport::default();
    }

    let values: Vec<(NodeId, f64)> = nodes
        .par_iter()
        .map(|&node| (node, local_clustering(network, node)))
        .collect();

    let average = values.iter().map(|&(_, c)| c).sum::<f64>() / values.len() as f64;
    ClusteringReport {
        coefficients: values.into_iter().collect(),
        average: Some(average),
    }
}

fn local_clustering(network: &Network, node: NodeId) -> f64 {
    let neighbours: Vec<NodeId> = network.successors(node).filter(|&n| n != node).collect();
    let d = neighbours.len();
    if d < 2 {
        return 0.0;
    }

    let mut links = 0usize;
    for (i, &a) in neighbours.iter().enumerate() {
        for &b in &neighbours[i + 1..] {
            if network.contains_edge(a, b) || network.contains_edge(b, a) {
                links += 1;
            }
        }
    }
    2.0 * links as f64 / (d * (d - 1)) as f64
}
