//! Adjacency matrix: CSR by default, dense only on explicit request.
//!
//! Layout:
//!   row_offsets : [usize; N+1]  row_offsets[i]..row_offsets[i+1] = targets of row i
//!   col_indices : [usize; E]    target column, ascending within a row
//!   values      : [f64; E]      edge weight (always 1.0 for unweighted graphs)
//!
//! Rows and columns follow the graph's node order. Dense conversion is a
//! configurable switch guarded by a node limit, never a silent fallback.

use std::str::FromStr;

use netdyn_core::errors::AnalysisError;
use netdyn_core::types::collections::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::graph::Network;
use super::types::NodeId;

/// Requested matrix representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyMode {
    #[default]
    Sparse,
    Dense,
}

impl AdjacencyMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Dense => "dense",
        }
    }
}

impl FromStr for AdjacencyMode {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sparse" => Ok(Self::Sparse),
            "dense" => Ok(Self::Dense),
            other => Err(AnalysisError::UnknownAdjacencyMode(other.to_string())),
        }
    }
}

/// Compressed sparse row storage.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    pub row_offsets: Vec<usize>,
    pub col_indices: Vec<usize>,
    pub values: Vec<f64>,
}

/// Row-major dense storage.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    pub n: usize,
    pub data: Vec<f64>,
}

impl DenseMatrix {
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row >= self.n || col >= self.n {
            return 0.0;
        }
        self.data[row * self.n + col]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdjacencyStorage {
    Sparse(CsrMatrix),
    Dense(DenseMatrix),
}

/// Square adjacency matrix over a stable node ordering.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    node_order: Vec<NodeId>,
    index: FxHashMap<NodeId, usize>,
    storage: AdjacencyStorage,
}

impl AdjacencyMatrix {
    /// (rows, cols); always square.
    pub fn shape(&self) -> (usize, usize) {
        (self.node_order.len(), self.node_order.len())
    }

    /// Number of stored nonzero entries.
    pub fn nnz(&self) -> usize {
        match &self.storage {
            AdjacencyStorage::Sparse(csr) => csr.col_indices.len(),
            AdjacencyStorage::Dense(dense) => dense.data.iter().filter(|v| **v != 0.0).count(),
        }
    }

    pub fn mode(&self) -> AdjacencyMode {
        match self.storage {
            AdjacencyStorage::Sparse(_) => AdjacencyMode::Sparse,
            AdjacencyStorage::Dense(_) => AdjacencyMode::Dense,
        }
    }

    /// Entry (row, col); 0.0 when absent or out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        match &self.storage {
            AdjacencyStorage::Sparse(csr) => {
                if row + 1 >= csr.row_offsets.len() {
                    return 0.0;
                }
                let cols = &csr.col_indices[csr.row_offsets[row]..csr.row_offsets[row + 1]];
                match cols.binary_search(&col) {
                    Ok(pos) => csr.values[csr.row_offsets[row] + pos],
                    Err(_) => 0.0,
                }
            }
            AdjacencyStorage::Dense(dense) => dense.get(row, col),
        }
    }

    /// Entry addressed by node ids.
    pub fn get_by_id(&self, from: NodeId, to: NodeId) -> f64 {
        match (self.index_of(from), self.index_of(to)) {
            (Some(row), Some(col)) => self.get(row, col),
            _ => 0.0,
        }
    }

    /// Nonzero columns of `row`, ascending.
    pub fn row(&self, row: usize) -> Vec<usize> {
        match &self.storage {
            AdjacencyStorage::Sparse(csr) => {
                if row + 1 >= csr.row_offsets.len() {
                    return Vec::new();
                }
                csr.col_indices[csr.row_offsets[row]..csr.row_offsets[row + 1]].to_vec()
            }
            AdjacencyStorage::Dense(dense) => (0..dense.n)
                .filter(|&col| dense.get(row, col) != 0.0)
                .collect(),
        }
    }

    /// Node id of each row/column.
    pub fn node_order(&self) -> &[NodeId] {
        &self.node_order
    }

    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).copied()
    }

    pub fn storage(&self) -> &AdjacencyStorage {
        &self.storage
    }

    /// Dense copy of the matrix, regardless of storage.
    pub fn to_dense(&self) -> DenseMatrix {
        match &self.storage {
            AdjacencyStorage::Dense(dense) => dense.clone(),
            AdjacencyStorage::Sparse(csr) => csr_to_dense(csr, self.node_order.len()),
        }
    }
}

/// Compute the adjacency matrix of `network`.
///
/// `Dense` is refused with `DenseLimitExceeded` when the graph has more than
/// `max_dense_nodes` nodes.
pub fn compute_adjacency_matrix(
    network: &Network,
    mode: AdjacencyMode,
    max_dense_nodes: usize,
) -> Result<AdjacencyMatrix, AnalysisError> {
    let node_order: Vec<NodeId> = network.nodes().collect();
    let n = node_order.len();

    if mode == AdjacencyMode::Dense && n > max_dense_nodes {
        return Err(AnalysisError::DenseLimitExceeded {
            nodes: n,
            limit: max_dense_nodes,
        });
    }

    let index: FxHashMap<NodeId, usize> = node_order
        .iter()
        .enumerate()
        .map(|(i, &node)| (node, i))
        .collect();

    let csr = build_csr(network, &node_order, &index);
    let storage = match mode {
        AdjacencyMode::Sparse => AdjacencyStorage::Sparse(csr),
        AdjacencyMode::Dense => AdjacencyStorage::Dense(csr_to_dense(&csr, n)),
    };
    debug!(nodes = n, mode = mode.name(), "adjacency matrix built");

    Ok(AdjacencyMatrix {
        node_order,
        index,
        storage,
    })
}

fn build_csr(network: &Network, node_order: &[NodeId], index: &FxHashMap<NodeId, usize>) -> CsrMatrix {
    let mut row_offsets = Vec::with_capacity(node_order.len() + 1);
    let mut col_indices = Vec::with_capacity(network.edge_count());
    row_offsets.push(0);

    for &node in node_order {
        let start = col_indices.len();
        col_indices.extend(network.successors(node).filter_map(|t| index.get(&t).copied()));
        col_indices[start..].sort_unstable();
        row_offsets.push(col_indices.len());
    }

    let values = vec![1.0; col_indices.len()];
    CsrMatrix {
        row_offsets,
        col_indices,
        values,
    }
}

fn csr_to_dense(csr: &CsrMatrix, n: usize) -> DenseMatrix {
    let mut data = vec![0.0; n * n];
    for row in 0..n {
        for k in csr.row_offsets[row]..csr.row_offsets[row + 1] {
            data[row * n + csr.col_indices[k]] = csr.values[k];
        }
    }
    DenseMatrix { n, data }
}
