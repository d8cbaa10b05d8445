//! Directed graph built from an edge list.

use netdyn_core::types::collections::FxHashMap;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;

use super::types::{Edge, EdgeList, NodeId};

/// Directed graph keyed by the ids found in the source file.
///
/// Node order is first appearance in the edge list; repeated edges collapse
/// into one. Self-loops are kept.
#[derive(Debug, Clone)]
pub struct Network {
    graph: DiGraphMap<NodeId, ()>,
}

impl Network {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraphMap::new(),
        }
    }

    /// Build a graph whose node set is every endpoint in `edges`.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut graph = DiGraphMap::with_capacity(edges.len() / 2, edges.len());
        for &(from, to) in edges {
            graph.add_edge(from, to, ());
        }
        Self { graph }
    }

    pub fn from_edge_list(edge_list: &EdgeList) -> Self {
        Self::from_edges(&edge_list.edges)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.nodes()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    pub fn contains_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.graph.contains_edge(from, to)
    }

    /// Distinct targets of edges leaving `node`, self-loop included.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.neighbors_directed(node, Direction::Outgoing)
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.directed_degree(node, Direction::Outgoing)
    }

    pub fn in_degree(&self, node: NodeId) -> usize {
        self.directed_degree(node, Direction::Incoming)
    }

    /// In-degree plus out-degree; a self-loop contributes 2.
    pub fn degree(&self, node: NodeId) -> usize {
        self.out_degree(node) + self.in_degree(node)
    }

    fn directed_degree(&self, node: NodeId, dir: Direction) -> usize {
        if !self.graph.contains_node(node) {
            return 0;
        }
        let others = self
            .graph
            .neighbors_directed(node, dir)
            .filter(|&n| n != node)
            .count();
        others + usize::from(self.graph.contains_edge(node, node))
    }

    /// (node, degree) for every node, in node order.
    pub fn degrees(&self) -> Vec<(NodeId, usize)> {
        let mut tally: FxHashMap<NodeId, usize> = FxHashMap::default();
        for (from, to, _) in self.graph.all_edges() {
            *tally.entry(from).or_default() += 1;
            *tally.entry(to).or_default() += 1;
        }
        self.graph
            .nodes()
            .map(|n| (n, tally.get(&n).copied().unwrap_or(0)))
            .collect()
    }

    /// Degrees in node order.
    pub fn degree_sequence(&self) -> Vec<u64> {
        self.degrees().into_iter().map(|(_, d)| d as u64).collect()
    }

    /// Node count per degree value: index = degree, length = max degree + 1.
    /// Empty graph yields an empty histogram.
    pub fn degree_histogram(&self) -> Vec<usize> {
        let degrees = self.degrees();
        let Some(max) = degrees.iter().map(|&(_, d)| d).max() else {
            return Vec::new();
        };
        let mut histogram = vec![0usize; max + 1];
        for (_, d) in degrees {
            histogram[d] += 1;
        }
        histogram
    }

    /// The underlying petgraph map.
    pub fn graph(&self) -> &DiGraphMap<NodeId, ()> {
        &self.graph
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}
