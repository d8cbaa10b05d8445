use netdyn_analysis::network::*;
use proptest::prelude::*;

fn edges_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..30, 0i64..30), 0..120)
}

proptest! {
    #[test]
    fn clustering_in_unit_interval(edges in edges_strategy()) {
        let net = Network::from_edges(&edges);
        let report = compute_clustering_coefficients(&net);
        prop_assert_eq!(report.len(), net.node_count());
        for (&node, &c) in &report.coefficients {
            prop_assert!((0.0..=1.0).contains(&c), "c({}) = {}", node, c);
        }
        if let Some(avg) = report.average {
            prop_assert!((0.0..=1.0).contains(&avg));
        }
    }

    #[test]
    fn adjacency_nonzero_iff_edge(edges in edges_strategy()) {
        let net = Network::from_edges(&edges);
        let adj = compute_adjacency_matrix(&net, AdjacencyMode::Sparse, 0).unwrap();
        prop_assert_eq!(adj.nnz(), net.edge_count());
        for &(from, to) in &edges {
            prop_assert_eq!(adj.get_by_id(from, to), 1.0);
        }
        let order = adj.node_order();
        for (i, &a) in order.iter().enumerate() {
            for (j, &b) in order.iter().enumerate() {
                prop_assert_eq!(adj.get(i, j) != 0.0, net.contains_edge(a, b));
            }
        }
    }

    #[test]
    fn dense_and_sparse_agree(edges in edges_strategy()) {
        let net = Network::from_edges(&edges);
        let sparse = compute_adjacency_matrix(&net, AdjacencyMode::Sparse, 0).unwrap();
        let dense = compute_adjacency_matrix(&net, AdjacencyMode::Dense, 64).unwrap();
        prop_assert_eq!(sparse.to_dense(), dense.to_dense());
    }

    #[test]
    fn degrees_sum_to_twice_edges(edges in edges_strategy()) {
        let net = Network::from_edges(&edges);
        let total: u64 = net.degree_sequence().iter().sum();
        prop_assert_eq!(total, 2 * net.edge_count() as u64);
        let histogram_nodes: usize = net.degree_histogram().iter().sum();
        prop_assert_eq!(histogram_nodes, net.node_count());
    }

    #[test]
    fn degree_probabilities_sum_to_one(edges in edges_strategy()) {
        let net = Network::from_edges(&edges);
        let dist = DegreeDistribution::from_network(&net);
        if net.is_empty() {
            prop_assert!(dist.is_empty());
        } else {
            let total: f64 = dist.points.iter().map(|p| p.probability).sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn parse_counts_every_nonblank_line(lines in prop::collection::vec("[0-9a-z# \t]{0,12}", 0..40)) {
        let text = lines.join("\n");
        let list = parse_edge_list(text.as_bytes(), &EdgeListFormat::default());
        let nonblank = lines.iter().filter(|l| !l.trim().is_empty()).count();
        prop_assert_eq!(list.len() + list.comment_lines + list.skipped_lines, nonblank);
    }
}
