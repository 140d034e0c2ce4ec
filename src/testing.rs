/// Every representation should implement the full query/editing contract.
/// This macro stamps the shared randomized test-suite into a representation module.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops};
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of `m` random positive-weight edges for nodes `0..n`.
            /// Pairs may repeat; later entries overwrite earlier ones on insertion.
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<WeightedEdge> {
                (0..m)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let w: Weight = rng.random_range(1..=100);

                        WeightedEdge(u, v, w)
                    })
                    .collect_vec()
            }

            /// Reference weight map with the same last-write-wins semantics as the graphs
            fn reference_weights(edges: &[WeightedEdge]) -> FxHashMap<(Node, Node), Weight> {
                let mut weights = FxHashMap::default();
                for &WeightedEdge(u, v, w) in edges {
                    weights.insert((u, v), w);
                }
                weights
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.number_of_edges(), 0);
                assert!(graph.is_singleton_graph());

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(graph.edge_weight(u, v), 0);
                        assert!(!graph.has_edge(u, v));
                    }
                    assert_eq!(graph.out_degree_of(u), 0);
                    assert_eq!(graph.neighbors_of(u).count(), 0);
                }
            }
        }
    };
    ($graph:ident: WeightedAdjacency) => {
        #[test]
        fn test_weighted_adjacency() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m as NumEdges);
                        let weights = reference_weights(&edges);

                        let graph = <$graph>::from_weighted_edges(n, edges.iter().copied());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges() as usize, weights.len());

                        for u in 0..n {
                            for v in 0..n {
                                assert_eq!(
                                    graph.edge_weight(u, v),
                                    weights.get(&(u, v)).copied().unwrap_or(0)
                                );
                            }

                            let degree = (0..n).filter(|v| weights.contains_key(&(u, *v))).count();
                            assert_eq!(graph.out_degree_of(u) as usize, degree);
                            assert_eq!(graph.neighbors_of(u).count(), degree);

                            assert!(graph.neighbors_of(u).all_unique());
                            assert!(graph.neighbors_of(u).all(|v| graph.has_edge(u, v)));

                            assert_eq!(
                                graph.weighted_neighbors_of(u).collect_vec(),
                                graph
                                    .neighbors_of(u)
                                    .map(|v| (v, graph.edge_weight(u, v)))
                                    .collect_vec()
                            );
                        }

                        assert_eq!(
                            graph.number_of_edges(),
                            graph.out_degrees().sum::<NumNodes>() as NumEdges
                        );
                        assert_eq!(
                            graph.max_out_degree(),
                            graph.out_degrees().max().unwrap_or(0)
                        );
                        assert_eq!(
                            graph.vertices_with_neighbors().collect_vec(),
                            (0..n).filter(|&u| graph.out_degree_of(u) > 0).collect_vec()
                        );
                        assert_eq!(graph.ordered_edges().collect_vec(), {
                            let mut expected = weights
                                .iter()
                                .map(|(&(u, v), &w)| WeightedEdge(u, v, w))
                                .collect_vec();
                            expected.sort_unstable();
                            expected
                        });
                    }
                }
            }
        }
    };
    ($graph:ident: WeightedEdgeEditing) => {
        #[test]
        fn test_weighted_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [10 as NumNodes, 20, 50] {
                let mut graph = <$graph>::new(n);
                let edges = random_edges(rng, n, (n * 5) as NumEdges);

                for &WeightedEdge(u, v, w) in &edges {
                    graph.set_edge_weight(u, v, w);
                    assert_eq!(graph.edge_weight(u, v), w);
                }

                // overwriting must update in place, never duplicate a record
                for &WeightedEdge(u, v, w) in &edges {
                    let degree = graph.out_degree_of(u);
                    graph.set_edge_weight(u, v, w + 1);

                    assert_eq!(graph.edge_weight(u, v), w + 1);
                    assert_eq!(graph.out_degree_of(u), degree);
                    assert!(graph.neighbors_of(u).all_unique());
                }

                // a directed set must leave the reverse edge untouched
                let mut graph = <$graph>::new(n);
                graph.set_edge_weight(1, 2, 42);
                assert_eq!(graph.edge_weight(1, 2), 42);
                assert_eq!(graph.edge_weight(2, 1), 0);

                // setting weight 0 removes the edge from enumeration
                graph.set_edge_weight(1, 2, 0);
                assert_eq!(graph.edge_weight(1, 2), 0);
                assert_eq!(graph.out_degree_of(1), 0);
                assert_eq!(graph.neighbors_of(1).count(), 0);

                // negative weights are stored verbatim but invisible to enumeration
                graph.set_edge_weight(1, 2, -7);
                assert_eq!(graph.edge_weight(1, 2), -7);
                assert!(!graph.has_edge(1, 2));
                assert_eq!(graph.out_degree_of(1), 0);
                assert!(graph.neighbors_of(1).all(|v| v != 2));
                assert_eq!(graph.weighted_neighbors_of(1).count(), 0);

                // undirected sets write both directions atomically
                let mut graph = <$graph>::new(n);
                for &WeightedEdge(u, v, w) in &edges {
                    graph.set_undirected_edge_weight(u, v, w);
                    assert_eq!(graph.edge_weight(u, v), w);
                    assert_eq!(graph.edge_weight(v, u), w);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
