/*!
Breadth-first search over any representation implementing the shared
query contract.

This module provides:
- [`BfsSearch`], a lazy iterator yielding nodes in BFS order together with
  their predecessor in the traversal tree.
- [`BfsTree`], the materialized result of a full search: per-node hop
  distances and the predecessor tree, with path reconstruction.
- The [`Traversal`] trait exposing both directly as methods on graphs.

BFS only counts *hops*: edge weights determine which edges exist (positive
weight) but their magnitude is ignored. For weight-aware shortest paths a
different algorithm (e.g. Dijkstra) is required, which this crate does not
provide.
*/

use std::collections::VecDeque;

use super::*;

/// A single step of a breadth-first search: the discovered node and its
/// predecessor in the traversal tree (`None` for the start node).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsStep {
    pub node: Node,
    pub predecessor: Option<Node>,
}

/// Breadth-first search iterator over a graph, visiting all nodes reachable
/// from a start node in level order.
///
/// Maintains a FIFO frontier of discovered-but-not-yet-expanded nodes and a
/// bitset of discovered nodes. Nodes are marked discovered when enqueued, so
/// each node is yielded at most once. Ties between equidistant neighbors are
/// broken solely by the representation's neighbor enumeration order.
pub struct BfsSearch<'a, G>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    discovered: NodeBitSet,
    queue: VecDeque<BfsStep>,
}

impl<'a, G> BfsSearch<'a, G>
where
    G: WeightedAdjacency,
{
    /// Creates a new BFS iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.len_as_node());

        let mut discovered = graph.vertex_bitset_unset();
        discovered.set_bit(start);

        Self {
            graph,
            discovered,
            queue: VecDeque::from(vec![BfsStep {
                node: start,
                predecessor: None,
            }]),
        }
    }

    /// Checks if a given node `u` has already been discovered.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.discovered.get_bit(u)
    }
}

impl<G> Iterator for BfsSearch<'_, G>
where
    G: WeightedAdjacency,
{
    type Item = BfsStep;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(step.node) {
            if !self.discovered.set_bit(v) {
                self.queue.push_back(BfsStep {
                    node: v,
                    predecessor: Some(step.node),
                });
            }
        }

        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.discovered.cardinality() as usize + self.queue.len()),
        )
    }
}

/// The materialized result of a breadth-first search from a single source:
/// minimum hop-distances and the predecessor tree.
///
/// Both arrays have length `n` and are freshly produced per search. Entries
/// of unreached nodes hold [`INVALID_NODE`]; the source's parent entry does
/// too ("no predecessor"). Prefer the `Option`-typed accessors over the raw
/// slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    source: Node,
    distance: Vec<NumNodes>,
    parent: Vec<Node>,
}

impl BfsTree {
    /// Runs a full BFS on `graph` from `source` and records distances and parents.
    /// ** Panics if `source >= n` **
    pub fn new<G>(graph: &G, source: Node) -> Self
    where
        G: WeightedAdjacency,
    {
        let mut distance = vec![INVALID_NODE; graph.len()];
        let mut parent = vec![INVALID_NODE; graph.len()];

        for step in BfsSearch::new(graph, source) {
            match step.predecessor {
                Some(p) => {
                    distance[step.node as usize] = distance[p as usize] + 1;
                    parent[step.node as usize] = p;
                }
                None => distance[step.node as usize] = 0,
            }
        }

        Self {
            source,
            distance,
            parent,
        }
    }

    /// The node the search was started from
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns *true* if `u` was reached by the search.
    /// ** Panics if `u >= n` **
    pub fn is_reached(&self, u: Node) -> bool {
        self.distance[u as usize] != INVALID_NODE
    }

    /// Returns the number of edges on a hop-minimal path from the source to `u`,
    /// or `None` if `u` was not reached.
    /// ** Panics if `u >= n` **
    pub fn distance_of(&self, u: Node) -> Option<NumNodes> {
        let d = self.distance[u as usize];
        (d != INVALID_NODE).then_some(d)
    }

    /// Returns the predecessor of `u` in the traversal tree, or `None` if `u`
    /// is the source or was not reached.
    /// ** Panics if `u >= n` **
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        let p = self.parent[u as usize];
        (p != INVALID_NODE).then_some(p)
    }

    /// The raw distance array; unreached nodes hold [`INVALID_NODE`]
    pub fn distances(&self) -> &[NumNodes] {
        &self.distance
    }

    /// The raw parent array; the source and unreached nodes hold [`INVALID_NODE`]
    pub fn parents(&self) -> &[Node] {
        &self.parent
    }

    /// Reconstructs a hop-minimal path from the source to `u` by walking the
    /// parent tree, including both endpoints. Returns `None` if `u` was not
    /// reached; the path of the source itself is `[source]`.
    /// ** Panics if `u >= n` **
    pub fn path_to(&self, u: Node) -> Option<Vec<Node>> {
        if !self.is_reached(u) {
            return None;
        }

        let mut path = vec![u];
        let mut node = u;
        while let Some(p) = self.parent_of(node) {
            path.push(p);
            node = p;
        }

        path.reverse();
        Some(path)
    }
}

/// Provides convenient traversal methods directly on graph representations
pub trait Traversal: WeightedAdjacency + Sized {
    /// Returns an iterator that traverses nodes reachable from `start` in
    /// **breadth-first search (BFS) order**, yielding predecessor information.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = AdjList::from_weighted_edges(2, [(0, 1, 7)]);
    ///
    /// let order: Vec<_> = g.bfs(0).map(|step| step.node).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BfsSearch<'_, Self> {
        BfsSearch::new(self, start)
    }

    /// Runs a full BFS from `source` and returns the distances and the
    /// predecessor tree.
    /// ** Panics if `source >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let g = AdjMatrix::from_undirected_weighted_edges(3, [(0, 1, 5), (1, 2, 2)]);
    ///
    /// let tree = g.bfs_tree(0);
    /// assert_eq!(tree.distance_of(2), Some(2));
    /// assert_eq!(tree.parent_of(2), Some(1));
    /// ```
    fn bfs_tree(&self, source: Node) -> BfsTree {
        BfsTree::new(self, source)
    }
}

impl<G> Traversal for G where G: WeightedAdjacency + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// The 6-vertex scenario: undirected weighted edges, vertex 5 isolated.
    ///
    ///  0 -5- 1 -4- 2
    ///        |    /
    ///       10   7
    ///        |  /
    ///        3 -100- 4     5
    fn scenario_graph<G: GraphNew + WeightedEdgeEditing>() -> G {
        G::from_undirected_weighted_edges(
            6,
            [(0, 1, 5), (1, 2, 4), (1, 3, 10), (2, 3, 7), (3, 4, 100)],
        )
    }

    fn check_scenario<G: WeightedAdjacency>(g: &G) {
        assert_eq!(g.edge_weight(0, 1), 5);
        assert_eq!(g.edge_weight(1, 0), 5);
        assert_eq!(g.edge_weight(3, 4), 100);
        assert_eq!(g.edge_weight(0, 2), 0);

        assert_eq!(g.out_degrees().collect_vec(), vec![1, 3, 2, 3, 1, 0]);
        for u in g.vertices() {
            assert_eq!(g.neighbors_of(u).count() as NumNodes, g.out_degree_of(u));
        }

        let tree = g.bfs_tree(0);
        assert_eq!(
            tree.distances(),
            [0, 1, 2, 2, 3, INVALID_NODE],
            "vertex 5 is isolated and must stay unreached"
        );
        assert_eq!(tree.parent_of(0), None);
        assert_eq!(tree.parent_of(1), Some(0));
        assert!(!tree.is_reached(5));
        assert_eq!(tree.parent_of(5), None);
    }

    #[test]
    fn scenario_adj_matrix() {
        check_scenario(&scenario_graph::<AdjMatrix>());
    }

    #[test]
    fn scenario_adj_list() {
        check_scenario(&scenario_graph::<AdjList>());
    }

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjMatrix::from_undirected_weighted_edges(
            6,
            [
                (1, 2, 1),
                (1, 0, 1),
                (4, 3, 1),
                (0, 5, 1),
                (2, 4, 1),
                (5, 4, 1),
            ],
        );

        let order: Vec<Node> = graph.bfs(1).map(|step| step.node).collect();
        assert_eq!(order.len(), 6);

        // AdjMatrix enumerates neighbors in ascending order
        assert_eq!(order, vec![1, 0, 2, 5, 4, 3]);
    }

    #[test]
    fn bfs_respects_edge_direction() {
        let graph = AdjList::from_weighted_edges(4, [(0, 1, 1), (1, 2, 1), (3, 2, 1)]);

        let tree = graph.bfs_tree(0);
        assert_eq!(tree.distance_of(2), Some(2));
        assert_eq!(tree.distance_of(3), None);

        // no outgoing edges from 2, so nothing but 2 itself is reached
        let tree = graph.bfs_tree(2);
        assert_eq!(tree.distances(), [INVALID_NODE, INVALID_NODE, 0, INVALID_NODE]);
    }

    #[test]
    fn bfs_ignores_weight_magnitude() {
        // direct heavy edge 0-3 vs light 2-hop detour: BFS counts hops only
        let graph = AdjMatrix::from_undirected_weighted_edges(
            4,
            [(0, 3, 1000), (0, 1, 1), (1, 2, 1), (2, 3, 1)],
        );

        let tree = graph.bfs_tree(0);
        assert_eq!(tree.distance_of(3), Some(1));
        assert_eq!(tree.parent_of(3), Some(0));
    }

    #[test]
    fn bfs_tree_invariants() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [2 as NumNodes, 10, 50] {
            for _ in 0..10 {
                let edges = (0..n * 3)
                    .map(|_| {
                        (
                            rng.random_range(0..n),
                            rng.random_range(0..n),
                            rng.random_range(1..=100),
                        )
                    })
                    .collect_vec();

                let graph = AdjList::from_weighted_edges(n, edges.iter().copied());
                let source = rng.random_range(0..n);
                let tree = graph.bfs_tree(source);

                assert_eq!(tree.source(), source);
                assert_eq!(tree.distances().len(), graph.len());
                assert_eq!(tree.parents().len(), graph.len());
                assert_eq!(tree.distance_of(source), Some(0));
                assert_eq!(tree.parent_of(source), None);

                for v in graph.vertices() {
                    match tree.parent_of(v) {
                        Some(p) => {
                            assert!(graph.has_edge(p, v));
                            assert_eq!(tree.distance_of(v), tree.distance_of(p).map(|d| d + 1));
                        }
                        None => assert!(v == source || !tree.is_reached(v)),
                    }

                    // expanding a reached node can never improve a neighbor's distance
                    if let Some(d) = tree.distance_of(v) {
                        for w in graph.neighbors_of(v) {
                            assert!(tree.distance_of(w).is_some_and(|dw| dw <= d + 1));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn bfs_is_idempotent() {
        let graph = scenario_graph::<AdjList>();
        assert_eq!(graph.bfs_tree(0), graph.bfs_tree(0));
        assert_eq!(graph.bfs_tree(3), graph.bfs_tree(3));
    }

    #[test]
    fn bfs_yields_each_node_once() {
        let graph = scenario_graph::<AdjMatrix>();
        let order = graph.bfs(1).map(|step| step.node).collect_vec();
        let unique: FxHashSet<Node> = order.iter().copied().collect();
        assert_eq!(order.len(), unique.len());
    }

    #[test]
    fn path_reconstruction() {
        let graph = scenario_graph::<AdjList>();
        let tree = graph.bfs_tree(0);

        assert_eq!(tree.path_to(0), Some(vec![0]));
        assert_eq!(tree.path_to(1), Some(vec![0, 1]));
        assert_eq!(tree.path_to(4).map(|p| p.len()), Some(4));
        assert_eq!(tree.path_to(5), None);

        let path = tree.path_to(4).unwrap();
        assert_eq!(path[0], 0);
        assert_eq!(*path.last().unwrap(), 4);
        for (u, v) in path.iter().tuple_windows() {
            assert!(graph.has_edge(*u, *v));
        }
    }

    /// Matrix and list must agree on weights, degrees and BFS distances for
    /// any insertion sequence; parent arrays may differ as the two
    /// representations enumerate equidistant neighbors in different orders.
    #[test]
    fn cross_representation_equivalence() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in [5 as NumNodes, 20, 50] {
            for _ in 0..20 {
                // duplicates on purpose: later insertions must overwrite
                let edges = (0..n * 4)
                    .map(|_| {
                        (
                            rng.random_range(0..n),
                            rng.random_range(0..n),
                            rng.random_range(1..=100),
                        )
                    })
                    .collect_vec();

                let matrix = AdjMatrix::from_weighted_edges(n, edges.iter().copied());
                let list = AdjList::from_weighted_edges(n, edges.iter().copied());

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(matrix.edge_weight(u, v), list.edge_weight(u, v));
                    }
                    assert_eq!(matrix.out_degree_of(u), list.out_degree_of(u));
                    assert_eq!(
                        matrix.neighbors_of(u).sorted().collect_vec(),
                        list.neighbors_of(u).sorted().collect_vec()
                    );
                }

                for source in 0..n {
                    assert_eq!(
                        matrix.bfs_tree(source).distances(),
                        list.bfs_tree(source).distances()
                    );
                }
            }
        }
    }
}
