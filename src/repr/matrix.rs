use crate::testing::test_graph_ops;

use super::*;

/// A dense adjacency-matrix representation.
///
/// Weights are stored in a single flat row-major array of `n * n` cells where
/// cell `(u, v)` holds the weight of the directed edge `u -> v`. The array is
/// zero-initialized at construction since weight `0` encodes "no edge".
///
/// Weight lookups and updates are `O(1)`; enumerating or counting neighbors
/// scans the full row in `O(n)`, yielding neighbors in **ascending index
/// order**. Memory is `O(n^2)` regardless of the number of edges, which makes
/// this representation a good fit for dense graphs and a wasteful one for
/// sparse graphs (prefer [`AdjList`] there).
#[derive(Clone)]
pub struct AdjMatrix {
    weights: Vec<Weight>,
    num_nodes: NumNodes,
}

impl AdjMatrix {
    /// Flat index of cell `(u, v)`: row `u` holds all out-edges of `u`.
    /// ** Panics if `u >= n || v >= n` **
    #[inline]
    fn cell(&self, u: Node, v: Node) -> usize {
        assert!(u < self.num_nodes && v < self.num_nodes);
        u as usize * self.num_nodes as usize + v as usize
    }

    /// The full weight row of a given vertex.
    /// ** Panics if `u >= n` **
    #[inline]
    fn row(&self, u: Node) -> &[Weight] {
        let begin = self.cell(u, 0);
        &self.weights[begin..begin + self.num_nodes as usize]
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.num_nodes
    }
}

impl WeightedAdjacency for AdjMatrix {
    fn edge_weight(&self, u: Node, v: Node) -> Weight {
        self.weights[self.cell(u, v)]
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, &w)| (w > 0).then_some((v as Node, w)))
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.row(u).iter().filter(|&&w| w > 0).count() as NumNodes
    }
}

impl GraphNew for AdjMatrix {
    fn new(n: NumNodes) -> Self {
        Self {
            weights: vec![0; n as usize * n as usize],
            num_nodes: n,
        }
    }
}

impl WeightedEdgeEditing for AdjMatrix {
    fn set_edge_weight(&mut self, u: Node, v: Node, weight: Weight) {
        let cell = self.cell(u, v);
        self.weights[cell] = weight;
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_matrix,
    AdjMatrix,
    (GraphNew, WeightedAdjacency, WeightedEdgeEditing)
);
