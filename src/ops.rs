use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of nodes as Node
    fn len_as_node(&self) -> Node {
        self.number_of_nodes()
    }

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns a range of vertices.
    /// In contrast to `self.vertices()`, the range returned by `self.vertices_range()` does
    /// not borrow self and hence may be used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.len_as_node())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The shared query contract of all weighted graph representations.
///
/// An edge is considered **present** for enumeration purposes iff its stored
/// weight is *positive*; `edge_weight` still reports nonpositive stored
/// weights verbatim. The two facets agree as long as callers only store
/// positive weights for existing edges (a semantic convention, not enforced
/// structurally).
pub trait WeightedAdjacency: GraphNodeOrder + Sized {
    /// Returns the weight of the directed edge `(u, v)`, or `0` if no such edge exists.
    /// ** Panics if `u >= n || v >= n` **
    fn edge_weight(&self, u: Node, v: Node) -> Weight;

    /// Returns an iterator over all nodes `v` with `edge_weight(u, v) > 0`.
    /// ** Panics if `u >= n` **
    ///
    /// The enumeration order is representation-defined and observable:
    /// [`AdjMatrix`](crate::repr::AdjMatrix) yields neighbors in ascending index order,
    /// [`AdjList`](crate::repr::AdjList) in most-recently-inserted-first order. Traversals
    /// inherit this order when breaking ties between equidistant neighbors.
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Like [`WeightedAdjacency::neighbors_of`] but yields each neighbor together with its weight.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of nodes `v` with `edge_weight(u, v) > 0`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns *true* if the edge `(u, v)` is present, i.e. has positive weight.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_weight(u, v) > 0
    }

    /// Returns an iterator over the out-degrees of all nodes
    fn out_degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.out_degree_of(u))
    }

    /// Returns the maximum out-degree in the graph
    fn max_out_degree(&self) -> NumNodes {
        self.out_degrees().max().unwrap_or(0)
    }

    /// Returns an iterator to all vertices with at least one out-edge
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.out_degrees()
            .enumerate()
            .filter_map(|(u, d)| (d > 0).then_some(u as Node))
    }

    /// Returns the number of present directed edges, i.e. the sum of all out-degrees
    fn number_of_edges(&self) -> NumEdges {
        self.out_degrees().map(|d| d as NumEdges).sum()
    }

    /// Returns *true* if the graph has no present edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }

    /// Returns the neighborhood of a given vertex as a NodeBitSet.
    /// ** Panics if `u >= n` **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.len_as_node(), self.neighbors_of(u))
    }

    /// Returns an iterator over all present edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u, v, w))
    }

    /// Returns an iterator over all present edges in the graph
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices_range().flat_map(move |u| self.edges_of(u))
    }

    /// Returns an iterator over all present edges in the graph in sorted order
    fn ordered_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        let mut edges = self.edges().collect_vec();
        edges.sort_unstable();
        edges.into_iter()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to set/overwrite edge weights
pub trait WeightedEdgeEditing {
    /// Sets or overwrites the weight of the directed edge `(u, v)`.
    /// Never creates a duplicate record for the same pair and has no
    /// effect on the reverse edge `(v, u)`.
    /// ** Panics if `u >= n || v >= n` **
    fn set_edge_weight(&mut self, u: Node, v: Node, weight: Weight);

    /// Sets both `(u, v)` and `(v, u)` to the same weight as one logical operation.
    /// ** Panics if `u >= n || v >= n` **
    fn set_undirected_edge_weight(&mut self, u: Node, v: Node, weight: Weight) {
        self.set_edge_weight(u, v, weight);
        self.set_edge_weight(v, u, weight);
    }

    /// Sets all directed edge weights in the collection
    fn set_edge_weights(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(Into::into) {
            self.set_edge_weight(u, v, w);
        }
    }

    /// Sets all edge weights in the collection, in both directions each
    fn set_undirected_edge_weights(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(Into::into) {
            self.set_undirected_edge_weight(u, v, w);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of weighted edges and a number of nodes
pub trait GraphFromWeightedEdges {
    /// Create a graph from a number of nodes and an iterator over directed weighted edges
    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self;

    /// Create a graph from a number of nodes and an iterator over undirected weighted edges
    fn from_undirected_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self;
}

impl<G: GraphNew + WeightedEdgeEditing> GraphFromWeightedEdges for G {
    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let mut graph = Self::new(n);
        graph.set_edge_weights(edges);
        graph
    }

    fn from_undirected_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let mut graph = Self::new(n);
        graph.set_undirected_edge_weights(edges);
        graph
    }
}
