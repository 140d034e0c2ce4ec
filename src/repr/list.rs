use smallvec::SmallVec;

use crate::testing::test_graph_ops;

use super::*;

/// A single stored out-edge record of [`AdjList`]: target vertex plus weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutArc {
    pub target: Node,
    pub weight: Weight,
}

/// Number of out-edge records stored inline per vertex before spilling to the heap
const INLINE_ARCS: usize = 8;

/// A sparse adjacency-list representation.
///
/// Each vertex owns a growable sequence of [`OutArc`] records, with inline
/// storage for small degrees. Setting an edge weight scans the source
/// vertex's records and overwrites in place if the target is already present,
/// so no pair ever has a duplicate record.
///
/// All per-vertex operations are `O(deg(u))` and memory is `O(n + m)`, making
/// this the representation of choice for sparse graphs (see [`AdjMatrix`] for
/// the dense counterpart).
///
/// Neighbors are enumerated **most-recently-inserted-first**, mirroring a
/// prepend-on-insert linked list. This order is observable (e.g. in traversal
/// tie-breaking) and intentionally differs from [`AdjMatrix`].
#[derive(Clone)]
pub struct AdjList {
    arcs: Vec<SmallVec<[OutArc; INLINE_ARCS]>>,
}

impl GraphNodeOrder for AdjList {
    fn number_of_nodes(&self) -> NumNodes {
        self.arcs.len() as NumNodes
    }
}

impl WeightedAdjacency for AdjList {
    fn edge_weight(&self, u: Node, v: Node) -> Weight {
        assert!(v < self.len_as_node());
        self.arcs[u as usize]
            .iter()
            .find(|arc| arc.target == v)
            .map_or(0, |arc| arc.weight)
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        // Newest-first: records are appended, so walk them back to front
        self.arcs[u as usize]
            .iter()
            .rev()
            .filter_map(|arc| (arc.weight > 0).then_some((arc.target, arc.weight)))
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.arcs[u as usize]
            .iter()
            .filter(|arc| arc.weight > 0)
            .count() as NumNodes
    }
}

impl GraphNew for AdjList {
    fn new(n: NumNodes) -> Self {
        Self {
            arcs: vec![SmallVec::new(); n as usize],
        }
    }
}

impl WeightedEdgeEditing for AdjList {
    fn set_edge_weight(&mut self, u: Node, v: Node, weight: Weight) {
        assert!(v < self.len_as_node());
        let arcs = &mut self.arcs[u as usize];
        if let Some(arc) = arcs.iter_mut().find(|arc| arc.target == v) {
            arc.weight = weight;
        } else {
            arcs.push(OutArc { target: v, weight });
        }
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_list,
    AdjList,
    (GraphNew, WeightedAdjacency, WeightedEdgeEditing)
);
