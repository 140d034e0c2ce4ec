/*!
`wgraphs` is a small graph data structure & algorithms library for graphs that are
- **weighted** : Every directed edge carries a signed integer weight
- **directed** : Undirected edges are modeled as two directed edges set in one call

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
Edge weights are `i32` where a weight of `0` means "no edge"; the enumeration
operations treat only positive weights as present edges.

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`AdjMatrix`](crate::repr::AdjMatrix) — dense flat adjacency matrix, `O(n^2)` memory, `O(1)` weight access
- [`AdjList`](crate::repr::AdjList) — sparse per-vertex adjacency lists, `O(n + m)` memory, `O(deg)` weight access

Both implement the same trait contract and are interchangeable from the
caller's view. The one observable difference is the order in which neighbors
are enumerated (ascending vs. most-recently-inserted-first), which traversals
inherit when breaking ties between equidistant vertices.

# Design

Algorithms never depend on a concrete representation: they are generic over
the capability traits in [`ops`] (node order, weight queries, neighbor
enumeration). The BFS engine in [`algo`] is provided both as a lazy iterator
([`algo::BfsSearch`]) and as a materialized distance/predecessor tree
([`algo::BfsTree`]), and is exposed directly on graphs via the
[`algo::Traversal`] trait (`graph.bfs_tree(source)`).

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges & weights, basic graph operations, and both graph representations,
- [`algo`] includes the traversal algorithms implemented on graphs itself, such as BFS (`graph.bfs(start_node)`),
- [`repr`] includes the concrete storage backends.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{algo::*, prelude::*};

let mut graph = AdjList::new(4);
graph.set_undirected_edge_weight(0, 1, 5);
graph.set_undirected_edge_weight(1, 2, 3);

let tree = graph.bfs_tree(0);
assert_eq!(tree.distance_of(2), Some(2));
assert_eq!(tree.parent_of(2), Some(1));
assert!(!tree.is_reached(3));
```

# When to use

You should only use this library if the following apply:
- Your graphs are unlabelled with integer edge weights
- You require only basic functionality for graphs
- Hop-distance (BFS) is all the shortest-path machinery you need

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive
library for general graphs in *Rust*, including weight-aware shortest-path
algorithms such as Dijkstra.
*/

pub mod algo;
pub mod edge;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, all basic graph operation traits as well as both implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
