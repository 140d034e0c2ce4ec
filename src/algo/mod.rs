/*!
# Graph Algorithms

This module provides the traversal algorithms built on top of the graph
representations in this crate. All algorithms are re-exported at the top level
of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
Algorithms consume graphs only through the shared contract of [`crate::ops`],
making them agnostic to the concrete representation. If possible, algorithms
are provided as **iterators**, making it easy to consume results lazily.
*/

mod bfs;

use crate::prelude::*;

pub use bfs::*;
