/*!
# Graph Representations

This module defines the concrete **weighted graph** storage backends.

## Provided Representations

- [`AdjMatrix`] — dense flat adjacency matrix, `O(n^2)` memory, `O(1)` weight lookup.
- [`AdjList`] — sparse per-vertex adjacency lists, `O(n + m)` memory, `O(deg)` weight lookup.

Both implement the shared contract of [`crate::ops`] and are fully
interchangeable from the caller's view, up to the documented difference in
neighbor enumeration order.
*/

use crate::{edge::*, node::*, ops::*};

mod list;
mod matrix;

pub use list::*;
pub use matrix::*;
