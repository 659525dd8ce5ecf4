/*!
`tinyalgs` is a small library of independent classic algorithm
implementations used for teaching:

- an **undirected multigraph** over vertices numbered `0` to `n - 1`,
  stored as insertion-ordered adjacency bags that keep self-loops and
  parallel edges intact,
- **breadth-first shortest paths**: a read-only index answering
  reachability, hop-distance, and path-reconstruction queries from one or
  many source vertices, with a diagnostic checker that re-derives the BFS
  optimality conditions from first principles,
- **Knuth-Morris-Pratt** substring search over byte strings,
- stable **merge sort**, in-place and index-based.

The components are deliberately independent; none depends on another at
runtime.

# Representation

Vertices are `u32` values in `0..n` (see [`node`]), edges are the
tuple-struct `Edge(Node, Node)`. Graph algorithms are generic over the
capability traits in [`ops`], most importantly [`ops::AdjacencyList`], so
they work with any type exposing a vertex range and neighbor iteration.

# Usage

```
use tinyalgs::{algo::ShortestPathIndex, prelude::*};

let mut graph = MultiGraph::new(3);
graph.add_edge(0, 1);
graph.add_edge(1, 2);

let index = ShortestPathIndex::new(&graph, 0)?;
assert_eq!(index.distance_to(2)?, Some(2));
assert_eq!(index.path_to(2)?, Some(vec![0, 1, 2]));
# Ok::<(), tinyalgs::Error>(())
```

Graphs can also be generated at random from an explicit seedable rng (see
[`gens`]) or read from whitespace-delimited edge lists (see [`io`]).

# Concurrency

Everything is single-threaded and synchronous; no type provides internal
synchronization. A [`repr::MultiGraph`] must not be mutated while a
[`algo::ShortestPathIndex`] derived from it is still in use: the index is a
snapshot without a back-reference and goes silently stale.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod search;
pub mod sort;

pub use edge::{Edge, NumEdges};
pub use error::{Error, Result};
pub use node::{Node, NodeBitSet, NumNodes, OptionalNode, INVALID_NODE};

/// Includes definitions for nodes, edges, errors, the basic graph operation
/// traits, and the multigraph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
