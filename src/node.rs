/*!
# Node Representation

Vertices are plain `u32` indices in the range `0..n` where `n` is the number
of vertices in the graph. Using `u32` instead of `usize/u64` halves the
memory footprint of adjacency storage on 64-bit targets and lets vertex
values be manipulated directly without a wrapper type.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// `Option<Node>` pads to eight bytes which doubles the size of a
/// `Vec<Option<Node>>`. Since `INVALID_NODE` can never name a real vertex,
/// we use it as the `NonZero` niche instead and keep four bytes per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNode(NonZero<Node>);

impl OptionalNode {
    /// Returns `Some(OptionalNode)` if `n != INVALID_NODE` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ INVALID_NODE) {
            Some(inner) => Some(OptionalNode(inner)),
            None => None,
        }
    }

    /// Gets the underlying node-value
    pub const fn get(&self) -> Node {
        self.0.get() ^ INVALID_NODE
    }
}
