/*!
# Graph Algorithms

Algorithms are computed over the capability traits in [`crate::ops`] rather
than a concrete representation, so anything exposing a vertex range and
neighbor iteration can be traversed.
*/

use crate::{ops::*, *};

mod bfs;

pub use bfs::*;
