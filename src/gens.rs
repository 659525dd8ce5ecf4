/*!
# Random Graph Generation

Generators are configurable structs following the builder pattern: set the
parameters, then call [`GraphGenerator::generate`] or
[`GraphGenerator::stream`] with an explicit random number generator.

Passing the `Rng` in (instead of sampling from a hidden global source) makes
every generated graph reproducible from a seed. This is a deliberate
behavior change from the classic unseeded formulation of the random-graph
constructor.
*/

use rand::Rng;

use crate::{repr::MultiGraph, *};

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates the full list of random edges
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over generated edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Samples a fixed number of edges between uniformly random vertex pairs.
/// Self-loops and parallel edges are possible and intentionally not
/// filtered; the expected running time is proportional to the number of
/// edges requested.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomPairs {
    n: NumNodes,
    m: NumEdges,
}

impl RandomPairs {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Sets the number of edges
    pub fn edges(mut self, m: NumEdges) -> Self {
        self.m = m;
        self
    }
}

impl GraphGenerator for RandomPairs {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        assert!(self.n > 0, "at least one node must be generated");
        let n = self.n;
        (0..self.m).map(move |_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
    }
}

/// Convenience constructors for random graph instances
pub trait RandomGraph: Sized {
    /// Creates a graph with `n` vertices and `m` edges between uniformly
    /// random vertex pairs
    fn random<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self
    where
        R: Rng;
}

impl RandomGraph for MultiGraph {
    fn random<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, RandomPairs::new().nodes(n).edges(m).stream(rng))
    }
}
