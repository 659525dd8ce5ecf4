/*!
# Multigraph Representation

A mutable undirected multigraph over the fixed vertex range `0..n`. Each
vertex owns an *adjacency bag*: an insertion-ordered sequence of neighbor
ids that tolerates duplicates, so parallel edges and self-loops round-trip
unchanged. Iteration over a bag yields the most recently added neighbor
first, like the head-inserting linked bag this models.
*/

use std::fmt;

use crate::{ops::*, *};

/// Insertion-ordered, duplicate-tolerant neighbor storage for one vertex.
///
/// Entries are appended to the backing vector and iterated in reverse, which
/// is equivalent to inserting at the head of a linked list.
#[derive(Debug, Default, Clone)]
pub struct AdjBag(Vec<Node>);

impl AdjBag {
    fn push(&mut self, u: Node) {
        self.0.push(u);
    }

    /// Returns an iterator over the bag, most recently added entry first
    pub fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().rev().copied()
    }

    /// Returns the number of entries (duplicates included)
    pub fn cardinality(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Returns *true* if the bag has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An undirected multigraph with a fixed number of vertices.
///
/// Every edge `(u, v)` is stored twice: `v` in `u`'s bag and `u` in `v`'s
/// bag (a self-loop puts `v` twice into the same bag), so the degree sum is
/// always `2 * number_of_edges`. Edges can only be added, never removed.
///
/// `Clone` yields a deep copy with identical counts and identical per-vertex
/// neighbor order.
#[derive(Debug, Clone)]
pub struct MultiGraph {
    bags: Vec<AdjBag>,
    num_edges: NumEdges,
}

impl MultiGraph {
    /// Creates an empty graph with `n` singleton vertices
    pub fn new(n: NumNodes) -> Self {
        Self {
            bags: vec![AdjBag::default(); n as usize],
            num_edges: 0,
        }
    }

    /// Creates a graph with `n` vertices from an iterator over edges.
    /// ** Panics if any endpoint is `>= n` **
    pub fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    fn check_vertex(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex: u,
                len: self.number_of_nodes(),
            })
        }
    }

    /// Adds the undirected edge `(u, v)` to the graph. Duplicate edges and
    /// self-loops are permitted; the edge count increases by exactly one
    /// either way.
    pub fn try_add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.num_edges += 1;
        self.bags[u as usize].push(v);
        self.bags[v as usize].push(u);
        Ok(())
    }

    /// Adds the undirected edge `(u, v)` to the graph.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge(&mut self, u: Node, v: Node) {
        self.try_add_edge(u, v).expect("edge endpoints in range");
    }

    /// Adds all edges in the collection.
    /// ** Panics if any endpoint is `>= n` **
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for edge in edges {
            let Edge(u, v) = edge.into();
            self.add_edge(u, v);
        }
    }

    /// Returns an iterator over the neighborhood of `u` in storage order
    /// (most recently added first), or [`Error::OutOfRange`] if `u >= n`
    pub fn try_neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        self.check_vertex(u)?;
        Ok(self.bags[u as usize].neighbors())
    }

    /// Returns the number of neighbor entries of `u` (a self-loop counts
    /// twice), or [`Error::OutOfRange`] if `u >= n`
    pub fn try_degree_of(&self, u: Node) -> Result<NumNodes> {
        self.check_vertex(u)?;
        Ok(self.bags[u as usize].cardinality())
    }
}

impl GraphOrder for MultiGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.bags.len() as NumNodes
    }
}

impl GraphEdgeOrder for MultiGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for MultiGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.bags[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.bags[u as usize].cardinality()
    }
}

impl fmt::Display for MultiGraph {
    /// Renders vertex/edge counts followed by one line per vertex with its
    /// neighbors in storage order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;
        for u in self.vertices() {
            write!(f, "{u}: ")?;
            for v in self.neighbors_of(u) {
                write!(f, "{v} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn new_graph_is_singleton() {
        for n in [0, 1, 17] {
            let graph = MultiGraph::new(n);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.number_of_edges(), 0);
            assert!(graph.is_singleton());
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
        }
    }

    #[test]
    fn add_edge_updates_both_bags() {
        let mut graph = MultiGraph::new(4);

        graph.add_edge(0, 2);
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.neighbors_of(0).contains(&2));
        assert!(graph.neighbors_of(2).contains(&0));

        // parallel edge still counts
        graph.add_edge(0, 2);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.neighbors_of(0).filter(|&v| v == 2).count(), 2);
    }

    #[test]
    fn self_loop_counts_once_but_doubles_degree() {
        let mut graph = MultiGraph::new(3);
        graph.add_edge(1, 1);

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degree_of(1), 2);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![1, 1]);
    }

    #[test]
    fn degree_sum_is_twice_edge_count() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..20 {
            let n = rng.random_range(1..50);
            let m = rng.random_range(0..200);

            let mut graph = MultiGraph::new(n);
            for _ in 0..m {
                graph.add_edge(rng.random_range(0..n), rng.random_range(0..n));
            }

            assert_eq!(graph.number_of_edges(), m);
            assert_eq!(graph.degrees().map(|d| d as u64).sum::<u64>(), 2 * m as u64);
            assert!(graph.max_degree() <= 2 * m);
        }
    }

    #[test]
    fn neighbors_iterate_newest_first() {
        let mut graph = MultiGraph::new(6);
        for v in [2, 1, 5] {
            graph.add_edge(0, v);
        }

        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![5, 1, 2]);

        // restartable
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![5, 1, 2]);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut graph = MultiGraph::new(3);

        assert!(matches!(
            graph.try_add_edge(0, 3),
            Err(Error::OutOfRange { vertex: 3, len: 3 })
        ));
        assert!(matches!(
            graph.try_add_edge(7, 0),
            Err(Error::OutOfRange { vertex: 7, len: 3 })
        ));
        assert_eq!(graph.number_of_edges(), 0);

        assert!(graph.try_neighbors_of(3).is_err());
        assert!(graph.try_degree_of(3).is_err());
        assert!(graph.try_neighbors_of(2).is_ok());
    }

    #[test]
    fn clone_preserves_counts_and_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        let n = 20;
        let mut graph = MultiGraph::new(n);
        for _ in 0..60 {
            graph.add_edge(rng.random_range(0..n), rng.random_range(0..n));
        }

        let copy = graph.clone();
        assert_eq!(copy.number_of_nodes(), graph.number_of_nodes());
        assert_eq!(copy.number_of_edges(), graph.number_of_edges());
        for u in graph.vertices() {
            assert_eq!(
                copy.neighbors_of(u).collect_vec(),
                graph.neighbors_of(u).collect_vec()
            );
        }

        // mutating the copy leaves the original untouched
        let mut copy = copy;
        copy.add_edge(0, 1);
        assert_eq!(copy.number_of_edges(), graph.number_of_edges() + 1);
    }

    #[test]
    fn display_format() {
        let mut graph = MultiGraph::new(3);
        graph.add_edge(0, 2);
        graph.add_edge(0, 1);

        assert_eq!(graph.to_string(), "3 vertices, 2 edges\n0: 1 2 \n1: 0 \n2: 0 \n");
    }
}
