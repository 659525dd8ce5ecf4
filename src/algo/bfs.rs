use std::collections::VecDeque;

use super::*;

/// Read-only shortest-path index computed once by breadth-first search from
/// one or more source vertices.
///
/// The index stores, per vertex, the optional hop distance to the nearest
/// source and the optional predecessor from which the vertex was first
/// discovered. "Unreached" is a type-level fact (`None`), not a sentinel
/// value, so it can never collide with a legitimate distance.
///
/// The index is a pure snapshot: it keeps no reference to the graph it was
/// built from. Mutating the graph afterwards silently makes the index stale;
/// a changed graph requires a fresh index.
pub struct ShortestPathIndex {
    dist: Vec<Option<OptionalNode>>,
    pred: Vec<Option<OptionalNode>>,
}

impl ShortestPathIndex {
    /// Runs a breadth-first search from `source` and returns the resulting
    /// index. Runs in `O(V + E)` time.
    pub fn new<G: AdjacencyList>(graph: &G, source: Node) -> Result<Self> {
        Self::with_sources(graph, [source])
    }

    /// Runs a breadth-first search from every vertex in `sources` at once.
    /// All sources start with distance zero; ties among equidistant sources
    /// are broken by enumeration order. Duplicated source ids are ignored.
    ///
    /// Fails with [`Error::OutOfRange`] for an invalid source id and with
    /// [`Error::InvalidArgument`] if `sources` is empty.
    pub fn with_sources<G, S>(graph: &G, sources: S) -> Result<Self>
    where
        G: AdjacencyList,
        S: IntoIterator<Item = Node>,
    {
        let n = graph.len();
        let mut dist: Vec<Option<OptionalNode>> = vec![None; n];
        let mut pred: Vec<Option<OptionalNode>> = vec![None; n];

        let mut queue = VecDeque::new();
        for s in sources {
            if s >= graph.number_of_nodes() {
                return Err(Error::OutOfRange {
                    vertex: s,
                    len: graph.number_of_nodes(),
                });
            }
            if dist[s as usize].is_none() {
                dist[s as usize] = OptionalNode::new(0);
                queue.push_back(s);
            }
        }

        if queue.is_empty() {
            return Err(Error::InvalidArgument(
                "breadth-first search requires at least one source".into(),
            ));
        }

        // Every vertex enters the queue at most once since its distance is
        // set at enqueue time.
        while let Some(v) = queue.pop_front() {
            let d = dist[v as usize].expect("queued vertices have a distance").get();
            for w in graph.neighbors_of(v) {
                if dist[w as usize].is_none() {
                    dist[w as usize] = OptionalNode::new(d + 1);
                    pred[w as usize] = OptionalNode::new(v);
                    queue.push_back(w);
                }
            }
        }

        log::debug!(
            "bfs reached {} of {n} vertices",
            dist.iter().filter(|d| d.is_some()).count()
        );

        Ok(Self { dist, pred })
    }

    fn check_vertex(&self, v: Node) -> Result<()> {
        if (v as usize) < self.dist.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex: v,
                len: self.dist.len() as NumNodes,
            })
        }
    }

    /// Returns *true* iff some source reaches `v`
    pub fn is_reached(&self, v: Node) -> Result<bool> {
        self.check_vertex(v)?;
        Ok(self.dist[v as usize].is_some())
    }

    /// Returns the hop distance from the nearest source to `v`, or `None`
    /// if `v` is unreached
    pub fn distance_to(&self, v: Node) -> Result<Option<NumNodes>> {
        self.check_vertex(v)?;
        Ok(self.dist[v as usize].map(|d| d.get()))
    }

    /// Returns the vertex from which `v` was first discovered, or `None`
    /// for sources and unreached vertices
    pub fn predecessor_of(&self, v: Node) -> Result<Option<Node>> {
        self.check_vertex(v)?;
        Ok(self.pred[v as usize].map(|p| p.get()))
    }

    /// Returns a shortest path from a source to `v` inclusive, in
    /// source-to-target order, or `None` if `v` is unreached. A missing path
    /// is a result, not an error.
    pub fn path_to(&self, v: Node) -> Result<Option<Vec<Node>>> {
        self.check_vertex(v)?;
        if self.dist[v as usize].is_none() {
            return Ok(None);
        }

        // Predecessors only point towards the source, so walk backwards and
        // reverse. Sources are the only reached vertices without predecessor.
        let mut path = vec![v];
        let mut x = v;
        while let Some(p) = self.pred[x as usize] {
            x = p.get();
            path.push(x);
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Returns a bitset with one bit per vertex, set iff the vertex was
    /// discovered by the traversal
    pub fn reached_vertices(&self) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(
            self.dist.len() as NumNodes,
            self.dist
                .iter()
                .enumerate()
                .filter_map(|(u, d)| d.map(|_| u as Node)),
        )
    }

    /// Diagnostic pass re-deriving the single-source BFS optimality
    /// conditions from the public query surface:
    ///
    /// - the source has distance zero,
    /// - every edge `(v, w)` connects two reached or two unreached vertices,
    ///   and `dist(w) <= dist(v) + 1` where reached,
    /// - every reached non-source `w` satisfies `dist(w) == dist(pred(w)) + 1`.
    ///
    /// Intended for test suites only; never run during construction or on a
    /// hot path. The first violation found is logged and returned.
    pub fn check_optimality<G: AdjacencyList>(
        &self,
        graph: &G,
        source: Node,
    ) -> std::result::Result<(), String> {
        let fail = |msg: String| -> std::result::Result<(), String> {
            log::error!("bfs optimality violated: {msg}");
            Err(msg)
        };

        if self.distance_to(source).map_err(|e| e.to_string())? != Some(0) {
            return fail(format!("distance of source {source} to itself is not zero"));
        }

        // `edges()` yields both orientations of every edge, so the
        // asymmetric distance condition is checked symmetrically.
        for Edge(v, w) in graph.edges() {
            let (dv, dw) = (self.dist[v as usize], self.dist[w as usize]);
            match (dv, dw) {
                (Some(dv), Some(dw)) => {
                    if dw.get() > dv.get() + 1 {
                        return fail(format!("edge ({v},{w}) violates dist({w}) <= dist({v}) + 1"));
                    }
                }
                (None, None) => {}
                _ => {
                    return fail(format!(
                        "edge ({v},{w}) connects a reached and an unreached vertex"
                    ));
                }
            }
        }

        for w in graph.vertices() {
            if w == source {
                continue;
            }
            let Some(dw) = self.dist[w as usize] else {
                continue;
            };
            let Some(p) = self.pred[w as usize] else {
                return fail(format!("reached vertex {w} has no predecessor"));
            };
            match self.dist[p.get() as usize] {
                Some(dp) if dw.get() == dp.get() + 1 => {}
                _ => {
                    return fail(format!(
                        "shortest-path edge ({},{w}) violates dist({w}) == dist({}) + 1",
                        p.get(),
                        p.get()
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, repr::MultiGraph};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn tiny_connected() -> MultiGraph {
        MultiGraph::from_edges(
            6,
            [(0, 2), (0, 1), (0, 5), (1, 2), (2, 3), (2, 4), (3, 5), (3, 4)],
        )
    }

    #[test]
    fn single_source_distances() {
        let graph = tiny_connected();
        let index = ShortestPathIndex::new(&graph, 0).unwrap();

        assert_eq!(index.distance_to(0).unwrap(), Some(0));
        assert!(index.is_reached(0).unwrap());

        assert_eq!(index.distance_to(3).unwrap(), Some(2));
        assert_eq!(index.distance_to(4).unwrap(), Some(2));

        // 4 is first discovered from 2, the only vertex at distance 1 that
        // neighbors it
        let path = index.path_to(4).unwrap().unwrap();
        assert_eq!(path, vec![0, 2, 4]);

        index.check_optimality(&graph, 0).unwrap();
    }

    #[test]
    fn singleton_graph() {
        let graph = MultiGraph::new(1);
        let index = ShortestPathIndex::new(&graph, 0).unwrap();

        assert!(index.is_reached(0).unwrap());
        assert_eq!(index.distance_to(0).unwrap(), Some(0));
        assert_eq!(index.path_to(0).unwrap(), Some(vec![0]));

        // every other vertex id is out of range
        assert!(index.distance_to(1).is_err());
        assert!(ShortestPathIndex::new(&graph, 1).is_err());
    }

    #[test]
    fn disconnected_components() {
        let graph = MultiGraph::from_edges(4, [(0, 1), (2, 3)]);
        let index = ShortestPathIndex::new(&graph, 0).unwrap();

        assert!(index.is_reached(1).unwrap());
        assert!(!index.is_reached(2).unwrap());
        assert_eq!(index.distance_to(2).unwrap(), None);
        assert_eq!(index.path_to(2).unwrap(), None);

        let reached = index.reached_vertices();
        assert!(reached.get_bit(0) && reached.get_bit(1));
        assert!(!reached.get_bit(2) && !reached.get_bit(3));
        assert_eq!(reached.cardinality(), 2);
    }

    #[test]
    fn multi_source_takes_minimum() {
        let graph = tiny_connected();
        let multi = ShortestPathIndex::with_sources(&graph, [0, 5]).unwrap();
        let from_zero = ShortestPathIndex::new(&graph, 0).unwrap();
        let from_five = ShortestPathIndex::new(&graph, 5).unwrap();

        for v in graph.vertices() {
            let d0 = from_zero.distance_to(v).unwrap();
            let d5 = from_five.distance_to(v).unwrap();
            let expected = match (d0, d5) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
            assert_eq!(multi.distance_to(v).unwrap(), expected);
        }
    }

    #[test]
    fn empty_source_set_is_rejected() {
        let graph = MultiGraph::new(3);
        assert!(matches!(
            ShortestPathIndex::with_sources(&graph, []),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn out_of_range_source_is_rejected() {
        let graph = MultiGraph::new(3);
        assert!(matches!(
            ShortestPathIndex::with_sources(&graph, [1, 3]),
            Err(Error::OutOfRange { vertex: 3, len: 3 })
        ));
    }

    #[test]
    fn paths_walk_from_source_to_target() {
        let graph = tiny_connected();
        let index = ShortestPathIndex::new(&graph, 0).unwrap();

        for v in graph.vertices() {
            let path = index.path_to(v).unwrap().unwrap();
            assert_eq!(path.len() as NumNodes, index.distance_to(v).unwrap().unwrap() + 1);
            assert_eq!(*path.first().unwrap(), 0);
            assert_eq!(*path.last().unwrap(), v);

            // consecutive path vertices are adjacent
            for (&a, &b) in path.iter().tuple_windows() {
                assert!(graph.neighbors_of(a).contains(&b));
            }
        }
    }

    #[test]
    fn optimality_holds_on_random_multigraphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 5, 20, 50] {
            for m in [0 as NumEdges, n / 2, 2 * n, 5 * n] {
                for _ in 0..10 {
                    let graph = MultiGraph::random(rng, n, m);
                    let source = rng.random_range(0..n);

                    let index = ShortestPathIndex::new(&graph, source).unwrap();
                    index.check_optimality(&graph, source).unwrap();

                    assert_eq!(index.distance_to(source).unwrap(), Some(0));
                    assert!(index.is_reached(source).unwrap());
                }
            }
        }
    }
}
