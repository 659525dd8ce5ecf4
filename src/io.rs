/*!
# IO

Reading graphs from the whitespace-delimited edge-list format: the number of
vertices, the number of edges, then one vertex pair per edge. Line breaks
and other whitespace are interchangeable; there is no header line, no
comments, and no trailing data.

Malformed input is rejected eagerly (see [`crate::error::Error`]); a partial
graph built before the failure is discarded.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
    str::FromStr,
};

use crate::{ops::GraphEdgeOrder, repr::MultiGraph, *};

/// Whitespace-separated token stream over a buffered reader
struct Tokens<R> {
    lines: Lines<R>,
    current: std::vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            current: Vec::new().into_iter(),
        }
    }

    /// Returns the next token, or `None` at end of input
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.current.next() {
                return Ok(Some(token));
            }
            match self.lines.next() {
                None => return Ok(None),
                Some(line) => {
                    self.current = line?
                        .split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
            }
        }
    }

    /// Parses the next token as `T` and fails with [`Error::Format`] if the
    /// input is exhausted or the token is not a valid `T`
    fn next_value<T: FromStr>(&mut self, name: &str) -> Result<T> {
        let token = self
            .next_token()?
            .ok_or_else(|| Error::Format(format!("premature end of input when parsing {name}")))?;
        token
            .parse()
            .map_err(|_| Error::Format(format!("cannot parse {name} from `{token}`")))
    }
}

/// A reader for the edge-list format
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader;

impl EdgeListReader {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a graph from the given reader. An out-of-range vertex id inside
    /// the stream is invalid input data and reported as
    /// [`Error::InvalidArgument`].
    pub fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<MultiGraph> {
        let mut tokens = Tokens::new(reader);

        let n: NumNodes = tokens.next_value("number of vertices")?;
        let m: NumEdges = tokens.next_value("number of edges")?;

        let mut graph = MultiGraph::new(n);
        for _ in 0..m {
            let u: Node = tokens.next_value("edge endpoint")?;
            let v: Node = tokens.next_value("edge endpoint")?;
            graph.try_add_edge(u, v).map_err(|e| match e {
                Error::OutOfRange { vertex, len } => Error::InvalidArgument(format!(
                    "vertex {vertex} in edge list is out of range for a graph with {len} vertices"
                )),
                e => e,
            })?;
        }

        if let Some(extra) = tokens.next_token()? {
            return Err(Error::Format(format!(
                "trailing data `{extra}` after {m} edges"
            )));
        }

        log::debug!(
            "read edge list with {n} vertices and {} edges",
            graph.number_of_edges()
        );
        Ok(graph)
    }
}

/// Trait for creating graphs from edge-list input.
/// Used as shorthand for the default [`EdgeListReader`] settings.
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl EdgeListRead for MultiGraph {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::new().try_read_graph(reader)
    }
}
