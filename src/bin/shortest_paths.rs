//! Reads an edge-list file and a source vertex, then prints a shortest path
//! (or "not connected") for every vertex of the graph.

use std::process::ExitCode;

use itertools::Itertools;
use tinyalgs::{algo::ShortestPathIndex, io::EdgeListRead, prelude::*};

fn run(path: &str, source: Node) -> Result<()> {
    let graph = MultiGraph::try_read_edge_list_file(path)?;
    let index = ShortestPathIndex::new(&graph, source)?;

    for v in graph.vertices() {
        match index.path_to(v)? {
            Some(path) => {
                let dist = index.distance_to(v)?.expect("vertex on a path is reached");
                println!("{source} to {v} ({dist}): {}", path.iter().join("-"));
            }
            None => println!("{source} to {v} (-): not connected"),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = std::env::args().collect_vec();

    let parsed = match args.as_slice() {
        [_, path, source] => source.parse::<Node>().ok().map(|s| (path.clone(), s)),
        _ => None,
    };

    let Some((path, source)) = parsed else {
        eprintln!("usage: shortest-paths <edge-list-file> <source-vertex>");
        return ExitCode::FAILURE;
    };

    if let Err(e) = run(&path, source) {
        eprintln!("shortest-paths: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
