//! Compute the weight of a minimum spanning tree with required edges.
//!
//! Run with: cargo run --bin mst -- graph.txt
//!
//! Usage:
//!   mst                    Read the graph from stdin
//!   mst graph.txt          Read the graph from a file
//!   mst --validate ...     Also check that the result is a spanning tree
//!
//! Input format: `V E` followed by E records of `start end weight flag`,
//! whitespace-separated; flag 1 marks a required edge. On success the total
//! weight of the selected edges is the only stdout output.

use clap::Parser;
use constrained_mst::validation::validate;
use constrained_mst::{compute_with, parse_graph, MstConfig};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mst")]
#[command(about = "Minimum spanning tree with required edges")]
struct Args {
    /// Input file (stdin when omitted)
    input: Option<PathBuf>,

    /// Verify that the result is a spanning tree and fail when it is not
    #[arg(long)]
    validate: bool,

    /// Trust the required edges instead of rejecting cycles among them
    #[arg(long)]
    no_required_check: bool,
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().lock().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let text = match read_input(args.input.as_ref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("mst: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let (num_vertices, edges) = match parse_graph(&text) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("mst: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let config = MstConfig {
        check_required: !args.no_required_check,
    };
    let output = match compute_with(num_vertices, &edges, config) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("mst: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if args.validate {
        let report = validate(&output.tree);
        if !report.is_spanning_tree() {
            eprintln!("mst: not a spanning tree: {}", report.summary());
            return ExitCode::FAILURE;
        }
    }

    println!("{}", output.tree.total_weight());
    ExitCode::SUCCESS
}
