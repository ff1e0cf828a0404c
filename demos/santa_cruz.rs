//! Command-line front end for the Santa Cruz road network.
//!
//! Usage:
//!   cargo run --example santa_cruz -- adjacency
//!   cargo run --example santa_cruz -- matrix
//!   cargo run --example santa_cruz -- route "santa cruz" yapacani
//!   RUST_LOG=roadgraph=debug cargo run --example santa_cruz -- route warnes "el torno"

use std::process;

use clap::{Parser, Subcommand};
use roadgraph::{
    prelude::*,
    sample::santa_cruz,
    tracing_support::init_tracing_with,
};

/// Shortest routes between towns around Santa Cruz de la Sierra.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log library activity to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every town with its roads
    Adjacency,
    /// Print the table of direct road lengths
    Matrix,
    /// Find the shortest route between two towns (case and accents are ignored)
    Route {
        from: String,
        to: String,
    },
    /// List groups of towns connected by roads
    Components,
}

fn main() {
    let args = Args::parse();
    init_tracing_with(if args.verbose { "debug" } else { "warn" });

    let graph = match santa_cruz() {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Failed to build road network: {err}");
            process::exit(1);
        }
    };

    match args.command {
        Command::Adjacency => print!("{}", AdjacencyList(&graph)),
        Command::Matrix => print!("{}", DistanceMatrix(&graph)),
        Command::Route { from, to } => match graph.shortest_path_by_name(&from, &to) {
            Ok(route) => println!("{}", RouteLine(&route)),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        },
        Command::Components => print_components(&graph),
    }
}

#[cfg(feature = "pathfinding")]
fn print_components(graph: &RoadGraph) {
    for (i, component) in graph.connected_components().iter().enumerate() {
        println!("{}: {}", i + 1, component.join(", "));
    }
}

#[cfg(not(feature = "pathfinding"))]
fn print_components(_graph: &RoadGraph) {
    eprintln!("Rebuild with the `pathfinding` feature to list components.");
    process::exit(1);
}
