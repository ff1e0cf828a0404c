//! Text renderings of graphs and routes for command-line front ends.
//!
//! These are plain [`Display`] adapters; nothing here writes to a terminal.

use std::fmt::{self, Display, Formatter};

use crate::{graph::RoadGraph, route::Route};

/// Separator placed between consecutive places of a route.
pub const ROUTE_ARROW: &str = " → ";

/// Number of leading characters of a place name used as a matrix label.
const LABEL_WIDTH: usize = 3;

/// One line per place, in construction order, listing its roads:
/// `Warnes ➜ Santa Cruz (27 km), Montero (17 km)`.
pub struct AdjacencyList<'g>(pub &'g RoadGraph);

impl Display for AdjacencyList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        for place in graph.places() {
            write!(f, "{place} ➜")?;
            let roads = graph.adjacency(place).map_err(|_| fmt::Error)?;
            for (i, (neighbour, km)) in roads.enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{neighbour} ({km} km)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A square table of direct road lengths. Rows and columns follow
/// construction order and are labelled with the first three characters of
/// each place name. A cell holds the first road added between the pair, or
/// 0 when there is none.
pub struct DistanceMatrix<'g>(pub &'g RoadGraph);

fn label(place: &str) -> String {
    let short: String = place.chars().take(LABEL_WIDTH).collect();
    format!("{short:<width$}", width = LABEL_WIDTH)
}

impl Display for DistanceMatrix<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        write!(f, "{:width$}", "", width = LABEL_WIDTH + 2)?;
        let header: Vec<String> = graph.places().map(label).collect();
        writeln!(f, "{}", header.join("  "))?;
        for from in graph.places() {
            write!(f, "{}", label(from))?;
            for into in graph.places() {
                let weight = graph.edge_weight(from, into).map_err(|_| fmt::Error)?;
                match weight {
                    Some(km) => write!(f, "  {km:>width$}", width = LABEL_WIDTH)?,
                    None => write!(f, "  {:>width$}", 0, width = LABEL_WIDTH)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A route on one line: `Santa Cruz → Warnes → Montero (44.0 km)`.
pub struct RouteLine<'r>(pub &'r Route);

impl Display for RouteLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let route = self.0;
        for (i, place) in route.places().enumerate() {
            if i > 0 {
                f.write_str(ROUTE_ARROW)?;
            }
            f.write_str(place)?;
        }
        write!(f, " ({:.1} km)", route.distance())
    }
}
