//! Weighted, undirected road networks with accent-insensitive place lookup
//! and Dijkstra shortest routes.
//!
//! ```
//! use roadgraph::prelude::*;
//!
//! let mut graph = RoadGraph::new(["Santa Cruz", "Warnes", "Montero"])?;
//! graph.add_edge("Santa Cruz", "Warnes", 27.0)?;
//! graph.add_edge("Warnes", "Montero", 17.0)?;
//!
//! let route = graph.shortest_path_by_name("santa cruz", "MONTERO")?;
//! assert_eq!(RouteLine(&route).to_string(), "Santa Cruz → Warnes → Montero (44.0 km)");
//! # Ok::<(), GraphError>(())
//! ```

pub mod dijkstra;
pub mod display;
pub mod distance;
pub mod error;
pub mod graph;
pub mod name_index;
pub mod prelude;
pub mod route;
pub mod sample;
pub mod tracing_support;

#[cfg(test)]
mod test_support;

pub use crate::dijkstra::ShortestPathTree;
pub use crate::distance::Distance;
pub use crate::error::{GraphError, Result};
pub use crate::graph::RoadGraph;
pub use crate::name_index::{CollisionPolicy, NameIndex, normalize};
pub use crate::route::Route;
