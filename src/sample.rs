//! A small road network around Santa Cruz de la Sierra, Bolivia.

use crate::{error::Result, graph::RoadGraph};

pub const SANTA_CRUZ_PLACES: [&str; 9] = [
    "Santa Cruz",
    "Warnes",
    "Montero",
    "Portachuelo",
    "Buena Vista",
    "Yapacaní",
    "Cotoca",
    "La Guardia",
    "El Torno",
];

/// Approximate road distances in kilometres.
pub const SANTA_CRUZ_ROADS: [(&str, &str, f64); 10] = [
    ("Santa Cruz", "Warnes", 27.0),
    ("Warnes", "Montero", 17.0),
    ("Montero", "Portachuelo", 16.0),
    ("Portachuelo", "Buena Vista", 46.0),
    ("Buena Vista", "Yapacaní", 50.0),
    ("Santa Cruz", "Cotoca", 20.0),
    ("Cotoca", "La Guardia", 28.0),
    ("La Guardia", "El Torno", 17.0),
    ("La Guardia", "Santa Cruz", 18.0),
    ("Warnes", "Cotoca", 45.0),
];

/// Builds the Santa Cruz network.
pub fn santa_cruz() -> Result<RoadGraph> {
    let mut graph = RoadGraph::new(SANTA_CRUZ_PLACES)?;
    for (u, v, km) in SANTA_CRUZ_ROADS {
        graph.add_edge(u, v, km)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_santa_cruz_builds() {
        let graph = santa_cruz().unwrap();
        assert_eq!(graph.num_places(), 9);
        assert_eq!(graph.num_roads(), 10);
        assert_eq!(
            graph
                .adjacency("Santa Cruz")
                .unwrap()
                .map(|(n, d)| (n, d.km()))
                .collect::<Vec<_>>(),
            vec![("Warnes", 27.0), ("Cotoca", 20.0), ("La Guardia", 18.0)]
        );
    }
}
