use roadgraph::prelude::*;
use roadgraph::sample::{SANTA_CRUZ_PLACES, SANTA_CRUZ_ROADS, santa_cruz};

fn route_names(route: &Route) -> Vec<&str> {
    route.places().collect()
}

#[test]
fn test_santa_cruz_to_montero_goes_through_warnes() {
    let graph = santa_cruz().unwrap();
    let route = graph.shortest_path("Santa Cruz", "Montero").unwrap();
    assert_eq!(route_names(&route), vec!["Santa Cruz", "Warnes", "Montero"]);
    assert_eq!(route.distance(), 44.0);
}

#[test]
fn test_santa_cruz_to_el_torno_goes_through_la_guardia() {
    let graph = santa_cruz().unwrap();
    let route = graph.shortest_path("Santa Cruz", "El Torno").unwrap();
    assert_eq!(route_names(&route), vec!["Santa Cruz", "La Guardia", "El Torno"]);
    assert_eq!(route.distance(), 35.0);
}

#[test]
fn test_longest_route_in_network() {
    let graph = santa_cruz().unwrap();
    let route = graph.shortest_path("El Torno", "Yapacaní").unwrap();
    assert_eq!(
        route_names(&route),
        vec![
            "El Torno",
            "La Guardia",
            "Santa Cruz",
            "Warnes",
            "Montero",
            "Portachuelo",
            "Buena Vista",
            "Yapacaní"
        ]
    );
    assert_eq!(route.distance(), 17.0 + 18.0 + 27.0 + 17.0 + 16.0 + 46.0 + 50.0);
}

#[test]
fn test_routes_are_symmetric_in_length() {
    let graph = santa_cruz().unwrap();
    for from in SANTA_CRUZ_PLACES {
        for to in SANTA_CRUZ_PLACES {
            let there = graph.shortest_path(from, to).unwrap().distance();
            let back = graph.shortest_path(to, from).unwrap().distance();
            assert_eq!(there, back, "{from} <-> {to}");
        }
    }
}

#[test]
fn test_no_route_beats_a_direct_road() {
    let graph = santa_cruz().unwrap();
    for (u, v, km) in SANTA_CRUZ_ROADS {
        assert!(graph.shortest_path(u, v).unwrap().distance().km() <= km);
    }
}

#[test]
fn test_route_to_self() {
    let graph = santa_cruz().unwrap();
    for place in SANTA_CRUZ_PLACES {
        let route = graph.shortest_path(place, place).unwrap();
        assert_eq!(route_names(&route), vec![place]);
        assert_eq!(route.distance(), Distance::ZERO);
    }
}

#[test]
fn test_lookup_ignores_case_and_accents() {
    let graph = santa_cruz().unwrap();
    assert_eq!(normalize("Yapacaní"), normalize("yapacani"));
    assert_eq!(normalize("YAPACANÍ"), normalize("yapacani"));
    assert_eq!(graph.resolve("  yapacani "), Ok("Yapacaní"));
    assert_eq!(graph.resolve("LA GUARDIA"), Ok("La Guardia"));

    let route = graph.shortest_path_by_name("santa cruz", "MONTERO").unwrap();
    assert_eq!(RouteLine(&route).to_string(), "Santa Cruz → Warnes → Montero (44.0 km)");
}

#[test]
fn test_resolve_round_trip() {
    let graph = santa_cruz().unwrap();
    for place in SANTA_CRUZ_PLACES {
        let canonical = graph.resolve(&place.to_uppercase()).unwrap();
        assert_eq!(canonical, place);
        assert_eq!(graph.resolve(canonical), Ok(canonical));
    }
}

#[test]
fn test_unknown_place_is_reported() {
    let graph = santa_cruz().unwrap();
    assert_eq!(
        graph.shortest_path("Santa Cruz", "Samaipata"),
        Err(GraphError::UnknownVertex("Samaipata".to_string()))
    );
    assert_eq!(
        graph.shortest_path_by_name("samaipata", "warnes"),
        Err(GraphError::NotFound("samaipata".to_string()))
    );
}

#[test]
fn test_isolated_place_is_unreachable() {
    let mut places = SANTA_CRUZ_PLACES.to_vec();
    places.push("Samaipata");
    let mut graph = RoadGraph::new(places).unwrap();
    for (u, v, km) in SANTA_CRUZ_ROADS {
        graph.add_edge(u, v, km).unwrap();
    }
    assert_eq!(
        graph.shortest_path("Santa Cruz", "Samaipata"),
        Err(GraphError::Unreachable {
            from: "Santa Cruz".to_string(),
            to: "Samaipata".to_string()
        })
    );
    #[cfg(feature = "pathfinding")]
    assert_eq!(graph.connected_components().len(), 2);
}

#[test]
fn test_shortest_distances_from_santa_cruz() {
    let graph = santa_cruz().unwrap();
    let tree = graph.shortest_distances("Santa Cruz").unwrap();
    let reachable: Vec<(&str, f64)> = tree.reachable().map(|(p, d)| (p, d.km())).collect();
    assert_eq!(
        reachable,
        vec![
            ("Santa Cruz", 0.0),
            ("Warnes", 27.0),
            ("Montero", 44.0),
            ("Portachuelo", 60.0),
            ("Buena Vista", 106.0),
            ("Yapacaní", 156.0),
            ("Cotoca", 20.0),
            ("La Guardia", 18.0),
            ("El Torno", 35.0),
        ]
    );
}

#[test]
fn test_adjacency_listing() {
    let graph = santa_cruz().unwrap();
    let listing = AdjacencyList(&graph).to_string();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(
        lines[0],
        "Santa Cruz ➜ Warnes (27 km), Cotoca (20 km), La Guardia (18 km)"
    );
    assert_eq!(lines[5], "Yapacaní ➜ Buena Vista (50 km)");
}

#[test]
fn test_distance_matrix_is_symmetric() {
    let graph = santa_cruz().unwrap();
    let matrix = DistanceMatrix(&graph).to_string();
    let rows: Vec<Vec<&str>> = matrix
        .lines()
        .skip(1)
        .map(|line| line.split_whitespace().skip(1).collect())
        .collect();
    assert_eq!(rows.len(), 9);
    for i in 0..9 {
        assert_eq!(rows[i][i], "0");
        for j in 0..9 {
            assert_eq!(rows[i][j], rows[j][i]);
        }
    }
    assert_eq!(rows[0][1], "27");
}
