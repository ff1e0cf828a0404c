use quickcheck::{Arbitrary, Gen};

use crate::graph::RoadGraph;

/// A random road graph for property tests: up to a dozen places named
/// `p0`, `p1`, ..., with whole-kilometre roads that may repeat or loop.
#[derive(Debug, Clone)]
pub struct ArbRoadGraph {
    pub graph: RoadGraph,
}

impl Arbitrary for ArbRoadGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_places = 1 + usize::arbitrary(g) % 12;
        let num_roads = usize::arbitrary(g) % 30;

        let names: Vec<String> = (0..num_places).map(|i| format!("p{i}")).collect();
        let mut graph = RoadGraph::new(&names).expect("generated names are unique");
        for _ in 0..num_roads {
            let u = g.choose(&names).expect("at least one place");
            let v = g.choose(&names).expect("at least one place");
            let km = u8::arbitrary(g) % 100;
            graph
                .add_edge(u, v, km.into())
                .expect("generated roads are valid");
        }

        ArbRoadGraph { graph }
    }
}
