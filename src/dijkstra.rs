use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{
    distance::Distance,
    error::{GraphError, Result},
    graph::{PlaceId, RoadGraph},
    route::Route,
    tracing_support::{debug, info_span},
};

/// Priority-queue entry. The heap is a max-heap, so ordering is reversed:
/// the smallest distance pops first, and among equal distances the entry
/// pushed earliest.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Frontier {
    distance: Distance,
    seq: u64,
    place: PlaceId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best known way of reaching a place: its distance from the source, and
/// the previous place with the length of the road taken (`None` at the
/// source itself).
#[derive(Debug, Clone, Copy)]
struct Reached {
    distance: Distance,
    via: Option<(PlaceId, Distance)>,
}

/// Shortest distances from one source place to every place of a graph,
/// with the predecessor links needed to rebuild each route.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g> {
    graph: &'g RoadGraph,
    source: PlaceId,
    reached: Vec<Option<Reached>>,
    stale_entries: usize,
}

impl<'g> ShortestPathTree<'g> {
    /// Returns the place the tree was grown from.
    pub fn source(&self) -> &'g str {
        self.graph.name(self.source)
    }

    /// Returns the shortest distance to `place`, or `None` if it cannot be
    /// reached.
    pub fn distance_to(&self, place: &str) -> Result<Option<Distance>> {
        let id = self.graph.place_id(place)?;
        Ok(self.reached[id.0].map(|r| r.distance))
    }

    /// Rebuilds the shortest route to `place`.
    pub fn route_to(&self, place: &str) -> Result<Route> {
        let id = self.graph.place_id(place)?;
        self.route_to_id(id)
    }

    /// Returns every reachable place with its distance, in construction order.
    pub fn reachable(&self) -> impl Iterator<Item = (&'g str, Distance)> + '_ {
        self.reached
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.map(|r| (self.graph.name(PlaceId(i)), r.distance)))
    }

    /// Returns how many queue entries were popped after a shorter distance
    /// to the same place had already been found.
    pub fn stale_entries(&self) -> usize {
        self.stale_entries
    }

    pub(crate) fn route_to_id(&self, target: PlaceId) -> Result<Route> {
        if self.reached[target.0].is_none() {
            return Err(GraphError::Unreachable {
                from: self.source().to_string(),
                to: self.graph.name(target).to_string(),
            });
        }

        let mut legs = Vec::new();
        let mut current = target;
        while let Some(Reached {
            distance,
            via: Some((previous, leg)),
        }) = self.reached[current.0]
        {
            legs.push((current, leg, distance));
            current = previous;
        }
        debug_assert_eq!(current, self.source);

        let mut route = Route::new(self.source());
        for (place, leg, total) in legs.into_iter().rev() {
            route.push_leg(self.graph.name(place), leg, total);
        }
        Ok(route)
    }
}

/// Runs Dijkstra's algorithm from `source`.
///
/// The heap has no decrease-key, so an improved distance is pushed as a new
/// entry and superseded entries are skipped when they surface. A road whose
/// length would push the running total past the largest finite distance is
/// not followed, so places only reachable that way stay unreached.
pub(crate) fn dijkstra(graph: &RoadGraph, source: PlaceId) -> ShortestPathTree<'_> {
    let _span = info_span!("dijkstra", source = graph.name(source)).entered();

    let mut reached: Vec<Option<Reached>> = vec![None; graph.num_places()];
    let mut queue = BinaryHeap::new();
    let mut seq = 0u64;
    let mut stale_entries = 0usize;

    reached[source.0] = Some(Reached {
        distance: Distance::ZERO,
        via: None,
    });
    queue.push(Frontier {
        distance: Distance::ZERO,
        seq,
        place: source,
    });

    while let Some(Frontier {
        distance, place, ..
    }) = queue.pop()
    {
        if reached[place.0].is_some_and(|best| distance > best.distance) {
            stale_entries += 1;
            continue;
        }
        for road in graph.roads_from(place) {
            let Some(candidate) = distance.checked_add(road.distance) else {
                debug!(from = graph.name(place), to = graph.name(road.to), "distance overflow");
                continue;
            };
            if reached[road.to.0].is_none_or(|best| candidate < best.distance) {
                reached[road.to.0] = Some(Reached {
                    distance: candidate,
                    via: Some((place, road.distance)),
                });
                seq += 1;
                queue.push(Frontier {
                    distance: candidate,
                    seq,
                    place: road.to,
                });
            }
        }
    }
    debug!(pushed = seq + 1, stale_entries, "queue drained");

    ShortestPathTree {
        graph,
        source,
        reached,
        stale_entries,
    }
}
