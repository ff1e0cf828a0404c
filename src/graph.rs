use std::collections::HashMap;

use derivative::Derivative;

use crate::{
    dijkstra::{ShortestPathTree, dijkstra},
    distance::Distance,
    error::{GraphError, Result},
    name_index::{CollisionPolicy, NameIndex},
    route::Route,
    tracing_support::{debug, info_span},
};

/// Index of a place in a [`RoadGraph`]'s construction order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub(crate) struct PlaceId(pub(crate) usize);

/// One direction of a road as stored in a place's adjacency list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Road {
    pub(crate) to: PlaceId,
    pub(crate) distance: Distance,
}

/// An undirected, weighted graph of named places.
///
/// The set of places is fixed when the graph is created; roads are added
/// afterwards with [`RoadGraph::add_edge`]. Every road is stored in the
/// adjacency lists of both of its ends, in insertion order. Parallel roads
/// between the same pair of places are kept, not merged.
///
/// The graph does no internal locking. Hosts sharing one between threads
/// should wrap it in an `RwLock`: [`RoadGraph::add_edge`] needs the write
/// side, every other method only reads.
#[derive(Derivative)]
#[derivative(Debug, Clone)]
pub struct RoadGraph {
    places: Vec<String>,
    ids: HashMap<String, PlaceId>,
    roads: Vec<Vec<Road>>,
    num_roads: usize,
    #[derivative(Debug = "ignore")]
    names: NameIndex,
}

impl RoadGraph {
    /// Creates a graph with the given places and no roads.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if a place is listed twice,
    /// or [`GraphError::NameCollision`] if two places are indistinguishable
    /// after [normalization](crate::name_index::normalize).
    pub fn new<I, S>(places: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_policy(places, CollisionPolicy::Reject)
    }

    /// Like [`RoadGraph::new`], choosing how colliding names are indexed.
    pub fn with_policy<I, S>(places: I, policy: CollisionPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let places: Vec<String> = places.into_iter().map(Into::into).collect();
        let mut ids = HashMap::with_capacity(places.len());
        for (i, place) in places.iter().enumerate() {
            if ids.insert(place.clone(), PlaceId(i)).is_some() {
                return Err(GraphError::DuplicateVertex(place.clone()));
            }
        }
        let names = NameIndex::build_with(&places, policy)?;
        Ok(RoadGraph {
            roads: vec![Vec::new(); places.len()],
            places,
            ids,
            num_roads: 0,
            names,
        })
    }

    /// Adds a road of `km` kilometres between `u` and `v`.
    ///
    /// Both ends and the distance are validated before anything is stored,
    /// so a failed call leaves the graph unchanged.
    pub fn add_edge(&mut self, u: &str, v: &str, km: f64) -> Result<()> {
        let from = self.place_id(u)?;
        let to = self.place_id(v)?;
        let distance = Distance::new(km)?;
        self.roads[from.0].push(Road { to, distance });
        self.roads[to.0].push(Road { to: from, distance });
        self.num_roads += 1;
        debug!(from = u, to = v, km, "added road");
        Ok(())
    }

    /// Returns the neighbours of `place` with the length of each road, in
    /// the order the roads were added.
    pub fn adjacency<'g>(
        &'g self,
        place: &str,
    ) -> Result<impl ExactSizeIterator<Item = (&'g str, Distance)> + use<'g>> {
        let id = self.place_id(place)?;
        Ok(self
            .roads_from(id)
            .iter()
            .map(|road| (self.name(road.to), road.distance)))
    }

    /// Returns the length of the first road added between `u` and `v`, or
    /// `None` if they are not directly connected.
    pub fn edge_weight(&self, u: &str, v: &str) -> Result<Option<Distance>> {
        let from = self.place_id(u)?;
        let to = self.place_id(v)?;
        Ok(self
            .roads_from(from)
            .iter()
            .find(|road| road.to == to)
            .map(|road| road.distance))
    }

    /// Computes shortest distances from `source` to every place.
    pub fn shortest_distances(&self, source: &str) -> Result<ShortestPathTree<'_>> {
        let source = self.place_id(source)?;
        Ok(dijkstra(self, source))
    }

    /// Finds the shortest route from `source` to `destination`.
    ///
    /// A route from a place to itself contains just that place and has
    /// length zero. Fails with [`GraphError::Unreachable`] when no roads
    /// connect the two places.
    pub fn shortest_path(&self, source: &str, destination: &str) -> Result<Route> {
        let _span = info_span!("shortest_path", source, destination).entered();
        let source = self.place_id(source)?;
        let target = self.place_id(destination)?;
        dijkstra(self, source).route_to_id(target)
    }

    /// Like [`RoadGraph::shortest_path`], but accepts free text for either
    /// end and resolves it through the graph's name index.
    pub fn shortest_path_by_name(&self, source: &str, destination: &str) -> Result<Route> {
        let source = self.resolve(source)?;
        let destination = self.resolve(destination)?;
        self.shortest_path(source, destination)
    }

    /// Resolves free text to the canonical name of a place in this graph.
    pub fn resolve(&self, text: &str) -> Result<&str> {
        self.names.resolve(text)
    }

    /// Partitions the places into sets connected by roads. Components are
    /// listed in order of their first place, and places within a component
    /// in construction order.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Vec<Vec<&str>> {
        let ids: Vec<PlaceId> = self.place_ids().collect();
        let mut components: Vec<Vec<PlaceId>> =
            pathfinding::prelude::connected_components(&ids, |&id| {
                self.roads_from(id)
                    .iter()
                    .map(|road| road.to)
                    .collect::<Vec<_>>()
            })
            .into_iter()
            .map(|component| {
                let mut component: Vec<_> = component.into_iter().collect();
                component.sort();
                component
            })
            .collect();
        components.sort();
        components
            .into_iter()
            .map(|component| component.into_iter().map(|id| self.name(id)).collect())
            .collect()
    }

    /// Returns the places in construction order.
    pub fn places(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.places.iter().map(String::as_str)
    }

    /// Returns `true` if `place` is the exact name of a place in the graph.
    pub fn contains(&self, place: &str) -> bool {
        self.ids.contains_key(place)
    }

    pub fn num_places(&self) -> usize {
        self.places.len()
    }

    /// Returns the number of roads added, counting each undirected road once.
    pub fn num_roads(&self) -> usize {
        self.num_roads
    }

    pub(crate) fn place_id(&self, place: &str) -> Result<PlaceId> {
        self.ids
            .get(place)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(place.to_string()))
    }

    #[cfg(feature = "pathfinding")]
    fn place_ids(&self) -> impl Iterator<Item = PlaceId> {
        (0..self.places.len()).map(PlaceId)
    }

    pub(crate) fn name(&self, id: PlaceId) -> &str {
        &self.places[id.0]
    }

    pub(crate) fn roads_from(&self, id: PlaceId) -> &[Road] {
        &self.roads[id.0]
    }
}
