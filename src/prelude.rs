pub use crate::display::{AdjacencyList, DistanceMatrix, RouteLine};
pub use crate::{
    CollisionPolicy, Distance, GraphError, NameIndex, RoadGraph, Route, ShortestPathTree,
    normalize,
};
