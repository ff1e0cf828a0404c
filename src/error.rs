/// Errors returned by [`RoadGraph`](crate::RoadGraph) and
/// [`NameIndex`](crate::NameIndex) operations.
///
/// All of these are structural: retrying the same call on the same graph
/// yields the same error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A vertex was referenced that is not part of the graph.
    #[error("unknown place: {0}")]
    UnknownVertex(String),

    /// The vertex list passed to the graph constructor names a place twice.
    #[error("duplicate place: {0}")]
    DuplicateVertex(String),

    /// Two distinct place names normalize to the same lookup key.
    #[error("places {first:?} and {second:?} both normalize to {key:?}")]
    NameCollision {
        key: String,
        first: String,
        second: String,
    },

    /// An edge weight was negative, infinite or NaN.
    #[error("invalid distance: {0} (must be finite and non-negative)")]
    InvalidWeight(f64),

    /// No sequence of roads connects the two places.
    // Not named `source`: thiserror treats that field as the error cause.
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },

    /// Free text did not resolve to any place.
    #[error("place not found: {0:?}")]
    NotFound(String),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
