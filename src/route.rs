use crate::distance::Distance;

/// A route through a road graph: the places visited, in order, and the
/// length of each road between consecutive places.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    places: Vec<String>,
    legs: Vec<Distance>,
    // Distance travelled on arrival at each place.
    totals: Vec<Distance>,
}

impl Route {
    /// Creates a route that starts and ends at `start`.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            places: vec![start.into()],
            legs: Vec::new(),
            totals: vec![Distance::ZERO],
        }
    }

    /// Extends the route along a road of length `leg` to `place`, arriving
    /// there after `total` kilometres.
    pub(crate) fn push_leg(&mut self, place: impl Into<String>, leg: Distance, total: Distance) {
        self.places.push(place.into());
        self.legs.push(leg);
        self.totals.push(total);
    }

    /// Returns the first place in the route.
    pub fn first_place(&self) -> &str {
        &self.places[0]
    }

    /// Returns the last place in the route.
    pub fn last_place(&self) -> &str {
        &self.places[self.places.len() - 1]
    }

    /// Returns an iterator over the places in the route.
    pub fn places(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.places.iter().map(String::as_str)
    }

    /// Returns an iterator over the roads travelled, as
    /// `(from, to, distance)` triples.
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str, Distance)> + '_ {
        self.places
            .windows(2)
            .zip(self.legs.iter().copied())
            .map(|(pair, leg)| (pair[0].as_str(), pair[1].as_str(), leg))
    }

    /// Returns the running distance at each place, starting from zero.
    pub fn cumulative(&self) -> impl Iterator<Item = (&str, Distance)> + '_ {
        self.places
            .iter()
            .map(String::as_str)
            .zip(self.totals.iter().copied())
    }

    /// Returns the total length of the route.
    pub fn distance(&self) -> Distance {
        self.totals[self.totals.len() - 1]
    }

    /// Returns the number of places in the route. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Returns true if the route never leaves its starting place.
    pub fn is_trivial(&self) -> bool {
        self.legs.is_empty()
    }

    /// Consumes the route, returning its places.
    pub fn into_places(self) -> Vec<String> {
        self.places
    }
}
