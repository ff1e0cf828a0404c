use std::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use crate::error::{GraphError, Result};

/// A road length in kilometres.
///
/// Values are always finite and non-negative, which makes the float totally
/// ordered and usable as a priority-queue key.
#[derive(Debug, Copy, Clone, Default)]
#[repr(transparent)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    /// Validates a raw kilometre value.
    pub fn new(km: f64) -> Result<Self> {
        if km.is_finite() && km >= 0.0 {
            // Folds -0.0 into 0.0 so equality agrees with the bit-level hash.
            Ok(Distance(km + 0.0))
        } else {
            Err(GraphError::InvalidWeight(km))
        }
    }

    pub fn km(self) -> f64 {
        self.0
    }

    /// Adds two distances, returning `None` if the sum is too large to be
    /// finite.
    pub fn checked_add(self, rhs: Distance) -> Option<Distance> {
        let sum = self.0 + rhs.0;
        sum.is_finite().then_some(Distance(sum))
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Distance {}

impl Hash for Distance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Distance {
    type Error = GraphError;

    fn try_from(km: f64) -> Result<Self> {
        Distance::new(km)
    }
}

impl From<u32> for Distance {
    fn from(km: u32) -> Self {
        Distance(km.into())
    }
}

impl From<Distance> for f64 {
    fn from(d: Distance) -> f64 {
        d.0
    }
}

impl PartialEq<f64> for Distance {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
