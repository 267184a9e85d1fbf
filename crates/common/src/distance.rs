use std::fmt;

use super::types::{Cost, Weight};

/// Cost of a path: either a finite integer or +∞ (no path).
///
/// Variant order gives the total order used by the solvers: every finite
/// value compares below `Infinite`, and `Infinite == Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Cost),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<Cost> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Infinite => None,
        }
    }

    /// Extends a path by one edge of weight `weight`.
    ///
    /// +∞ absorbs the weight. Returns `None` if the finite sum leaves the
    /// `Cost` range; shortest-path costs never do, so callers treat an
    /// overflow as a negative cycle driving costs without limit.
    pub fn extend(self, weight: Weight) -> Option<Distance> {
        self.join(Distance::from(weight))
    }

    /// Concatenates two path costs; +∞ if either half is unreachable.
    ///
    /// Returns `None` on `Cost` overflow, like `extend`.
    pub fn join(self, other: Distance) -> Option<Distance> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.checked_add(b).map(Distance::Finite),
            _ => Some(Distance::Infinite),
        }
    }
}

impl From<Weight> for Distance {
    fn from(value: Weight) -> Self {
        Distance::Finite(Cost::from(value))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{}", value),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}
