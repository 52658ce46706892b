//! Hazard zone and the per-tick proximity check.

use am_core::Coordinate;

/// A fixed coordinate plus radius that triggers an alert when entered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HazardZone {
    pub center: Coordinate,
    pub radius_m: f64,
}

/// Result of checking one position against a [`HazardZone`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Proximity {
    /// Great-circle distance from the position to the zone centre.
    pub distance_m: f64,
    /// `true` iff `distance_m < radius_m`.
    pub inside: bool,
}

impl HazardZone {
    pub fn new(center: Coordinate, radius_m: f64) -> Self {
        Self { center, radius_m }
    }

    /// Strict comparison: a position exactly on the boundary is outside.
    #[inline]
    pub fn triggers_at(&self, distance_m: f64) -> bool {
        distance_m < self.radius_m
    }

    /// Stateless: the zone does not remember earlier checks.
    pub fn check(&self, position: Coordinate) -> Proximity {
        let distance_m = position.distance_m(self.center);
        Proximity {
            distance_m,
            inside: self.triggers_at(distance_m),
        }
    }
}
