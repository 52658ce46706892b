//! Geographic coordinate type and distance utilities.
//!
//! `Coordinate` uses `f64` latitude/longitude.  The hazard check compares
//! distances against a 50 m radius with a strict `<`, so the sub-millimetre
//! precision of double floats keeps the boundary decision stable.

/// Mean Earth radius in metres used by [`Coordinate::distance_m`].
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// The point `metres` due north of `self` along the meridian.
    ///
    /// Exact inverse of [`distance_m`][Self::distance_m] for northward
    /// offsets; used to place points at a known distance from a hazard.
    pub fn offset_north_m(self, metres: f64) -> Coordinate {
        let d_lat = (metres / EARTH_RADIUS_M).to_degrees();
        Coordinate::new(self.lat + d_lat, self.lon)
    }

    /// `false` if either component is NaN/infinite or out of WGS-84 range.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
