//! The polyline handed from a route provider to the simulator.

use am_core::Coordinate;

/// An ordered, finite sequence of points describing a drivable path.
///
/// Index 0 is the origin and the last index is the destination.  A `Route`
/// is immutable once received; the simulator takes ownership of it for the
/// lifetime of one run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    points: Vec<Coordinate>,
}

impl Route {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// A route with no points.  Starting a simulation on it is a no-op.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point at `index`, or `None` past the destination.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Coordinate> {
        self.points.get(index).copied()
    }

    pub fn origin(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Sum of haversine segment lengths in metres.
    pub fn length_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .sum()
    }

    /// `(south_west, north_east)` corners of the bounding box, used by
    /// displays to fit the route on screen.
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let first = self.origin()?;
        let (mut sw, mut ne) = (first, first);
        for p in &self.points[1..] {
            sw.lat = sw.lat.min(p.lat);
            sw.lon = sw.lon.min(p.lon);
            ne.lat = ne.lat.max(p.lat);
            ne.lon = ne.lon.max(p.lon);
        }
        Some((sw, ne))
    }
}

impl From<Vec<Coordinate>> for Route {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}
