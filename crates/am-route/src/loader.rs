//! CSV polyline loader.
//!
//! # CSV format
//!
//! One row per point, in travel order.
//!
//! ```csv
//! lat,lon
//! 35.667,138.569
//! 35.6682,138.5699
//! 35.66839907,138.56980151
//! ```
//!
//! The file stands in for a recorded response of the external directions
//! service; it is not a routing graph.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use am_core::Coordinate;

use crate::{Route, RouteError, RouteProvider, RouteResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PolylineRecord {
    lat: f64,
    lon: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a polyline from a CSV file.
pub fn load_route_csv(path: &Path) -> RouteResult<Route> {
    let file = std::fs::File::open(path)?;
    load_route_reader(file)
}

/// Like [`load_route_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_route_reader<R: Read>(reader: R) -> RouteResult<Route> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();

    for (row, result) in csv_reader.deserialize::<PolylineRecord>().enumerate() {
        let rec = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        let point = Coordinate::new(rec.lat, rec.lon);
        if !point.is_valid() {
            return Err(RouteError::Parse(format!(
                "row {}: coordinate {point} is out of range",
                row + 1
            )));
        }
        points.push(point);
    }

    Ok(Route::new(points))
}

// ── CsvRouteProvider ──────────────────────────────────────────────────────────

/// Serves the polyline stored in a CSV file.
///
/// The file is re-read on every fetch so edits take effect on the next
/// `start`.  An empty file means "no route".
pub struct CsvRouteProvider {
    path: PathBuf,
}

impl CsvRouteProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RouteProvider for CsvRouteProvider {
    fn fetch_route(&self, from: Coordinate, to: Coordinate) -> RouteResult<Route> {
        let route = load_route_csv(&self.path)?;
        if route.is_empty() {
            return Err(RouteError::NoRoute { from, to });
        }
        Ok(route)
    }
}
