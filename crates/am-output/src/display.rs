//! A display sink that logs instead of drawing.

use am_core::Coordinate;
use am_route::Route;
use am_sim::display::{ROUTE_STROKE_RGB, ROUTE_STROKE_WIDTH};
use am_sim::{DisplaySink, PinRole};

/// Logs every display call at `info` and remembers the last position.
#[derive(Debug, Default)]
pub struct LogDisplay {
    last: Option<Coordinate>,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently reported position.
    pub fn last_position(&self) -> Option<Coordinate> {
        self.last
    }
}

impl DisplaySink for LogDisplay {
    fn report_position(&mut self, position: Coordinate) {
        log::info!("current location {position}");
        self.last = Some(position);
    }

    fn place_pin(&mut self, role: PinRole, position: Coordinate) {
        let (r, g, b) = role.tint();
        log::info!("pin {} at {position} (#{r:02x}{g:02x}{b:02x})", role.label());
    }

    fn show_route(&mut self, route: &Route) {
        if let Some((sw, ne)) = route.bounds() {
            let (r, g, b) = ROUTE_STROKE_RGB;
            log::info!(
                "route overlay: {} points within {sw}–{ne}, stroke #{r:02x}{g:02x}{b:02x} {ROUTE_STROKE_WIDTH}pt",
                route.len()
            );
        }
    }

    fn focus(&mut self, center: Coordinate, span_m: f64) {
        log::info!("region {span_m:.0} m around {center}");
    }
}
