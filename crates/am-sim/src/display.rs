//! Display-side collaborators: the position sink and the permission prompt.

use am_core::Coordinate;
use am_route::Route;

/// Which pin a coordinate belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PinRole {
    /// The moving vehicle.  Drawn green.
    CurrentLocation,
    /// The route's destination.  Drawn red.
    Destination,
}

impl PinRole {
    /// Marker tint as an RGB triple.
    pub fn tint(self) -> (u8, u8, u8) {
        match self {
            PinRole::CurrentLocation => (0, 255, 0),
            PinRole::Destination => (255, 0, 0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PinRole::CurrentLocation => "current location",
            PinRole::Destination => "destination",
        }
    }
}

/// Route overlay stroke colour (cornflower blue).
pub const ROUTE_STROKE_RGB: (u8, u8, u8) = (100, 149, 237);

/// Route overlay stroke width in points.
pub const ROUTE_STROKE_WIDTH: f32 = 5.0;

/// Receives everything the simulator wants shown.
///
/// Called synchronously from the event loop.  The simulator never depends on
/// rendering completing or succeeding, so none of these methods return a
/// result.  Only `report_position` is required.
pub trait DisplaySink {
    /// Move the current-location pin to `position` and centre on it.
    ///
    /// Called exactly once per tick, and once per reset with the start
    /// coordinate.
    fn report_position(&mut self, position: Coordinate);

    /// Show a pin for `role` at `position`.
    fn place_pin(&mut self, _role: PinRole, _position: Coordinate) {}

    /// Overlay the route polyline and fit it on screen.
    fn show_route(&mut self, _route: &Route) {}

    /// Show a square region of `span_m` metres centred on `center`.
    fn focus(&mut self, _center: Coordinate, _span_m: f64) {}
}

/// Asks the platform for "when in use" location access.
///
/// Fire-and-forget: the simulator never reads the answer.
pub trait PermissionPrompt {
    fn request_when_in_use(&mut self);
}
