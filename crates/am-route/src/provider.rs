//! Route-provider trait and the fixed-polyline stand-in.
//!
//! # Pluggability
//!
//! `am-sim` never calls a provider directly: the controller emits a fetch
//! request and a `RouteFetcher` resolves it off the event loop, usually by
//! calling a [`RouteProvider`] on a worker thread.  Applications plug in a
//! client for a real directions service by implementing this trait.

use am_core::Coordinate;

use crate::{Route, RouteError, RouteResult};

// ── RouteProvider trait ───────────────────────────────────────────────────────

/// Source of drivable routes between two coordinates.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a fetch can run on a worker
/// thread while the event loop keeps ticking.
pub trait RouteProvider: Send + Sync {
    /// Fetch a driving route from `from` to `to`.
    ///
    /// Returns [`RouteError::NoRoute`] if the service has no path.
    fn fetch_route(&self, from: Coordinate, to: Coordinate) -> RouteResult<Route>;
}

// ── StaticRouteProvider ───────────────────────────────────────────────────────

/// Answers every request with the same polyline.
///
/// An empty polyline is reported as [`RouteError::NoRoute`], which is how an
/// unreachable destination looks to the simulator.
pub struct StaticRouteProvider {
    route: Route,
}

impl StaticRouteProvider {
    pub fn new(route: Route) -> Self {
        Self { route }
    }
}

impl RouteProvider for StaticRouteProvider {
    fn fetch_route(&self, from: Coordinate, to: Coordinate) -> RouteResult<Route> {
        if self.route.is_empty() {
            return Err(RouteError::NoRoute { from, to });
        }
        Ok(self.route.clone())
    }
}
