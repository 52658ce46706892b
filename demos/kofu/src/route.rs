//! The demo's stand-in for a directions service.

use am_core::Coordinate;
use am_route::{CsvRouteProvider, Route, RouteProvider, RouteResult, StaticRouteProvider};

/// Kofu station to the nearby destination, passing the hazard on the way.
const BUILTIN_ROUTE: [(f64, f64); 9] = [
    (35.667, 138.569),
    (35.6671, 138.5696),
    (35.6672, 138.5702),
    (35.6674, 138.5707),
    (35.6677, 138.5709),
    (35.6680, 138.5708),
    (35.6683, 138.5703),
    (35.6684, 138.5700),
    (35.66839907403077, 138.5698015058478),
];

pub fn builtin_route() -> Route {
    BUILTIN_ROUTE
        .iter()
        .map(|&(lat, lon)| Coordinate::new(lat, lon))
        .collect::<Vec<_>>()
        .into()
}

pub enum DemoProvider {
    Builtin(StaticRouteProvider),
    Csv(CsvRouteProvider),
}

impl RouteProvider for DemoProvider {
    fn fetch_route(&self, from: Coordinate, to: Coordinate) -> RouteResult<Route> {
        match self {
            DemoProvider::Builtin(p) => p.fetch_route(from, to),
            DemoProvider::Csv(p) => p.fetch_route(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use am_core::DemoConfig;

    use super::builtin_route;

    #[test]
    fn builtin_route_runs_start_to_end_past_the_hazard() {
        let cfg = DemoConfig::default();
        let route = builtin_route();
        assert_eq!(route.origin(), Some(cfg.start));
        assert_eq!(route.destination(), Some(cfg.end));
        let inside = route
            .points()
            .iter()
            .filter(|p| p.distance_m(cfg.hazard) < cfg.hazard_radius_m)
            .count();
        assert_eq!(inside, 2);
    }
}
