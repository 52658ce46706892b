//! `am-route` — route polylines and the route-provider seam.
//!
//! Route computation is an external service.  This crate defines what the
//! simulator consumes from it and ships two stand-ins so the demo can run
//! without one.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`route`]    | `Route` — ordered polyline of `Coordinate`s               |
//! | [`provider`] | `RouteProvider` trait, `StaticRouteProvider`              |
//! | [`loader`]   | `CsvRouteProvider`, `load_route_csv`, `load_route_reader` |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod loader;
pub mod provider;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use loader::{CsvRouteProvider, load_route_csv, load_route_reader};
pub use provider::{RouteProvider, StaticRouteProvider};
pub use route::Route;
