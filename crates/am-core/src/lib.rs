//! `am-core` — foundational types for the `alertmap` route simulator.
//!
//! This crate is a dependency of every other `am-*` crate.  It intentionally
//! has no `am-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Coordinate`, haversine distance                      |
//! | [`ids`]         | `Generation` — tags route fetches and tick sources    |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `DemoConfig` and its baked-in defaults                |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `DemoConfig` from a JSON file.            |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DemoConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Coordinate;
pub use ids::Generation;
pub use time::{SimClock, Tick};
