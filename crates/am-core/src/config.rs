//! Demo configuration.
//!
//! Every value the simulator treats as a process-wide constant lives here.
//! `DemoConfig::default()` reproduces the baked-in demo around Kofu station;
//! the application crate may override it from a JSON file (feature `serde`).

use std::path::PathBuf;

use crate::{CoreError, CoreResult, Coordinate};

/// Kofu station — the vehicle's starting point.
pub const START: Coordinate = Coordinate::new(35.667, 138.569);

/// A nearby destination.
pub const END: Coordinate = Coordinate::new(35.66839907403077, 138.5698015058478);

/// The registered hazard point.
pub const HAZARD: Coordinate = Coordinate::new(35.668170044075985, 138.57070443965304);

/// Longest accepted tick period: one hour.
pub const MAX_TICK_PERIOD_MS: u64 = 3_600_000;

/// Simulator configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DemoConfig {
    /// Where the vehicle starts and where `reset` returns it.
    pub start: Coordinate,

    /// Route destination; shown with the destination pin.
    pub end: Coordinate,

    /// Centre of the hazard zone.
    pub hazard: Coordinate,

    /// Hazard radius in metres.  A position strictly closer triggers an alert.
    pub hazard_radius_m: f64,

    /// Milliseconds between simulation ticks.
    pub tick_period_ms: u64,

    /// Path of the alert sound asset.
    pub alert_asset: PathBuf,

    /// How long one alert playback keeps the player busy, in milliseconds.
    pub alert_clip_ms: u64,

    /// Side length of the initial map region centred on `start`, in metres.
    pub initial_span_m: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            start:           START,
            end:             END,
            hazard:          HAZARD,
            hazard_radius_m: 50.0,
            tick_period_ms:  1_000,
            alert_asset:     PathBuf::from("bird.mp3"),
            alert_clip_ms:   2_500,
            initial_span_m:  500.0,
        }
    }
}

impl DemoConfig {
    /// Reject values the simulator cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, c) in [("start", self.start), ("end", self.end), ("hazard", self.hazard)] {
            if !c.is_valid() {
                return Err(CoreError::Config(format!("{name} coordinate {c} is out of range")));
            }
        }
        if !(self.hazard_radius_m.is_finite() && self.hazard_radius_m > 0.0) {
            return Err(CoreError::Config(format!(
                "hazard_radius_m must be positive, got {}",
                self.hazard_radius_m
            )));
        }
        if self.tick_period_ms == 0 || self.tick_period_ms > MAX_TICK_PERIOD_MS {
            return Err(CoreError::Config(format!(
                "tick_period_ms must be in 1..={MAX_TICK_PERIOD_MS}, got {}",
                self.tick_period_ms
            )));
        }
        Ok(())
    }
}
