//! Alert playback with at-most-one sound in flight.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why an alert could not be played.  Never fatal to the tick loop.
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("alert sound asset not found: {}", .0.display())]
    AssetMissing(PathBuf),

    #[error("alert playback failed: {0}")]
    PlaybackFailure(String),
}

/// What a trigger did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlertOutcome {
    /// A new playback began.
    Started,
    /// A previous playback was still running; nothing happened.
    Suppressed,
}

/// The single operation the simulator needs from the audio side.
///
/// Must return promptly: playback runs in the background.
pub trait AlertPlayer {
    fn trigger_alert(&mut self) -> Result<AlertOutcome, AlertError>;
}

/// The platform sound engine underneath a [`DebouncedAlertPlayer`].
pub trait SoundEngine {
    /// `true` while a playback started by `play` is still audible.
    fn is_playing(&self) -> bool;

    /// Begin playing `asset` without blocking.
    fn play(&mut self, asset: &Path) -> Result<(), AlertError>;
}

/// Plays a fixed asset, ignoring triggers while the previous playback runs.
pub struct DebouncedAlertPlayer<E: SoundEngine> {
    engine: E,
    asset: PathBuf,
    started: u64,
    suppressed: u64,
}

impl<E: SoundEngine> DebouncedAlertPlayer<E> {
    pub fn new(engine: E, asset: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            asset: asset.into(),
            started: 0,
            suppressed: 0,
        }
    }

    /// Playbacks begun so far.
    pub fn started(&self) -> u64 {
        self.started
    }

    /// Triggers ignored because a playback was in flight.
    pub fn suppressed(&self) -> u64 {
        self.suppressed
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

impl<E: SoundEngine> AlertPlayer for DebouncedAlertPlayer<E> {
    fn trigger_alert(&mut self) -> Result<AlertOutcome, AlertError> {
        if self.engine.is_playing() {
            self.suppressed += 1;
            return Ok(AlertOutcome::Suppressed);
        }
        // The asset is located on every trigger so a file restored mid-run is
        // picked up by the next alert.
        if !self.asset.is_file() {
            return Err(AlertError::AssetMissing(self.asset.clone()));
        }
        self.engine.play(&self.asset)?;
        self.started += 1;
        Ok(AlertOutcome::Started)
    }
}
