//! Terminal-bell sound engine.
//!
//! Rings `BEL` on the given writer and treats the alert as audible for a
//! fixed clip length, so a [`DebouncedAlertPlayer`][am_sim::DebouncedAlertPlayer]
//! suppresses triggers that land inside that window.

use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use am_sim::{AlertError, SoundEngine};

pub struct BellEngine<W: Write> {
    out:           W,
    clip:          Duration,
    playing_until: Option<Instant>,
}

impl<W: Write> BellEngine<W> {
    pub fn new(out: W, clip: Duration) -> Self {
        Self {
            out,
            clip,
            playing_until: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundEngine for BellEngine<W> {
    fn is_playing(&self) -> bool {
        self.playing_until.is_some_and(|t| Instant::now() < t)
    }

    fn play(&mut self, asset: &Path) -> Result<(), AlertError> {
        self.out
            .write_all(b"\x07")
            .and_then(|()| self.out.flush())
            .map_err(|e| AlertError::PlaybackFailure(format!("{}: {e}", asset.display())))?;
        self.playing_until = Some(Instant::now() + self.clip);
        Ok(())
    }
}
