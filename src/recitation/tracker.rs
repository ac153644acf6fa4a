//! Playback-to-verse tracking
//!
//! The host polls the player on a fixed cadence and feeds each sample here.
//! The tracker mirrors the playing flag into the reading state and, while
//! playing, marks the verse being recited as active.

use serde::{Deserialize, Serialize};
use crate::models::ReadingState;
use super::timing::{ChapterTiming, TimingError, TimingTable};

/// How often the host should sample the player (ms)
pub const POLL_INTERVAL_MS: u32 = 200;

/// One reading of the player
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlaybackSample {
    pub playing: bool,
    /// Player position in seconds
    pub position_secs: f64,
}

impl PlaybackSample {
    /// Position in whole milliseconds; `None` for a position the player should never report
    pub fn position_ms(&self) -> Option<u64> {
        if self.position_secs.is_finite() && self.position_secs >= 0.0 {
            Some((self.position_secs * 1000.0).floor() as u64)
        } else {
            None
        }
    }
}

/// Correlates playback position with the verse being recited
#[derive(Clone, Debug, Default)]
pub struct PlaybackTracker {
    timing: Option<ChapterTiming>,
}

impl PlaybackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timing currently used for lookups
    pub fn timing(&self) -> Option<&ChapterTiming> {
        self.timing.as_ref()
    }

    pub fn set_timing(&mut self, timing: Option<ChapterTiming>) {
        self.timing = timing;
    }

    /// Take the chapter's intervals from a reciter's table
    ///
    /// On failure the tracker keeps no timing, so the active verse is simply
    /// never updated.
    pub fn load_chapter(&mut self, table: &TimingTable, chapter: u32) -> Result<(), TimingError> {
        match table.chapter(chapter) {
            Ok(timing) => {
                self.timing = Some(timing.clone());
                Ok(())
            }
            Err(e) => {
                log::warn!("Timing unavailable: {}", e);
                self.timing = None;
                Err(e)
            }
        }
    }

    /// Drop timing that belongs to a different chapter
    pub fn sync_chapter(&mut self, chapter: u32) {
        if self.timing.as_ref().is_some_and(|t| t.id != chapter) {
            log::debug!("Chapter changed to {}, dropping timing", chapter);
            self.timing = None;
        }
    }

    /// Apply one player sample to the reading state
    ///
    /// Returns the verse newly marked active, if any. When no interval
    /// contains the position the active verse is left as it was.
    pub fn poll(&self, state: &mut ReadingState, sample: PlaybackSample) -> Option<u32> {
        state.set_is_playing(sample.playing);

        if !sample.playing {
            return None;
        }

        let timing = self.timing.as_ref()?;
        let verse = timing.verse_at(sample.position_ms()?)?;

        if state.active_verse == Some(verse) {
            return None;
        }

        log::debug!("Recitation reached {}:{}", timing.id, verse);
        state.set_active_verse(Some(verse));
        Some(verse)
    }
}
