//! Reading state management
//!
//! The only mutable state of the reader: which chapter and verse are active,
//! which page is shown, and whether a recitation is playing. Components take
//! it by reference instead of reaching for a global.

use serde::{Deserialize, Serialize};

/// Complete reading state (single source of truth for selection and playback)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReadingState {
    /// Chapter number the reader is in
    pub current_chapter: u32,

    /// Verse number (within `current_chapter`) highlighted as active
    pub active_verse: Option<u32>,

    /// Page number currently shown
    pub current_page: u32,

    /// Recitation is playing
    pub is_playing: bool,
}

impl Default for ReadingState {
    fn default() -> Self {
        Self {
            current_chapter: 1,
            active_verse: None,
            current_page: 1,
            is_playing: false,
        }
    }
}

impl ReadingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current chapter; returns whether it changed
    pub fn set_current_chapter(&mut self, chapter: u32) -> bool {
        if self.current_chapter == chapter {
            return false;
        }
        log::info!("Current chapter {} -> {}", self.current_chapter, chapter);
        self.current_chapter = chapter;
        true
    }

    pub fn set_active_verse(&mut self, verse: Option<u32>) {
        self.active_verse = verse;
    }

    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page;
    }

    /// Set the playing flag; returns whether it changed
    pub fn set_is_playing(&mut self, playing: bool) -> bool {
        if self.is_playing == playing {
            return false;
        }
        self.is_playing = playing;
        true
    }

    /// Active verse as a (chapter, verse) pair, for highlight selection
    pub fn active_verse_key(&self) -> Option<(u32, u32)> {
        self.active_verse.map(|verse| (self.current_chapter, verse))
    }
}
