//! Reader session
//!
//! Ties the reading state to recitation: which audio to play for the
//! current chapter, which timing to correlate against, and which verse to
//! highlight.

use crate::models::{Page, ReadingState};
use crate::page_layout::VerseSelection;
use crate::recitation::{PlaybackSample, PlaybackTracker, RecitationConfig, TimingTable};

/// Reading state plus the recitation attached to it
#[derive(Debug, Default)]
pub struct ReaderSession {
    state: ReadingState,
    tracker: PlaybackTracker,
    recitation: RecitationConfig,
    timing_table: Option<TimingTable>,
}

impl ReaderSession {
    pub fn new(recitation: RecitationConfig) -> Self {
        Self {
            recitation,
            ..Default::default()
        }
    }

    pub fn state(&self) -> &ReadingState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ReadingState {
        &mut self.state
    }

    pub fn recitation(&self) -> &RecitationConfig {
        &self.recitation
    }

    pub fn tracker(&self) -> &PlaybackTracker {
        &self.tracker
    }

    /// Audio file for the current chapter
    pub fn audio_url(&self) -> String {
        self.recitation.audio_url(self.state.current_chapter)
    }

    /// Install the reciter's timing table and pick the current chapter from it
    pub fn set_timing_table(&mut self, table: TimingTable) {
        self.timing_table = Some(table);
        self.reload_timing();
    }

    fn reload_timing(&mut self) {
        let chapter = self.state.current_chapter;
        match &self.timing_table {
            Some(table) => {
                // A missing chapter only disables verse tracking
                if let Err(e) = self.tracker.load_chapter(table, chapter) {
                    log::debug!("Verse tracking off for chapter {}: {}", chapter, e);
                }
            }
            None => self.tracker.set_timing(None),
        }
    }

    /// Switch chapters; timing follows. Returns whether it changed.
    pub fn set_current_chapter(&mut self, chapter: u32) -> bool {
        let changed = self.state.set_current_chapter(chapter);
        if changed {
            self.state.set_active_verse(None);
            self.tracker.sync_chapter(chapter);
            self.reload_timing();
        }
        changed
    }

    /// A page came into view; follow its leading chapter
    pub fn follow_page(&mut self, page: &Page) -> bool {
        self.state.set_current_page(page.number);
        match page.leading_chapter() {
            Some(chapter) => self.set_current_chapter(chapter),
            None => false,
        }
    }

    /// Feed one player sample; returns the verse that became active
    pub fn poll(&mut self, sample: PlaybackSample) -> Option<u32> {
        self.tracker.poll(&mut self.state, sample)
    }

    /// Selection to highlight for the verse being recited
    pub fn active_selection(&self) -> Option<VerseSelection> {
        self.state
            .active_verse_key()
            .map(|(chapter, verse)| VerseSelection::Key { chapter, verse })
    }
}
