//! Verse timing tables
//!
//! A recitation comes with a timing table: for every chapter, the
//! millisecond interval in which each verse is recited.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors while loading timing data
#[derive(Debug, Error)]
pub enum TimingError {
    /// The timing resource is not valid JSON of the expected shape
    #[error("Invalid timing table: {0}")]
    Json(#[from] serde_json::Error),

    /// The table has no entry for the chapter
    #[error("No timing for chapter {0}")]
    ChapterMissing(u32),
}

/// Interval in which one verse is recited
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerseTiming {
    /// Verse number within the chapter
    pub ayah: u32,
    /// Inclusive start (ms)
    pub start_time: u64,
    /// Exclusive end (ms)
    pub end_time: u64,
}

impl VerseTiming {
    pub fn new(ayah: u32, start_time: u64, end_time: u64) -> Self {
        Self { ayah, start_time, end_time }
    }

    pub fn contains(&self, time_ms: u64) -> bool {
        self.start_time <= time_ms && time_ms < self.end_time
    }
}

/// Ordered verse intervals of one chapter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChapterTiming {
    /// Chapter number
    pub id: u32,
    #[serde(rename = "aya_timing")]
    pub verses: Vec<VerseTiming>,
}

impl ChapterTiming {
    pub fn new(id: u32, verses: Vec<VerseTiming>) -> Self {
        Self { id, verses }
    }

    /// Verse being recited at `time_ms`, if any interval contains it
    ///
    /// A chapter has at most 286 verses, so a linear scan is enough.
    pub fn verse_at(&self, time_ms: u64) -> Option<u32> {
        self.verses.iter().find(|t| t.contains(time_ms)).map(|t| t.ayah)
    }

    /// Start of a verse, for seeking the player to it
    pub fn start_of(&self, ayah: u32) -> Option<u64> {
        self.verses.iter().find(|t| t.ayah == ayah).map(|t| t.start_time)
    }
}

/// Timing resource of one reciter, covering all chapters
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct TimingTable {
    pub chapters: Vec<ChapterTiming>,
}

impl TimingTable {
    /// Decode the JSON timing resource
    pub fn from_json(json: &str) -> Result<Self, TimingError> {
        let table: TimingTable = serde_json::from_str(json)?;
        log::debug!("Loaded timing table with {} chapters", table.chapters.len());
        Ok(table)
    }

    pub fn chapter(&self, id: u32) -> Result<&ChapterTiming, TimingError> {
        self.chapters
            .iter()
            .find(|c| c.id == id)
            .ok_or(TimingError::ChapterMissing(id))
    }
}
