//! Where recitation media comes from
//!
//! Audio is one file per chapter, named by the zero-padded chapter number.
//! Timing tables are one resource per reciter. Fetching is left to the host.

use serde::{Deserialize, Serialize};

/// Recitation endpoints
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RecitationConfig {
    /// Directory holding `NNN.mp3` chapter files
    pub audio_base_url: String,

    /// Timing resource location; `{reciter}` is substituted
    pub timing_url_template: String,

    /// Reciter whose timing table is used
    pub reciter_id: u32,
}

impl Default for RecitationConfig {
    fn default() -> Self {
        Self {
            audio_base_url: "https://server6.mp3quran.net/akdr".to_string(),
            timing_url_template: "timing/{reciter}.json".to_string(),
            reciter_id: 1,
        }
    }
}

impl RecitationConfig {
    /// Audio file of a chapter, e.g. `.../002.mp3`
    pub fn audio_url(&self, chapter: u32) -> String {
        format!("{}/{:03}.mp3", self.audio_base_url.trim_end_matches('/'), chapter)
    }

    pub fn timing_url(&self) -> String {
        self.timing_url_template.replace("{reciter}", &self.reciter_id.to_string())
    }
}
