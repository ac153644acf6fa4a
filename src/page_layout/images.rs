//! Line artwork lookup
//!
//! Each page line is drawn from its own raster image. The map from
//! (page number, line index) to an image handle is built once at startup,
//! either from the bundled asset layout or from a JSON manifest.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Mapping from (page number, 0-based line index) to an image handle
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LineImageMap {
    entries: HashMap<u32, HashMap<u32, String>>,
}

impl LineImageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map for the bundled asset layout `{prefix}/{page}/{line + 1}.png`
    pub fn bundled(prefix: &str, pages: impl IntoIterator<Item = u32>, line_count: u32) -> Self {
        let prefix = prefix.trim_end_matches('/');
        let mut map = Self::new();
        for page in pages {
            for line_index in 0..line_count {
                map.insert(page, line_index, format!("{}/{}/{}.png", prefix, page, line_index + 1));
            }
        }
        map
    }

    /// Parse a manifest of the form `{"<page>": {"<line number>": "<handle>"}}`
    ///
    /// Line numbers in the manifest are 1-based, as the artwork files are named.
    pub fn from_manifest_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<u32, HashMap<u32, String>> = serde_json::from_str(json)?;
        let mut map = Self::new();
        for (page, lines) in raw {
            for (line_number, handle) in lines {
                if line_number == 0 {
                    log::warn!("Skipping line 0 of page {} in image manifest", page);
                    continue;
                }
                map.insert(page, line_number - 1, handle);
            }
        }
        Ok(map)
    }

    pub fn insert(&mut self, page: u32, line_index: u32, handle: String) {
        self.entries.entry(page).or_default().insert(line_index, handle);
    }

    /// Image handle of a line, if the page has artwork for it
    pub fn resolve(&self, page: u32, line_index: u32) -> Option<&str> {
        self.entries.get(&page)?.get(&line_index).map(String::as_str)
    }

    pub fn page_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
