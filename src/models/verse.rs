//! Verse records and their per-standard page geometry

use serde::{Deserialize, Serialize};
use super::standard::LayoutStandard;

/// Placement of a verse-end ornament on the page artwork
///
/// A verse that continues onto a later page has no marker on the current one.
/// On the wire a marker is the store's column group, see [`MarkerColumns`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(from = "Option<MarkerColumns>", into = "MarkerColumns")]
pub enum Marker {
    Present {
        /// Line index (0-based) the ornament sits on
        line: u32,
        /// Normalized horizontal center (fraction of page width)
        center_x: f64,
        /// Normalized vertical center (fraction of the uncropped line artwork height)
        center_y: f64,
        /// Glyph code point of the numbered ornament in the page font, if any
        number_code_point: Option<String>,
    },
    #[default]
    Absent,
}

/// Marker as the store hands it over: every column individually nullable
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerColumns {
    pub number_code_point: Option<String>,
    pub line: Option<u32>,
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
}

impl From<Option<MarkerColumns>> for Marker {
    fn from(columns: Option<MarkerColumns>) -> Self {
        match columns {
            Some(c) => Marker::from_columns(c.number_code_point, c.line, c.center_x, c.center_y),
            None => Marker::Absent,
        }
    }
}

impl From<Marker> for MarkerColumns {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::Present { line, center_x, center_y, number_code_point } => MarkerColumns {
                number_code_point,
                line: Some(line),
                center_x: Some(center_x),
                center_y: Some(center_y),
            },
            Marker::Absent => MarkerColumns::default(),
        }
    }
}

impl Marker {
    /// Build a marker from the store's flattened, individually nullable columns
    ///
    /// Any missing positional column means the marker is not drawn.
    pub fn from_columns(
        number_code_point: Option<String>,
        line: Option<u32>,
        center_x: Option<f64>,
        center_y: Option<f64>,
    ) -> Self {
        match (line, center_x, center_y) {
            (Some(line), Some(center_x), Some(center_y)) => Marker::Present {
                line,
                center_x,
                center_y,
                number_code_point,
            },
            _ => Marker::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Marker::Present { .. })
    }

    pub fn line(&self) -> Option<u32> {
        match self {
            Marker::Present { line, .. } => Some(*line),
            Marker::Absent => None,
        }
    }
}

/// Horizontal extent of a verse's text on one line
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub line: u32,
    pub left_position: f64,
    pub right_position: f64,
}

impl Highlight {
    pub fn new(line: u32, left_position: f64, right_position: f64) -> Self {
        Self { line, left_position, right_position }
    }

    /// Inclusive on both bounds; abutting spans both claim the shared edge
    pub fn contains(&self, normalized_x: f64) -> bool {
        self.left_position <= normalized_x && normalized_x <= self.right_position
    }
}

/// A verse with its text renderings and geometry for both layout standards
///
/// Field names on the wire follow the store's columns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Verse {
    #[serde(rename = "verseID")]
    pub verse_id: u32,
    /// Stable "chapter:verse" style identifier
    #[serde(rename = "humanReadableID")]
    pub human_readable_id: String,
    /// Verse number within its chapter (1-based)
    pub number: u32,

    pub text: String,
    #[serde(rename = "textWithoutTashkil")]
    pub text_without_tashkil: String,
    #[serde(rename = "uthmanicHafsText")]
    pub uthmanic_hafs_text: String,
    #[serde(rename = "hafsSmartText")]
    pub hafs_smart_text: String,
    #[serde(rename = "searchableText")]
    pub searchable_text: String,

    pub chapter_id: Option<u32>,
    pub part_id: Option<u32>,
    pub quarter_id: Option<u32>,
    pub section_id: Option<u32>,
    pub page1441_id: Option<u32>,
    pub page1405_id: Option<u32>,

    pub marker1441: Marker,
    pub marker1405: Marker,
    pub highlights1441: Vec<Highlight>,
    pub highlights1405: Vec<Highlight>,
}

impl Verse {
    pub fn marker(&self, standard: LayoutStandard) -> &Marker {
        match standard {
            LayoutStandard::Standard1441 => &self.marker1441,
            LayoutStandard::Alternative1405 => &self.marker1405,
        }
    }

    pub fn highlights(&self, standard: LayoutStandard) -> &[Highlight] {
        match standard {
            LayoutStandard::Standard1441 => &self.highlights1441,
            LayoutStandard::Alternative1405 => &self.highlights1405,
        }
    }

    /// Spans of this verse on a single line
    pub fn highlights_on_line(&self, standard: LayoutStandard, line: u32) -> impl Iterator<Item = &Highlight> {
        self.highlights(standard).iter().filter(move |h| h.line == line)
    }

    /// Text shown in the verse detail popup
    pub fn display_text(&self) -> &str {
        if self.hafs_smart_text.is_empty() {
            &self.text_without_tashkil
        } else {
            &self.hafs_smart_text
        }
    }
}
