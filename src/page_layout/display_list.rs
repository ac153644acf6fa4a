//! Display List for page rendering
//!
//! The output handed to the host: every overlay element with its absolute
//! pixel box already computed, so the host only has to place views.
//! Element coordinates are relative to their line box; `RenderLine::top`
//! places the line on the page.

use serde::{Deserialize, Serialize};

/// Top-level display list for one page at one viewport width
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PageLayout {
    /// Printed page number
    pub page_number: u32,

    /// Viewport width the layout was computed for
    pub width: f64,

    /// Height of every line box
    pub line_height: f64,

    /// Gap below every line box
    pub line_spacing: f64,

    /// Scale from reference artwork pixels to screen pixels
    pub line_scale: f64,

    /// Lines in reading order (empty when the width is unusable)
    pub lines: Vec<RenderLine>,
}

impl PageLayout {
    /// Layout with no renderable lines
    pub fn empty(page_number: u32) -> Self {
        Self {
            page_number,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total height of the stacked lines, gaps included
    pub fn height(&self) -> f64 {
        (self.line_height + self.line_spacing) * self.lines.len() as f64
    }

    pub fn line(&self, line_index: u32) -> Option<&RenderLine> {
        self.lines.iter().find(|l| l.line_index == line_index)
    }
}

/// A single line with all of its overlays
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderLine {
    /// Line index (0-based)
    pub line_index: u32,

    /// Y position of the line box on the page
    pub top: f64,

    pub height: f64,

    /// Background artwork for the line, if the image map has one
    pub image: Option<String>,

    /// Chapter-title banners starting on this line
    #[serde(default)]
    pub banners: Vec<RenderBanner>,

    /// Verse-end ornaments, ordered by X then verse number
    #[serde(default)]
    pub markers: Vec<RenderMarker>,

    /// Highlight boxes of the active verse on this line
    #[serde(default)]
    pub highlights: Vec<RenderHighlight>,
}

/// A positioned chapter-title banner
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderBanner {
    /// Chapter this banner opens (None when the store has no reference)
    pub chapter_id: Option<u32>,

    /// Left edge
    pub x: f64,

    /// Top edge
    pub y: f64,

    pub w: f64,
    pub h: f64,

    /// Absolute center, reported with press events
    pub center_x: f64,
    pub center_y: f64,
}

/// A positioned verse-end ornament
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderMarker {
    pub verse_id: u32,
    pub verse_number: u32,
    pub chapter_id: Option<u32>,

    /// Verse number in Arabic-Indic digits
    pub label: String,

    /// Ornament glyph code point, when the store provides one
    pub number_code_point: Option<String>,

    /// Left edge
    pub x: f64,

    /// Top edge
    pub y: f64,

    pub w: f64,
    pub h: f64,

    /// Absolute center (before the vertical nudge)
    pub center_x: f64,
    pub center_y: f64,

    /// Numeral font size
    pub font_size: f64,

    /// Horizontal padding around the numeral
    pub padding: f64,
}

/// A highlight box spanning the full line height
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderHighlight {
    pub verse_id: u32,

    /// Left edge
    pub x: f64,

    /// Always 0: highlights fill the line box
    pub y: f64,

    pub w: f64,
    pub h: f64,

    /// Fill color (CSS color string)
    pub color: String,

    pub corner_radius: f64,
}
