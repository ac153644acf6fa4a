//! Page-level layout computation
//!
//! This module contains the main entry point for layout calculations,
//! taking a page, a viewport width and display options and producing a
//! PageLayout.

use serde::{Deserialize, Serialize};
use crate::models::{LayoutStandard, Page, Verse};
use super::config::LayoutConfig;
use super::display_list::PageLayout;
use super::images::LineImageMap;
use super::line::{LayoutLineComputer, LineOverlays};

/// Which verse is shown as selected
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum VerseSelection {
    /// A verse picked by tapping, identified by its store id
    Id { verse_id: u32 },
    /// The verse being recited, identified by chapter and verse number
    Key { chapter: u32, verse: u32 },
}

impl VerseSelection {
    pub fn matches(&self, verse: &Verse) -> bool {
        match *self {
            VerseSelection::Id { verse_id } => verse.verse_id == verse_id,
            VerseSelection::Key { chapter, verse: number } => {
                verse.chapter_id == Some(chapter) && verse.number == number
            }
        }
    }
}

/// Display options for one projection
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ProjectionOptions {
    /// Layout standard to draw; falls back to the config default
    pub standard: Option<LayoutStandard>,
    pub show_chapter_banners: bool,
    pub show_verse_markers: bool,
    pub show_highlights: bool,
    /// Verse whose spans get highlight boxes
    pub selection: Option<VerseSelection>,
    /// Overrides the configured highlight color
    pub highlight_color: Option<String>,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            standard: None,
            show_chapter_banners: true,
            show_verse_markers: true,
            show_highlights: true,
            selection: None,
            highlight_color: None,
        }
    }
}

/// Main layout engine: projects normalized page geometry to pixels
///
/// Holds only configuration; every projection is a pure function of its inputs.
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
    images: LineImageMap,
}

impl LayoutEngine {
    /// Create a new layout engine
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            images: LineImageMap::new(),
        }
    }

    /// Attach the line artwork map used to fill `RenderLine::image`
    pub fn with_images(mut self, images: LineImageMap) -> Self {
        self.images = images;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn images(&self) -> &LineImageMap {
        &self.images
    }

    pub fn standard_for(&self, options: &ProjectionOptions) -> LayoutStandard {
        options.standard.unwrap_or(self.config.default_standard)
    }

    /// Compute the complete layout for a page
    ///
    /// # Arguments
    /// * `page` - The page to lay out
    /// * `width` - Viewport width in pixels
    /// * `options` - Standard, element toggles and the selected verse
    ///
    /// # Returns
    /// PageLayout with every overlay positioned; empty when `width` is zero,
    /// negative or not finite
    pub fn compute_layout(&self, page: &Page, width: f64, options: &ProjectionOptions) -> PageLayout {
        let Some(metrics) = self.config.metrics(width) else {
            log::debug!("Page {}: no layout for width {}", page.number, width);
            return PageLayout::empty(page.number);
        };

        let standard = self.standard_for(options);
        let overlays = LineOverlays::collect(page, standard, options);
        let highlight_color = options
            .highlight_color
            .clone()
            .unwrap_or_else(|| self.config.highlight_color.clone());
        let line_computer = LayoutLineComputer::new(&self.config, &metrics, &highlight_color);

        let lines = (0..self.config.line_count)
            .map(|line_index| {
                let image = self.images.resolve(page.number, line_index).map(str::to_string);
                line_computer.compute_line_layout(line_index, image, &overlays)
            })
            .collect();

        log::debug!(
            "Page {}: laid out {} lines at width {} ({:?})",
            page.number,
            self.config.line_count,
            width,
            standard
        );

        PageLayout {
            page_number: page.number,
            width,
            line_height: metrics.line_height,
            line_spacing: metrics.line_pitch - metrics.line_height,
            line_scale: metrics.line_scale,
            lines,
        }
    }
}
