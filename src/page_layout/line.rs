//! Line-level layout computation
//!
//! Groups a page's overlays by line once, then places banners, ornaments and
//! highlight boxes for each line box.

use std::collections::HashMap;
use crate::models::{ChapterHeader, Highlight, LayoutStandard, Marker, Page, Verse};
use crate::utils::to_arabic_digits;
use super::config::{LayoutConfig, PageMetrics};
use super::display_list::*;
use super::document::ProjectionOptions;

/// A verse ornament waiting to be placed
#[derive(Debug, Clone, Copy)]
pub(crate) struct MarkerEntry<'a> {
    pub verse: &'a Verse,
    pub center_x: f64,
    pub center_y: f64,
    pub number_code_point: Option<&'a str>,
}

/// Page overlays grouped by line index
#[derive(Debug, Default)]
pub(crate) struct LineOverlays<'a> {
    pub banners: HashMap<u32, Vec<&'a ChapterHeader>>,
    pub markers: HashMap<u32, Vec<MarkerEntry<'a>>>,
    pub highlights: HashMap<u32, Vec<(u32, &'a Highlight)>>,
}

impl<'a> LineOverlays<'a> {
    pub fn collect(page: &'a Page, standard: LayoutStandard, options: &ProjectionOptions) -> Self {
        let mut overlays = Self::default();

        if options.show_chapter_banners {
            for header in page.chapter_headers(standard) {
                overlays.banners.entry(header.line).or_default().push(header);
            }
        }

        if options.show_verse_markers {
            overlays.markers = markers_by_line(page.verses(standard), standard);
        }

        if options.show_highlights {
            if let Some(selection) = options.selection {
                for verse in page.verses(standard).iter().filter(|v| selection.matches(v)) {
                    for span in verse.highlights(standard) {
                        overlays.highlights.entry(span.line).or_default().push((verse.verse_id, span));
                    }
                }
            }
        }

        overlays
    }
}

/// Group present markers by line, each line ordered by X then verse number
pub(crate) fn markers_by_line(verses: &[Verse], standard: LayoutStandard) -> HashMap<u32, Vec<MarkerEntry<'_>>> {
    let mut map: HashMap<u32, Vec<MarkerEntry<'_>>> = HashMap::new();

    for verse in verses {
        if let Marker::Present { line, center_x, center_y, number_code_point } = verse.marker(standard) {
            map.entry(*line).or_default().push(MarkerEntry {
                verse,
                center_x: *center_x,
                center_y: *center_y,
                number_code_point: number_code_point.as_deref(),
            });
        }
    }

    for list in map.values_mut() {
        list.sort_by(|a, b| {
            a.center_x
                .total_cmp(&b.center_x)
                .then(a.verse.number.cmp(&b.verse.number))
        });
    }

    map
}

/// Computes layout for a single line
pub struct LayoutLineComputer<'a> {
    config: &'a LayoutConfig,
    metrics: &'a PageMetrics,
    highlight_color: &'a str,
}

impl<'a> LayoutLineComputer<'a> {
    /// Create a new line computer
    pub fn new(config: &'a LayoutConfig, metrics: &'a PageMetrics, highlight_color: &'a str) -> Self {
        Self { config, metrics, highlight_color }
    }

    /// Compute layout for a single line
    pub(crate) fn compute_line_layout(
        &self,
        line_index: u32,
        image: Option<String>,
        overlays: &LineOverlays<'_>,
    ) -> RenderLine {
        let banners = overlays
            .banners
            .get(&line_index)
            .map(|headers| headers.iter().map(|h| self.place_banner(h)).collect())
            .unwrap_or_default();

        let markers = overlays
            .markers
            .get(&line_index)
            .map(|entries| entries.iter().map(|m| self.place_marker(m)).collect())
            .unwrap_or_default();

        let highlights = overlays
            .highlights
            .get(&line_index)
            .map(|spans| spans.iter().map(|(verse_id, h)| self.place_highlight(*verse_id, h)).collect())
            .unwrap_or_default();

        RenderLine {
            line_index,
            top: self.metrics.line_pitch * line_index as f64,
            height: self.metrics.line_height,
            image,
            banners,
            markers,
            highlights,
        }
    }

    /// Banners are centered on the line box itself
    pub fn place_banner(&self, header: &ChapterHeader) -> RenderBanner {
        let m = self.metrics;
        let center_x = m.width * header.center_x;
        let center_y = m.line_height * header.center_y;

        RenderBanner {
            chapter_id: header.chapter_id,
            x: center_x - m.banner_width / 2.0,
            y: center_y - m.banner_height / 2.0 + m.banner_y_offset,
            w: m.banner_width,
            h: m.banner_height,
            center_x,
            center_y,
        }
    }

    /// Ornament Y is measured on the uncropped artwork, so shift it by the crop
    pub(crate) fn place_marker(&self, entry: &MarkerEntry<'_>) -> RenderMarker {
        let m = self.metrics;
        let center_x = m.width * entry.center_x;
        let center_y = m.scaled_image_height * entry.center_y - m.crop_offset;

        RenderMarker {
            verse_id: entry.verse.verse_id,
            verse_number: entry.verse.number,
            chapter_id: entry.verse.chapter_id,
            label: to_arabic_digits(entry.verse.number),
            number_code_point: entry.number_code_point.map(str::to_string),
            x: center_x - m.marker_width / 2.0,
            y: center_y - m.marker_height / 2.0 + m.marker_y_offset,
            w: m.marker_width,
            h: m.marker_height,
            center_x,
            center_y,
            font_size: m.marker_font_size,
            padding: m.marker_padding,
        }
    }

    pub fn place_highlight(&self, verse_id: u32, span: &Highlight) -> RenderHighlight {
        let m = self.metrics;
        RenderHighlight {
            verse_id,
            x: m.width * span.left_position,
            y: 0.0,
            w: m.width * (span.right_position - span.left_position),
            h: m.line_height,
            color: self.highlight_color.to_string(),
            corner_radius: self.config.highlight_corner_radius,
        }
    }
}
