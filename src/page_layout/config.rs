//! Layout configuration and the metrics derived from a viewport width

use serde::{Deserialize, Serialize};
use crate::models::LayoutStandard;

/// Configuration for page layout calculations
///
/// Reference dimensions are in pixels of the original 1440 px wide artwork and
/// get scaled by [`PageMetrics::line_scale`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Lines per page
    pub line_count: u32,

    /// Horizontal resolution of the source artwork
    pub reference_width: f64,

    /// Width : height of the displayed (cropped) line box
    pub line_aspect_ratio: f64,

    /// Width : height of the line artwork before cropping
    pub image_aspect_ratio: f64,

    /// Gap below each line box (px, unscaled)
    pub line_spacing: f64,

    /// Chapter banner width as a fraction of page width
    pub banner_width_ratio: f64,

    /// Chapter banner height as a fraction of line height
    pub banner_height_ratio: f64,

    /// Downward nudge of chapter banners (reference px)
    pub banner_center_y_offset: f64,

    /// Correction between the font box and the visible ornament glyph
    pub marker_balance: f64,

    /// Verse ornament width (reference px, before balance)
    pub marker_base_width: f64,

    /// Verse ornament height (reference px, before balance)
    pub marker_base_height: f64,

    /// Ornament numeral font size (reference px, before balance)
    pub marker_base_font_size: f64,

    /// Horizontal padding around the numeral (reference px, before balance)
    pub marker_base_padding: f64,

    /// Downward nudge of verse ornaments (reference px)
    pub marker_center_y_offset: f64,

    /// Extra touch area around banners and ornaments (px, unscaled)
    pub hit_slop: f64,

    /// Fill of the active verse highlight
    pub highlight_color: String,

    /// Corner radius of highlight boxes (px, unscaled)
    pub highlight_corner_radius: f64,

    /// Standard used when the host does not pick one
    pub default_standard: LayoutStandard,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_count: 15,
            reference_width: 1440.0,
            line_aspect_ratio: 1440.0 / 232.0,
            image_aspect_ratio: 1440.0 / 232.0,
            line_spacing: 4.0,
            banner_width_ratio: 0.9,
            banner_height_ratio: 0.8,
            banner_center_y_offset: 6.0,
            marker_balance: 3.69,
            marker_base_width: 21.0,
            marker_base_height: 27.0,
            marker_base_font_size: 14.0,
            marker_base_padding: 2.0,
            marker_center_y_offset: 8.0,
            hit_slop: 10.0,
            highlight_color: "rgba(88, 168, 105, 0.4)".to_string(),
            highlight_corner_radius: 4.0,
            default_standard: LayoutStandard::Standard1441,
        }
    }
}

impl LayoutConfig {
    /// Metrics for a viewport width, or `None` when nothing can be laid out
    pub fn metrics(&self, width: f64) -> Option<PageMetrics> {
        if !width.is_finite() || width <= 0.0 {
            return None;
        }

        let line_height = width / self.line_aspect_ratio;
        let line_scale = width / self.reference_width;
        let scaled_image_height = width / self.image_aspect_ratio;

        Some(PageMetrics {
            width,
            line_height,
            line_pitch: line_height + self.line_spacing,
            line_scale,
            scaled_image_height,
            crop_offset: (scaled_image_height - line_height) / 2.0,
            banner_width: width * self.banner_width_ratio,
            banner_height: line_height * self.banner_height_ratio,
            banner_y_offset: self.banner_center_y_offset * line_scale,
            marker_width: self.marker_base_width * self.marker_balance * line_scale,
            marker_height: self.marker_base_height * self.marker_balance * line_scale,
            marker_font_size: self.marker_base_font_size * self.marker_balance * line_scale,
            marker_padding: self.marker_base_padding * self.marker_balance * line_scale,
            marker_y_offset: self.marker_center_y_offset * line_scale,
        })
    }
}

/// Pixel metrics for one viewport width
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PageMetrics {
    pub width: f64,
    pub line_height: f64,
    /// Distance between the tops of consecutive line boxes
    pub line_pitch: f64,
    pub line_scale: f64,
    /// Height of the line artwork scaled to `width`, before cropping to `line_height`
    pub scaled_image_height: f64,
    /// Half of the height trimmed off the artwork; marker Y must subtract it
    pub crop_offset: f64,
    pub banner_width: f64,
    pub banner_height: f64,
    pub banner_y_offset: f64,
    pub marker_width: f64,
    pub marker_height: f64,
    pub marker_font_size: f64,
    pub marker_padding: f64,
    pub marker_y_offset: f64,
}
