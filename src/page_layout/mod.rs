//! Page Layout Engine
//!
//! This module projects a page's normalized overlay geometry (verse
//! ornaments, chapter banners, highlight spans) to absolute pixels for a
//! viewport width, generating a PageLayout the host renders as-is, and maps
//! taps back to the verse or chapter under them.

pub mod config;
pub mod display_list;
pub mod document;
pub mod line;
pub mod images;

pub use config::{LayoutConfig, PageMetrics};
pub use document::{LayoutEngine, ProjectionOptions, VerseSelection};
pub use display_list::{PageLayout, RenderLine, RenderBanner, RenderMarker, RenderHighlight};
pub use hit_test::{resolve_verse_tap, TapTarget, TapPosition, VersePressEvent, ChapterPressEvent};
pub use images::LineImageMap;
