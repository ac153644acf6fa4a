//! Stateless layout functions
//!
//! Projection and hit-testing for callers that keep the page data on the
//! JavaScript side.

use wasm_bindgen::prelude::*;
use crate::models::Page;
use crate::page_layout::{resolve_verse_tap, LayoutConfig, LayoutEngine, ProjectionOptions, TapPosition};
use crate::{wasm_error, wasm_log};
use super::helpers::{deserialize, deserialize_or_default, serialize, standard_from_code, validation_error};

/// Project a page's overlays for a viewport width
///
/// # Parameters
/// - `page_js`: Page object as returned by the store
/// - `width`: Viewport width in pixels
/// - `options_js`: ProjectionOptions (optional)
/// - `config_js`: LayoutConfig overrides (optional)
///
/// # Returns
/// PageLayout; its `lines` are empty when `width` is not a positive number
#[wasm_bindgen(js_name = projectPage)]
pub fn project_page(
    page_js: JsValue,
    width: f64,
    options_js: JsValue,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let page: Page = deserialize(page_js, "Failed to deserialize page")?;
    let options: ProjectionOptions = deserialize_or_default(options_js, "Failed to deserialize options")?;
    let config: LayoutConfig = deserialize_or_default(config_js, "Failed to deserialize layout config")?;

    let layout = LayoutEngine::new(config).compute_layout(&page, width, &options);
    wasm_log!("projectPage: page {} -> {} lines", page.number, layout.lines.len());

    serialize(&layout, "Failed to serialize page layout")
}

/// Verse id under a tap on a line, or `undefined`
///
/// # Parameters
/// - `standard`: 1441 or 1405
/// - `line`: Line index (0-based)
/// - `x`: Tap X in pixels from the page's left edge
#[wasm_bindgen(js_name = resolveVerseTap)]
pub fn resolve_verse_tap_js(
    page_js: JsValue,
    standard: u16,
    width: f64,
    line: u32,
    x: f64,
) -> Result<Option<u32>, JsValue> {
    let standard = standard_from_code(standard).map_err(validation_error)?;
    let page: Page = deserialize(page_js, "Failed to deserialize page")?;

    Ok(resolve_verse_tap(&page, standard, width, line, x).map(|v| v.verse_id))
}

/// Resolve a tap anywhere on the page to a banner, ornament or verse
///
/// # Returns
/// TapTarget (`kind` is `chapter`, `verse` or `none`)
#[wasm_bindgen(js_name = resolveTap)]
pub fn resolve_tap(
    page_js: JsValue,
    width: f64,
    x: f64,
    y: f64,
    options_js: JsValue,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let page: Page = deserialize(page_js, "Failed to deserialize page")?;
    let options: ProjectionOptions = deserialize_or_default(options_js, "Failed to deserialize options")?;
    let config: LayoutConfig = deserialize_or_default(config_js, "Failed to deserialize layout config")?;

    let target = LayoutEngine::new(config).resolve_tap(&page, width, &options, TapPosition { x, y });
    serialize(&target, "Failed to serialize tap target").map_err(|e| {
        wasm_error!("resolveTap failed on page {}", page.number);
        e
    })
}
