//! JS-owned reader session
//!
//! The host creates one `MushafSession` per reading screen and drives it:
//! page loads go through the token handshake, player samples are polled in,
//! and layouts/taps are computed against the loaded page.

use wasm_bindgen::prelude::*;
use crate::models::Page;
use crate::page_layout::{LayoutConfig, LayoutEngine, LineImageMap, PageLayout, ProjectionOptions, TapPosition, TapTarget};
use crate::recitation::{PlaybackSample, RecitationConfig, TimingTable};
use crate::session::{LoadState, LoadToken, PageLoadTracker, ReaderSession};
use crate::store::StoreError;
use crate::{wasm_info, wasm_warn};
use super::helpers::{deserialize, deserialize_or_default, serialize, validate_page_number, validation_error};

#[wasm_bindgen]
pub struct MushafSession {
    engine: LayoutEngine,
    reader: ReaderSession,
    loads: PageLoadTracker,
}

#[wasm_bindgen]
impl MushafSession {
    /// Create a session; both arguments may be omitted for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_js: JsValue, recitation_js: JsValue) -> Result<MushafSession, JsValue> {
        let config: LayoutConfig = deserialize_or_default(config_js, "Failed to deserialize layout config")?;
        let recitation: RecitationConfig =
            deserialize_or_default(recitation_js, "Failed to deserialize recitation config")?;

        Ok(MushafSession {
            engine: LayoutEngine::new(config),
            reader: ReaderSession::new(recitation),
            loads: PageLoadTracker::new(),
        })
    }

    /// Use the bundled `{prefix}/{page}/{line}.png` artwork for every page
    #[wasm_bindgen(js_name = useBundledImages)]
    pub fn use_bundled_images(&mut self, prefix: &str) {
        let line_count = self.engine.config().line_count;
        let images = LineImageMap::bundled(prefix, crate::session::page_numbers(), line_count);
        self.engine = LayoutEngine::new(self.engine.config().clone()).with_images(images);
    }

    /// Load line artwork handles from a JSON manifest
    #[wasm_bindgen(js_name = setLineImages)]
    pub fn set_line_images(&mut self, manifest_json: &str) -> Result<(), JsValue> {
        let images = LineImageMap::from_manifest_json(manifest_json)
            .map_err(|e| validation_error(format!("Invalid image manifest: {}", e)))?;
        wasm_info!("Line images loaded for {} pages", images.page_count());
        self.engine = LayoutEngine::new(self.engine.config().clone()).with_images(images);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Page loading
    // ------------------------------------------------------------------------

    /// Start loading a page; pass the returned token back to `commitPageLoad`
    #[wasm_bindgen(js_name = beginPageLoad)]
    pub fn begin_page_load(&mut self, page_number: u32) -> Result<JsValue, JsValue> {
        validate_page_number(page_number).map_err(validation_error)?;
        let token = self.loads.begin(page_number);
        serialize(&token, "Failed to serialize load token")
    }

    /// Finish a load with the store's page (`null` when missing) or an error message
    ///
    /// Returns false when the result was superseded and dropped.
    #[wasm_bindgen(js_name = commitPageLoad)]
    pub fn commit_page_load(
        &mut self,
        token_js: JsValue,
        page_js: JsValue,
        error: Option<String>,
    ) -> Result<bool, JsValue> {
        let token: LoadToken = deserialize(token_js, "Failed to deserialize load token")?;

        let outcome = match error {
            Some(message) => Err(StoreError::Backend(message)),
            None => Ok(deserialize_or_default::<Option<Page>>(page_js, "Failed to deserialize page")?),
        };

        let committed = self.loads.commit(token, outcome);
        if committed {
            if let Some(page) = self.loads.state().page().cloned() {
                self.reader.follow_page(&page);
            }
        } else {
            wasm_warn!("Dropped stale load of page {}", token.page_number);
        }
        Ok(committed)
    }

    /// Re-issue the current page request after a failure
    #[wasm_bindgen(js_name = retryPageLoad)]
    pub fn retry_page_load(&mut self) -> Result<JsValue, JsValue> {
        match self.loads.retry() {
            Some(token) => serialize(&token, "Failed to serialize load token"),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = loadState)]
    pub fn load_state(&self) -> Result<JsValue, JsValue> {
        serialize(self.loads.state(), "Failed to serialize load state")
    }

    /// The screen is gone; outstanding loads will be dropped
    pub fn unmount(&mut self) {
        self.loads.unmount();
    }

    // ------------------------------------------------------------------------
    // Layout and taps
    // ------------------------------------------------------------------------

    /// Layout of the loaded page; highlights the recited verse unless the
    /// options select one
    #[wasm_bindgen(js_name = computeLayout)]
    pub fn compute_layout(&self, width: f64, options_js: JsValue) -> Result<JsValue, JsValue> {
        let options = self.options_with_selection(options_js)?;

        let layout = match self.loads.state() {
            LoadState::Loaded { page } => self.engine.compute_layout(page, width, &options),
            _ => PageLayout::empty(self.reader.state().current_page),
        };
        serialize(&layout, "Failed to serialize page layout")
    }

    /// Resolve a tap on the loaded page
    #[wasm_bindgen(js_name = resolveTap)]
    pub fn resolve_tap(&self, width: f64, x: f64, y: f64, options_js: JsValue) -> Result<JsValue, JsValue> {
        let options: ProjectionOptions = deserialize_or_default(options_js, "Failed to deserialize options")?;

        let target = match self.loads.state().page() {
            Some(page) => self.engine.resolve_tap(page, width, &options, TapPosition { x, y }),
            None => TapTarget::None,
        };
        serialize(&target, "Failed to serialize tap target")
    }

    // ------------------------------------------------------------------------
    // Reading state and recitation
    // ------------------------------------------------------------------------

    #[wasm_bindgen(js_name = readingState)]
    pub fn reading_state(&self) -> Result<JsValue, JsValue> {
        serialize(self.reader.state(), "Failed to serialize reading state")
    }

    #[wasm_bindgen(js_name = setCurrentChapter)]
    pub fn set_current_chapter(&mut self, chapter: u32) -> bool {
        self.reader.set_current_chapter(chapter)
    }

    #[wasm_bindgen(js_name = setActiveVerse)]
    pub fn set_active_verse(&mut self, verse: Option<u32>) {
        self.reader.state_mut().set_active_verse(verse);
    }

    /// Install the reciter's timing resource (raw JSON)
    #[wasm_bindgen(js_name = setTimingTable)]
    pub fn set_timing_table(&mut self, table_json: &str) -> Result<(), JsValue> {
        let table = TimingTable::from_json(table_json).map_err(|e| validation_error(e.to_string()))?;
        self.reader.set_timing_table(table);
        Ok(())
    }

    /// Feed one player sample; returns the verse that became active
    pub fn poll(&mut self, playing: bool, position_secs: f64) -> Option<u32> {
        self.reader.poll(PlaybackSample { playing, position_secs })
    }

    #[wasm_bindgen(js_name = audioUrl)]
    pub fn audio_url(&self) -> String {
        self.reader.audio_url()
    }

    #[wasm_bindgen(js_name = timingUrl)]
    pub fn timing_url(&self) -> String {
        self.reader.recitation().timing_url()
    }
}

impl MushafSession {
    fn options_with_selection(&self, options_js: JsValue) -> Result<ProjectionOptions, JsValue> {
        let mut options: ProjectionOptions = deserialize_or_default(options_js, "Failed to deserialize options")?;
        if options.selection.is_none() {
            options.selection = self.reader.active_selection();
        }
        Ok(options)
    }
}
