//! Mushaf Reader WASM Module
//!
//! Page layout for a fixed-layout scripture reader: projects each page's
//! normalized overlay geometry onto the viewport, resolves taps to verses and
//! chapters, and follows recitation audio to highlight the verse being read.

pub mod models;
pub mod page_layout;
pub mod recitation;
pub mod session;
pub mod store;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use page_layout::{LayoutConfig, LayoutEngine, PageLayout, ProjectionOptions, TapTarget, VerseSelection};
pub use recitation::{PlaybackTracker, RecitationConfig, TimingTable};
pub use session::{PageLoadTracker, ReaderSession};
pub use store::{QuranStore, StoreError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        crate::wasm_warn!("Logger was already initialized");
    }

    log::info!("Mushaf reader WASM module initialized");
}
