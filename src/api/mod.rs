//! Mushaf Reader WASM API
//!
//! This module provides the JavaScript-facing API for the page reader.
//! It includes shared utilities for serialization, validation, and error handling,
//! as well as the API functions organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `layout`: Stateless page projection and tap resolution
//! - `recitation`: Timing lookups and audio sources
//! - `session`: The `MushafSession` object a reading screen owns

pub mod helpers;
pub mod layout;
pub mod recitation;
pub mod session;

pub use layout::{project_page, resolve_tap, resolve_verse_tap_js};
pub use recitation::{audio_url, chapter_timing, poll_interval_ms, to_arabic_digits_js, verse_at, verse_start_ms};
pub use session::MushafSession;
