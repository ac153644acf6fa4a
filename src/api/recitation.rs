//! Recitation helpers for the host player

use wasm_bindgen::prelude::*;
use crate::recitation::{ChapterTiming, RecitationConfig, TimingTable, POLL_INTERVAL_MS};
use crate::utils::to_arabic_digits;
use super::helpers::{deserialize, deserialize_or_default, serialize, validation_error};

/// Verse recited at `time_ms` within a chapter's timing, or `undefined`
#[wasm_bindgen(js_name = verseAt)]
pub fn verse_at(chapter_timing_js: JsValue, time_ms: f64) -> Result<Option<u32>, JsValue> {
    let timing: ChapterTiming = deserialize(chapter_timing_js, "Failed to deserialize chapter timing")?;
    if !time_ms.is_finite() || time_ms < 0.0 {
        return Ok(None);
    }
    Ok(timing.verse_at(time_ms.floor() as u64))
}

/// Extract one chapter's timing from a reciter's timing resource
#[wasm_bindgen(js_name = chapterTiming)]
pub fn chapter_timing(table_json: &str, chapter: u32) -> Result<JsValue, JsValue> {
    let table = TimingTable::from_json(table_json).map_err(|e| validation_error(e.to_string()))?;
    let timing = table.chapter(chapter).map_err(|e| validation_error(e.to_string()))?;
    serialize(timing, "Failed to serialize chapter timing")
}

/// Audio URL of a chapter
#[wasm_bindgen(js_name = audioUrl)]
pub fn audio_url(chapter: u32, recitation_js: JsValue) -> Result<String, JsValue> {
    let config: RecitationConfig = deserialize_or_default(recitation_js, "Failed to deserialize recitation config")?;
    Ok(config.audio_url(chapter))
}

/// Cadence at which the host should sample the player
#[wasm_bindgen(js_name = pollIntervalMs)]
pub fn poll_interval_ms() -> u32 {
    POLL_INTERVAL_MS
}

/// Arabic-Indic rendering of a number
#[wasm_bindgen(js_name = toArabicDigits)]
pub fn to_arabic_digits_js(value: u32) -> String {
    to_arabic_digits(value)
}

/// Start (ms) of a verse within a chapter's timing, for seeking the player
#[wasm_bindgen(js_name = verseStartMs)]
pub fn verse_start_ms(chapter_timing_js: JsValue, ayah: u32) -> Result<Option<f64>, JsValue> {
    let timing: ChapterTiming = deserialize(chapter_timing_js, "Failed to deserialize chapter timing")?;
    Ok(timing.start_of(ayah).map(|ms| ms as f64))
}
