//! Horizontal page pager
//!
//! Pages are full-width items in a right-to-left pager. The chapter the
//! reader is "in" follows the page in view.

use serde::{Deserialize, Serialize};
use crate::models::{ReadingState, PAGE_COUNT};
use crate::store::{QuranStore, StoreError};

/// Fixed item geometry of the pager list
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PagerItemLayout {
    pub index: u32,
    pub length: f64,
    pub offset: f64,
}

/// Item layout for list index `index` (page `index + 1`)
pub fn item_layout(index: u32, width: f64) -> PagerItemLayout {
    PagerItemLayout {
        index,
        length: width,
        offset: width * index as f64,
    }
}

/// Page number shown at a scroll offset, clamped to the mushaf
pub fn page_at_offset(offset: f64, width: f64) -> Option<u32> {
    if !width.is_finite() || width <= 0.0 || !offset.is_finite() {
        return None;
    }
    let index = (offset / width).round().max(0.0) as u32;
    Some((index + 1).min(PAGE_COUNT))
}

/// Every page number, in list order
pub fn page_numbers() -> impl Iterator<Item = u32> {
    1..=PAGE_COUNT
}

/// Make `page_number` the current page and follow its chapter
///
/// The chapter comes from the first verse of the page in the 1441 standard
/// and is applied only if the store knows it. Returns whether the chapter
/// changed.
pub fn follow_page(store: &dyn QuranStore, state: &mut ReadingState, page_number: u32) -> Result<bool, StoreError> {
    state.set_current_page(page_number);

    let Some(page) = store.page_by_number(page_number)? else {
        return Ok(false);
    };
    let Some(chapter_ref) = page.leading_chapter() else {
        return Ok(false);
    };

    match store.chapter_by_number(chapter_ref)? {
        Some(chapter) => Ok(state.set_current_chapter(chapter.number)),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_layout() {
        let layout = item_layout(3, 400.0);
        assert_eq!(layout.length, 400.0);
        assert_eq!(layout.offset, 1200.0);
    }

    #[test]
    fn test_page_at_offset() {
        assert_eq!(page_at_offset(0.0, 400.0), Some(1));
        assert_eq!(page_at_offset(790.0, 400.0), Some(3));
        assert_eq!(page_at_offset(1.0e9, 400.0), Some(PAGE_COUNT));
        assert_eq!(page_at_offset(-50.0, 400.0), Some(1));
        assert_eq!(page_at_offset(10.0, 0.0), None);
    }

    #[test]
    fn test_page_numbers() {
        let pages: Vec<u32> = page_numbers().collect();
        assert_eq!(pages.len(), 604);
        assert_eq!(pages.first(), Some(&1));
        assert_eq!(pages.last(), Some(&604));
    }
}
