//! Page records
//!
//! A page owns, for each layout standard, the verses laid out on it and the
//! chapter-title banners that open new chapters on it.

use serde::{Deserialize, Serialize};
use super::chapter::ChapterHeader;
use super::serde_helpers::deserialize_flag;
use super::standard::LayoutStandard;
use super::verse::Verse;

/// Number of pages in the mushaf
pub const PAGE_COUNT: u32 = 604;

/// Running header of a page (which part and quarter it belongs to)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PageHeader {
    /// Not every store hands the row id over
    #[serde(default)]
    pub id: u32,
    pub part_id: Option<u32>,
    pub quarter_id: Option<u32>,
}

/// Field names on the wire follow the store's records
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Page {
    pub identifier: u32,
    /// Printed page number (1..=604)
    pub number: u32,
    /// Page sits on the right side of the spread
    #[serde(rename = "isRight", deserialize_with = "deserialize_flag")]
    pub is_right: bool,

    pub header1441: Option<PageHeader>,
    pub header1405: Option<PageHeader>,

    /// Ordered by line ascending
    #[serde(rename = "chapterHeaders1441")]
    pub chapter_headers1441: Vec<ChapterHeader>,
    #[serde(rename = "chapterHeaders1405")]
    pub chapter_headers1405: Vec<ChapterHeader>,

    /// In store order; hit testing depends on it
    pub verses1441: Vec<Verse>,
    pub verses1405: Vec<Verse>,
}

impl Page {
    pub fn verses(&self, standard: LayoutStandard) -> &[Verse] {
        match standard {
            LayoutStandard::Standard1441 => &self.verses1441,
            LayoutStandard::Alternative1405 => &self.verses1405,
        }
    }

    pub fn chapter_headers(&self, standard: LayoutStandard) -> &[ChapterHeader] {
        match standard {
            LayoutStandard::Standard1441 => &self.chapter_headers1441,
            LayoutStandard::Alternative1405 => &self.chapter_headers1405,
        }
    }

    pub fn header(&self, standard: LayoutStandard) -> Option<&PageHeader> {
        match standard {
            LayoutStandard::Standard1441 => self.header1441.as_ref(),
            LayoutStandard::Alternative1405 => self.header1405.as_ref(),
        }
    }

    /// Chapter the reader is considered to be in while this page is shown
    ///
    /// Follows the first verse of the 1441 layout, whatever standard is displayed.
    pub fn leading_chapter(&self) -> Option<u32> {
        self.verses1441.first().and_then(|v| v.chapter_id)
    }

    pub fn find_verse(&self, standard: LayoutStandard, verse_id: u32) -> Option<&Verse> {
        self.verses(standard).iter().find(|v| v.verse_id == verse_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_accessors() {
        let page = Page {
            verses1441: vec![Verse { verse_id: 1, chapter_id: Some(2), ..Default::default() }],
            verses1405: vec![
                Verse { verse_id: 7, chapter_id: Some(3), ..Default::default() },
                Verse { verse_id: 8, chapter_id: Some(3), ..Default::default() },
            ],
            ..Default::default()
        };

        assert_eq!(page.verses(LayoutStandard::Standard1441).len(), 1);
        assert_eq!(page.verses(LayoutStandard::Alternative1405).len(), 2);
        assert!(page.find_verse(LayoutStandard::Alternative1405, 8).is_some());
        assert!(page.find_verse(LayoutStandard::Standard1441, 8).is_none());
        assert_eq!(page.leading_chapter(), Some(2));
    }

    #[test]
    fn test_leading_chapter_of_empty_page() {
        assert_eq!(Page::default().leading_chapter(), None);
    }

    #[test]
    fn test_page_in_store_shape() {
        let page: Page = serde_json::from_str(
            r#"{
                "identifier": 1,
                "number": 1,
                "isRight": 1,
                "header1441": {"part_id": 1, "quarter_id": 1},
                "header1405": null,
                "chapterHeaders1441": [{"id": 1, "chapter_id": 1, "line": 0, "centerX": 0.5, "centerY": 0.5}],
                "chapterHeaders1405": [],
                "verses1441": [{
                    "verseID": 1,
                    "humanReadableID": "1:1",
                    "number": 1,
                    "chapter_id": 1,
                    "marker1441": {"numberCodePoint": null, "line": null, "centerX": null, "centerY": null},
                    "marker1405": {"numberCodePoint": null, "line": null, "centerX": null, "centerY": null},
                    "highlights1441": [{"line": 1, "left_position": 0.1, "right_position": 0.9}],
                    "highlights1405": []
                }],
                "verses1405": []
            }"#,
        ).unwrap();

        assert!(page.is_right);
        assert_eq!(page.header1441.as_ref().map(|h| (h.id, h.part_id)), Some((0, Some(1))));
        assert_eq!(page.header1405, None);
        assert_eq!(page.chapter_headers1441[0].center_x, 0.5);
        assert_eq!(page.verses1441[0].marker1441, crate::models::Marker::Absent);
        assert_eq!(page.leading_chapter(), Some(1));
    }

    #[test]
    fn test_minimal_page() {
        let page: Page = serde_json::from_str(r#"{"number": 7, "isRight": false}"#).unwrap();
        assert_eq!(page.number, 7);
        assert!(page.verses1441.is_empty());
    }

    #[test]
    fn test_page_serializes_in_store_shape() {
        let json = serde_json::to_value(Page { number: 3, is_right: true, ..Default::default() }).unwrap();
        assert_eq!(json["isRight"], true);
        assert!(json["chapterHeaders1441"].is_array());

        let back: Page = serde_json::from_value(json).unwrap();
        assert_eq!(back.number, 3);
    }
}
