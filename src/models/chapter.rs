//! Chapters (surahs), chapter-title placements, and the part/quarter divisions

use serde::{Deserialize, Serialize};
use super::serde_helpers::deserialize_flag;

/// Where a chapter was revealed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Revelation {
    Meccan,
    Medinan,
}

impl Revelation {
    /// Label used in the chapter detail popup
    pub fn arabic_label(self) -> &'static str {
        match self {
            Revelation::Meccan => "مكية",
            Revelation::Medinan => "مدنية",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Chapter {
    pub identifier: u32,
    /// Canonical chapter number (1..=114)
    pub number: u32,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_meccan: bool,
    pub title: String,
    pub arabic_title: String,
    pub english_title: String,
    /// Glyph code point of the calligraphic title in the title font
    pub title_code_point: String,
    pub searchable_text: Option<String>,
    pub searchable_keywords: Option<String>,
}

impl Chapter {
    pub fn revelation(&self) -> Revelation {
        if self.is_meccan {
            Revelation::Meccan
        } else {
            Revelation::Medinan
        }
    }
}

/// Placement of a chapter-title banner on a page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChapterHeader {
    #[serde(default)]
    pub id: u32,
    pub chapter_id: Option<u32>,
    pub line: u32,
    /// Normalized horizontal center (fraction of page width)
    #[serde(rename = "centerX")]
    pub center_x: f64,
    /// Normalized vertical center (fraction of line height)
    #[serde(rename = "centerY")]
    pub center_y: f64,
}

/// A juz' (one of thirty parts)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub identifier: u32,
    pub number: u32,
    pub arabic_title: String,
    pub english_title: String,
}

/// A quarter of a hizb
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quarter {
    pub identifier: u32,
    pub hizb_number: u32,
    pub hizb_fraction: u32,
    pub arabic_title: String,
    pub english_title: String,
    #[serde(rename = "part_id")]
    pub part_id: Option<u32>,
}
