//! Models module for the mushaf reader
//!
//! Page, verse and chapter records as served by the store, plus the reading
//! state that selection and playback mutate.

pub mod standard;
pub mod verse;
pub mod chapter;
pub mod page;
pub mod reading_state;
pub mod serde_helpers;

// Re-export commonly used types
pub use standard::LayoutStandard;
pub use verse::{Highlight, Marker, MarkerColumns, Verse};
pub use chapter::{Chapter, ChapterHeader, Part, Quarter, Revelation};
pub use page::{Page, PageHeader, PAGE_COUNT};
pub use reading_state::ReadingState;
