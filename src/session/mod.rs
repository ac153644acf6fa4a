//! Reader session
//!
//! Screen-level glue: the page load lifecycle, the pager, and the reading
//! state shared with recitation.

pub mod page_load;
pub mod pager;
pub mod reader;

pub use page_load::{LoadState, LoadToken, PageLoadTracker};
pub use pager::{follow_page, item_layout, page_at_offset, page_numbers, PagerItemLayout};
pub use reader::ReaderSession;
