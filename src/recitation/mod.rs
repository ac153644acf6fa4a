//! Recitation sync
//!
//! Audio sources, verse timing tables, and the tracker that turns playback
//! position into the active verse.

pub mod source;
pub mod timing;
pub mod tracker;

pub use source::RecitationConfig;
pub use timing::{ChapterTiming, TimingError, TimingTable, VerseTiming};
pub use tracker::{PlaybackSample, PlaybackTracker, POLL_INTERVAL_MS};
