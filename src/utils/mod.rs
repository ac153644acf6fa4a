//! Utility modules for the mushaf reader

pub mod digits;

// Re-export commonly used functions
pub use digits::*;
