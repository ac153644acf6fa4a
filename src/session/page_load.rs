//! Page load tracking
//!
//! A page read may still be running when the reader swipes to another page
//! or the view goes away. Every request gets a token; a result is committed
//! only if its token is still the current one.

use serde::{Deserialize, Serialize};
use crate::models::Page;
use crate::store::{QuranStore, StoreError};

/// Identifies one issued page request
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken {
    pub page_number: u32,
    generation: u64,
}

/// What the view shows for its page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading { page_number: u32 },
    Loaded { page: Box<Page> },
    NotFound { page_number: u32 },
    Failed { page_number: u32, message: String },
}

impl LoadState {
    pub fn page(&self) -> Option<&Page> {
        match self {
            LoadState::Loaded { page } => Some(page),
            _ => None,
        }
    }

    /// The view should offer a retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, LoadState::NotFound { .. } | LoadState::Failed { .. })
    }
}

/// Tracks the single in-flight page request of a view
#[derive(Debug)]
pub struct PageLoadTracker {
    generation: u64,
    current: Option<u32>,
    mounted: bool,
    state: LoadState,
}

impl Default for PageLoadTracker {
    /// A tracker starts out attached to a mounted view
    fn default() -> Self {
        Self {
            generation: 0,
            current: None,
            mounted: true,
            state: LoadState::Idle,
        }
    }
}

impl PageLoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Issue a request for a page, superseding any earlier one
    pub fn begin(&mut self, page_number: u32) -> LoadToken {
        self.generation += 1;
        self.current = Some(page_number);
        self.state = LoadState::Loading { page_number };
        LoadToken { page_number, generation: self.generation }
    }

    /// Re-issue the request for the current page
    pub fn retry(&mut self) -> Option<LoadToken> {
        let page_number = self.current?;
        log::info!("Retrying page {}", page_number);
        Some(self.begin(page_number))
    }

    pub fn is_current(&self, token: LoadToken) -> bool {
        self.mounted && token.generation == self.generation
    }

    /// Record the outcome of a request; returns false if it was superseded
    pub fn commit(&mut self, token: LoadToken, outcome: Result<Option<Page>, StoreError>) -> bool {
        if !self.is_current(token) {
            log::warn!("Discarding stale result for page {}", token.page_number);
            return false;
        }

        self.state = match outcome {
            Ok(Some(page)) => LoadState::Loaded { page: Box::new(page) },
            Ok(None) => LoadState::NotFound { page_number: token.page_number },
            Err(e) if e.is_not_found() => LoadState::NotFound { page_number: token.page_number },
            Err(e) => {
                log::warn!("Loading page {} failed: {}", token.page_number, e);
                LoadState::Failed { page_number: token.page_number, message: e.to_string() }
            }
        };
        true
    }

    /// Issue and complete a request against a synchronous store
    pub fn load(&mut self, store: &dyn QuranStore, page_number: u32) -> &LoadState {
        let token = self.begin(page_number);
        let outcome = store.page_by_number(page_number);
        self.commit(token, outcome);
        &self.state
    }

    /// The view is gone; every outstanding result is dropped
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}
