//! Page Fetcher: cursor-based browsing of the people listing.
//!
//! Independent of the Sequential Navigator even though both cover the
//! same ID space.

use log::{debug, warn};
use std::sync::Arc;

use crate::api::{FetchError, PersonRecord, StarWarsSource};

/// Which page to fetch relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCursor {
    First,
    Next,
    Previous,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub characters: Vec<PersonRecord>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub current_index: usize,
}

impl PageState {
    /// Cursor URL for the requested direction. `First` maps to the default
    /// endpoint (`Some(None)`), a missing cursor to `None`.
    pub fn cursor_url(&self, cursor: PageCursor) -> Option<Option<String>> {
        match cursor {
            PageCursor::First => Some(None),
            PageCursor::Next => self.next.clone().map(Some),
            PageCursor::Previous => self.previous.clone().map(Some),
        }
    }

    /// Mirrors the listing rule that disables "next": no forward cursor and
    /// the position index sits on the last row of the page.
    pub fn next_blocked(&self) -> bool {
        self.next.is_none() && self.characters.len().checked_sub(1) == Some(self.current_index)
    }

    pub fn selected(&self) -> Option<&PersonRecord> {
        self.characters.get(self.current_index)
    }

    pub fn select_next(&mut self) {
        if self.current_index + 1 < self.characters.len() {
            self.current_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }
}

#[derive(Clone)]
pub struct PageFetcher {
    source: Arc<dyn StarWarsSource>,
}

impl PageFetcher {
    pub fn new(source: Arc<dyn StarWarsSource>) -> Self {
        Self { source }
    }

    /// Fetch one page; `None` fetches the default first page.
    /// The position index always restarts at the page start.
    pub async fn fetch(&self, url: Option<&str>) -> Result<PageState, FetchError> {
        let page = self.source.people_page(url).await.map_err(|e| {
            warn!("Error fetching characters: {}", e);
            e
        })?;

        debug!(
            "Fetched page with {} characters (next: {}, previous: {})",
            page.results.len(),
            page.next.is_some(),
            page.previous.is_some()
        );

        Ok(PageState {
            characters: page.results,
            next: page.next,
            previous: page.previous,
            current_index: 0,
        })
    }
}
