//! Character Resolver: name query to a single character

use log::{debug, warn};
use std::sync::Arc;

use super::catalog::CatalogIndex;
use super::model::Character;
use crate::api::StarWarsSource;

/// Message shown when a search yields no results
pub const NOT_FOUND_MESSAGE: &str = "No character found.";

/// Message shown for any transport failure during a search
pub const SEARCH_FAILED_MESSAGE: &str = "An error occurred while searching for the character.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Found(Character),
    NotFound,
    SearchFailed { message: String },
}

impl ResolveOutcome {
    /// User-facing error text, empty on success
    pub fn error_message(&self) -> &str {
        match self {
            ResolveOutcome::Found(_) => "",
            ResolveOutcome::NotFound => NOT_FOUND_MESSAGE,
            ResolveOutcome::SearchFailed { message } => message,
        }
    }
}

#[derive(Clone)]
pub struct Resolver {
    source: Arc<dyn StarWarsSource>,
    catalog: Arc<CatalogIndex>,
}

impl Resolver {
    pub fn new(source: Arc<dyn StarWarsSource>, catalog: Arc<CatalogIndex>) -> Self {
        Self { source, catalog }
    }

    /// Resolve a free-text query to its best match.
    ///
    /// Returns `None` without issuing a request for blank input.
    pub async fn resolve(&self, query: &str) -> Option<ResolveOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let results = match self.source.search_people(query).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Error searching for character '{}': {}", query, e);
                return Some(ResolveOutcome::SearchFailed {
                    message: SEARCH_FAILED_MESSAGE.to_string(),
                });
            }
        };

        debug!("Search '{}' returned {} results", query, results.len());

        let Some(record) = results.into_iter().next() else {
            return Some(ResolveOutcome::NotFound);
        };

        let portrait = self.catalog.portrait_for(&record.name).map(str::to_string);
        match Character::from_record(record, portrait) {
            Ok(character) => Some(ResolveOutcome::Found(character)),
            Err(e) => {
                warn!("Search result for '{}' is unusable: {:#}", query, e);
                Some(ResolveOutcome::SearchFailed {
                    message: SEARCH_FAILED_MESSAGE.to_string(),
                })
            }
        }
    }
}
