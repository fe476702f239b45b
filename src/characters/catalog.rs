//! Catalog Index: portrait URLs keyed by character name

use log::{info, warn};

use crate::api::{CatalogEntry, StarWarsSource};

/// In-memory portrait catalog, loaded once per session
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
}

impl CatalogIndex {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Fetch the catalog once. Failure degrades to an empty index.
    pub async fn load(source: &dyn StarWarsSource) -> Self {
        match source.catalog_index().await {
            Ok(entries) => {
                info!("Loaded portrait catalog with {} entries", entries.len());
                Self::new(entries)
            }
            Err(e) => {
                warn!("Failed to load portrait catalog, portraits unavailable: {}", e);
                Self::default()
            }
        }
    }

    /// Join key: case-insensitive name equality, first entry wins.
    /// Any formatting difference between the two sources yields no portrait.
    pub fn portrait_for(&self, name: &str) -> Option<&str> {
        let key = name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == key)
            .map(|entry| entry.image.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
