//! Data source port used by the character components
//!
//! The HTTP client implements this trait; tests substitute an in-memory
//! implementation.

use async_trait::async_trait;

use super::error::FetchError;
use super::models::{CatalogEntry, PeoplePage, PersonRecord, ReferenceKind};

#[async_trait]
pub trait StarWarsSource: Send + Sync {
    /// Name search against the primary catalog, results in upstream order
    async fn search_people(&self, query: &str) -> Result<Vec<PersonRecord>, FetchError>;

    /// Fetch a single person by numeric ID
    async fn person(&self, id: u32) -> Result<PersonRecord, FetchError>;

    /// Fetch one listing page; `None` fetches the default first page
    async fn people_page(&self, cursor: Option<&str>) -> Result<PeoplePage, FetchError>;

    /// Resolve a film/vehicle/starship reference URL to its display name
    async fn reference_name(&self, kind: ReferenceKind, url: &str) -> Result<String, FetchError>;

    /// Fetch the full portrait catalog
    async fn catalog_index(&self) -> Result<Vec<CatalogEntry>, FetchError>;
}
