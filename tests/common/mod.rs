//! In-memory data source for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use swapi_browser::api::{CatalogEntry, FetchError, PeoplePage, PersonRecord, ReferenceKind, StarWarsSource};

pub const BASE: &str = "https://swapi.test/api";

pub fn person_url(id: u32) -> String {
    format!("{}/people/{}/", BASE, id)
}

pub fn person(id: u32, name: &str) -> PersonRecord {
    PersonRecord {
        name: name.to_string(),
        height: "172".to_string(),
        mass: "77".to_string(),
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue".to_string(),
        birth_year: "19BBY".to_string(),
        gender: "male".to_string(),
        url: person_url(id),
        films: Vec::new(),
        vehicles: Vec::new(),
        starships: Vec::new(),
    }
}

pub fn entry(name: &str, image: &str) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        image: image.to_string(),
    }
}

/// Serves configured records, answers 404 for unknown IDs and records
/// every request it receives in order.
#[derive(Default)]
pub struct FakeSource {
    people: HashMap<u32, PersonRecord>,
    failing_people: HashSet<u32>,
    references: HashMap<String, String>,
    failing_references: HashSet<String>,
    pages: HashMap<String, PeoplePage>,
    catalog: Option<Vec<CatalogEntry>>,
    search_fails: bool,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            catalog: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn with_person(mut self, record: PersonRecord) -> Self {
        let id = record.url.trim_end_matches('/').rsplit('/').next().unwrap().parse().unwrap();
        self.people.insert(id, record);
        self
    }

    pub fn with_people(mut self, ids: &[u32]) -> Self {
        for id in ids {
            self = self.with_person(person(*id, &format!("Person {}", id)));
        }
        self
    }

    /// Requests for this ID fail with a 500
    pub fn with_failing_person(mut self, id: u32) -> Self {
        self.failing_people.insert(id);
        self
    }

    pub fn with_reference(mut self, url: &str, name: &str) -> Self {
        self.references.insert(url.to_string(), name.to_string());
        self
    }

    pub fn with_failing_reference(mut self, url: &str) -> Self {
        self.failing_references.insert(url.to_string());
        self
    }

    /// Page served for a cursor URL, `"default"` for the first page
    pub fn with_page(mut self, cursor: &str, page: PeoplePage) -> Self {
        self.pages.insert(cursor.to_string(), page);
        self
    }

    pub fn with_catalog(mut self, entries: Vec<CatalogEntry>) -> Self {
        self.catalog = Some(entries);
        self
    }

    pub fn with_failing_catalog(mut self) -> Self {
        self.catalog = None;
        self
    }

    pub fn with_failing_search(mut self) -> Self {
        self.search_fails = true;
        self
    }

    /// Delay the response for a request key (as recorded in `requests()`)
    pub fn with_delay(mut self, key: &str, millis: u64) -> Self {
        self.delays.insert(key.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_starting_with(&self, prefix: &str) -> Vec<String> {
        self.requests().into_iter().filter(|r| r.starts_with(prefix)).collect()
    }

    async fn record(&self, key: String) {
        self.requests.lock().unwrap().push(key.clone());
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
    }
}

fn server_error(url: String) -> FetchError {
    FetchError::Status { url, status: 500 }
}

#[async_trait]
impl StarWarsSource for FakeSource {
    async fn search_people(&self, query: &str) -> Result<Vec<PersonRecord>, FetchError> {
        self.record(format!("search:{}", query)).await;
        if self.search_fails {
            return Err(server_error(format!("{}/people/?search={}", BASE, query)));
        }

        let needle = query.to_lowercase();
        let mut ids: Vec<&u32> = self.people.keys().collect();
        ids.sort();
        Ok(ids
            .into_iter()
            .map(|id| &self.people[id])
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn person(&self, id: u32) -> Result<PersonRecord, FetchError> {
        self.record(format!("person:{}", id)).await;
        if self.failing_people.contains(&id) {
            return Err(server_error(person_url(id)));
        }
        self.people
            .get(&id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound { url: person_url(id) })
    }

    async fn people_page(&self, cursor: Option<&str>) -> Result<PeoplePage, FetchError> {
        let key = cursor.unwrap_or("default").to_string();
        self.record(format!("page:{}", key)).await;
        self.pages
            .get(&key)
            .cloned()
            .ok_or_else(|| FetchError::NotFound { url: key })
    }

    async fn reference_name(&self, kind: ReferenceKind, url: &str) -> Result<String, FetchError> {
        self.record(format!("{}:{}", kind.label(), url)).await;
        if self.failing_references.contains(url) {
            return Err(server_error(url.to_string()));
        }
        self.references
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound { url: url.to_string() })
    }

    async fn catalog_index(&self) -> Result<Vec<CatalogEntry>, FetchError> {
        self.record("catalog".to_string()).await;
        self.catalog.clone().ok_or_else(|| server_error("catalog".to_string()))
    }
}
