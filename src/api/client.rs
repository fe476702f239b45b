use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::constants::{self, headers};
use super::error::FetchError;
use super::logging::{ApiLogger, MonitoringConfig};
use super::models::{CatalogEntry, FilmRecord, NamedRecord, PeoplePage, PersonRecord, ReferenceKind};
use super::source::StarWarsSource;
use crate::config::Config;

/// HTTP client for the primary catalog and the portrait catalog
#[derive(Clone)]
pub struct SwapiClient {
    people_base_url: String,
    catalog_url: String,
    http_client: reqwest::Client,
    api_logger: ApiLogger,
}

impl SwapiClient {
    /// Client against the public endpoints with default settings
    pub fn new() -> anyhow::Result<Self> {
        Self::from_config(&Config::default())
    }

    /// Build a client from the loaded configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(config.http.user_agent.clone());

        // No timeout unless configured: a hung request keeps its affordance busy.
        if let Some(secs) = config.http.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http_client = builder.build()?;

        Ok(Self::with_custom_client(
            config.sources.people_base_url.clone(),
            config.sources.catalog_url.clone(),
            http_client,
            config.logging.monitoring(),
        ))
    }

    /// Create a client with a caller-provided HTTP client
    pub fn with_custom_client(
        people_base_url: String,
        catalog_url: String,
        http_client: reqwest::Client,
        monitoring: MonitoringConfig,
    ) -> Self {
        Self {
            people_base_url,
            catalog_url,
            http_client,
            api_logger: ApiLogger::new(monitoring),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, operation: &str, url: &str) -> Result<T, FetchError> {
        let context = self.api_logger.start_request(operation, url);

        let response = match self
            .http_client
            .get(url)
            .header("Accept", headers::ACCEPT_JSON)
            .send()
            .await
        {
            Ok(response) => response,
            Err(source) => {
                self.api_logger.log_failure(&context, None, &source.to_string());
                return Err(FetchError::Transport { url: url.to_string(), source });
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            self.api_logger.log_failure(&context, Some(404), "not found");
            return Err(FetchError::NotFound { url: url.to_string() });
        }
        if !status.is_success() {
            self.api_logger.log_failure(&context, Some(status.as_u16()), "unexpected status");
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        self.api_logger.log_response(&context, status.as_u16());

        response.json::<T>().await.map_err(|source| {
            self.api_logger.log_failure(&context, Some(status.as_u16()), &source.to_string());
            FetchError::Transport { url: url.to_string(), source }
        })
    }
}

#[async_trait]
impl StarWarsSource for SwapiClient {
    async fn search_people(&self, query: &str) -> Result<Vec<PersonRecord>, FetchError> {
        let url = constants::search_endpoint(&self.people_base_url, query);
        let page: PeoplePage = self.get_json("search", &url).await?;
        Ok(page.results)
    }

    async fn person(&self, id: u32) -> Result<PersonRecord, FetchError> {
        let url = constants::person_endpoint(&self.people_base_url, id);
        self.get_json("person", &url).await
    }

    async fn people_page(&self, cursor: Option<&str>) -> Result<PeoplePage, FetchError> {
        let url = match cursor {
            Some(cursor) => cursor.to_string(),
            None => constants::people_endpoint(&self.people_base_url),
        };
        self.get_json("page", &url).await
    }

    async fn reference_name(&self, kind: ReferenceKind, url: &str) -> Result<String, FetchError> {
        match kind {
            ReferenceKind::Film => {
                let film: FilmRecord = self.get_json(kind.label(), url).await?;
                Ok(film.title)
            }
            ReferenceKind::Vehicle | ReferenceKind::Starship => {
                let record: NamedRecord = self.get_json(kind.label(), url).await?;
                Ok(record.name)
            }
        }
    }

    async fn catalog_index(&self) -> Result<Vec<CatalogEntry>, FetchError> {
        let entries: Vec<CatalogEntry> = self.get_json("catalog", &self.catalog_url).await?;
        log::debug!("Portrait catalog holds {} entries", entries.len());
        Ok(entries)
    }
}
