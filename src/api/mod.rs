//! Star Wars data source access
//!
//! Thin HTTP boundary over the primary people/films/vehicles/starships
//! catalog and the secondary portrait catalog. Everything above this module
//! talks to the `StarWarsSource` trait, never to reqwest directly.

pub mod client;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod source;

pub use client::SwapiClient;
pub use error::FetchError;
pub use logging::{ApiLogger, LogLevel, MonitoringConfig, RequestContext};
pub use models::{CatalogEntry, FilmRecord, NamedRecord, PeoplePage, PersonRecord, ReferenceKind};
pub use source::StarWarsSource;
