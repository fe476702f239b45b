//! Character view model

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::PersonRecord;

/// Numeric identity of a person in the primary catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterId(u32);

impl CharacterId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Parse the trailing numeric segment of a record URL,
    /// e.g. `https://swapi.dev/api/people/17/` -> 17
    pub fn from_url(url: &str) -> Result<Self> {
        let segment = url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .with_context(|| format!("No path segment in record URL: {}", url))?;

        let id = segment
            .parse::<u32>()
            .with_context(|| format!("Record URL does not end in a numeric ID: {}", url))?;

        Ok(Self(id))
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved character, replaced wholesale on every search or navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub url: String,
    pub films: Vec<String>,
    pub vehicles: Vec<String>,
    pub starships: Vec<String>,
    /// Portrait from the catalog index, absent when no entry matched
    pub portrait_url: Option<String>,
}

impl Character {
    pub fn from_record(record: PersonRecord, portrait_url: Option<String>) -> Result<Self> {
        let id = CharacterId::from_url(&record.url)?;

        Ok(Self {
            id,
            name: record.name,
            height: record.height,
            mass: record.mass,
            hair_color: record.hair_color,
            skin_color: record.skin_color,
            eye_color: record.eye_color,
            birth_year: record.birth_year,
            gender: record.gender,
            url: record.url,
            films: record.films,
            vehicles: record.vehicles,
            starships: record.starships,
            portrait_url,
        })
    }
}
