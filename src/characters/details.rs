//! Detail Aggregator: resolves film/vehicle/starship references to names

use futures::future::join_all;
use log::{debug, warn};
use serde::Serialize;
use std::sync::Arc;

use super::model::{Character, CharacterId};
use crate::api::{ReferenceKind, StarWarsSource};

/// Display lists for one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterDetails {
    /// Character these lists were fetched for
    pub character_id: CharacterId,
    pub films: Vec<String>,
    pub vehicles: Vec<String>,
    pub starships: Vec<String>,
}

impl CharacterDetails {
    pub fn empty(character_id: CharacterId) -> Self {
        Self {
            character_id,
            films: Vec::new(),
            vehicles: Vec::new(),
            starships: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct DetailAggregator {
    source: Arc<dyn StarWarsSource>,
}

impl DetailAggregator {
    pub fn new(source: Arc<dyn StarWarsSource>) -> Self {
        Self { source }
    }

    /// Fetch all three lists concurrently. The result always replaces
    /// whatever was shown before.
    pub async fn aggregate(&self, character: &Character) -> CharacterDetails {
        let (films, vehicles, starships) = futures::join!(
            self.resolve_list(ReferenceKind::Film, &character.films),
            self.resolve_list(ReferenceKind::Vehicle, &character.vehicles),
            self.resolve_list(ReferenceKind::Starship, &character.starships),
        );

        debug!(
            "Details for {}: {} films, {} vehicles, {} starships",
            character.id,
            films.len(),
            vehicles.len(),
            starships.len()
        );

        CharacterDetails {
            character_id: character.id,
            films,
            vehicles,
            starships,
        }
    }

    /// One request per URL, all in flight together. Output keeps input
    /// order; failed references are logged and left out.
    pub async fn resolve_list(&self, kind: ReferenceKind, urls: &[String]) -> Vec<String> {
        let results = join_all(urls.iter().map(|url| self.source.reference_name(kind, url))).await;

        results
            .into_iter()
            .zip(urls)
            .filter_map(|(result, url)| match result {
                Ok(name) => Some(name),
                Err(e) => {
                    warn!("Error fetching {} {}: {}", kind.label(), url, e);
                    None
                }
            })
            .collect()
    }
}
