//! Sequential Navigator: walks the numeric ID space to the adjacent
//! existing character.

use log::{debug, info, warn};
use std::sync::Arc;

use super::catalog::CatalogIndex;
use super::model::{Character, CharacterId};
use crate::api::StarWarsSource;
use crate::api::constants::{MAX_PERSON_ID, MIN_PERSON_ID};

/// Inclusive ID window the walk stays inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdBounds {
    pub min: u32,
    pub max: u32,
}

impl IdBounds {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Next candidate ID in the given direction, `None` once the bound is hit.
    /// Candidates are always clamped into the window.
    pub fn step(&self, from: u32, direction: Direction) -> Option<u32> {
        match direction {
            Direction::Next if from < self.max => Some((from + 1).max(self.min)),
            Direction::Previous if from > self.min => Some((from - 1).min(self.max)),
            _ => None,
        }
    }

    /// Whether a walk from this ID can issue at least one request
    pub fn can_move(&self, from: CharacterId, direction: Direction) -> bool {
        self.step(from.value(), direction).is_some()
    }
}

impl Default for IdBounds {
    fn default() -> Self {
        Self::new(MIN_PERSON_ID, MAX_PERSON_ID)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Found the adjacent existing character
    Moved(Character),
    /// Hit the bound without finding a record; nothing changes
    BoundaryReached,
    /// A non-404 failure stopped the walk; nothing changes
    Aborted { reason: String },
}

#[derive(Clone)]
pub struct Navigator {
    source: Arc<dyn StarWarsSource>,
    catalog: Arc<CatalogIndex>,
    bounds: IdBounds,
}

impl Navigator {
    pub fn new(source: Arc<dyn StarWarsSource>, catalog: Arc<CatalogIndex>, bounds: IdBounds) -> Self {
        Self { source, catalog, bounds }
    }

    pub fn bounds(&self) -> IdBounds {
        self.bounds
    }

    /// Probe IDs one at a time from `from` in `direction`, skipping missing
    /// records, until a record is found or the bound is reached.
    pub async fn walk(&self, from: CharacterId, direction: Direction) -> NavigationOutcome {
        let mut candidate = from.value();

        while let Some(id) = self.bounds.step(candidate, direction) {
            candidate = id;

            match self.source.person(id).await {
                Ok(record) => {
                    let portrait = self.catalog.portrait_for(&record.name).map(str::to_string);
                    return match Character::from_record(record, portrait) {
                        Ok(character) => {
                            debug!("Navigated {:?} from {} to {}", direction, from, character.id);
                            NavigationOutcome::Moved(character)
                        }
                        Err(e) => {
                            warn!("Record {} is unusable, stopping walk: {:#}", id, e);
                            NavigationOutcome::Aborted { reason: format!("{:#}", e) }
                        }
                    };
                }
                Err(e) if e.is_not_found() => {
                    debug!("Person {} does not exist, skipping", id);
                }
                Err(e) => {
                    warn!("Error fetching {:?} character at {}: {}", direction, id, e);
                    return NavigationOutcome::Aborted { reason: e.to_string() };
                }
            }
        }

        info!("No {:?} character from {} within {}..={}", direction, from, self.bounds.min, self.bounds.max);
        NavigationOutcome::BoundaryReached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_respects_inclusive_bounds() {
        let bounds = IdBounds::default();
        assert_eq!(bounds.step(99, Direction::Next), Some(100));
        assert_eq!(bounds.step(100, Direction::Next), None);
        assert_eq!(bounds.step(2, Direction::Previous), Some(1));
        assert_eq!(bounds.step(1, Direction::Previous), None);
        assert!(!bounds.can_move(CharacterId::new(1), Direction::Previous));
        assert!(bounds.can_move(CharacterId::new(1), Direction::Next));
    }

    #[test]
    fn test_out_of_window_id_is_clamped() {
        let bounds = IdBounds::new(5, 10);
        assert_eq!(bounds.step(15, Direction::Next), None);
        assert_eq!(bounds.step(15, Direction::Previous), Some(10));
        assert_eq!(bounds.step(2, Direction::Next), Some(5));
        assert_eq!(bounds.step(2, Direction::Previous), None);
    }
}
