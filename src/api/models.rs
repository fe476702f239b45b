//! Wire models for the primary catalog and the portrait catalog

use serde::{Deserialize, Serialize};

/// A person record as returned by `/people/{id}/` or inside a page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub gender: String,
    /// Identity reference; the trailing numeric segment is the person ID
    pub url: String,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
}

/// One page of the people listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeoplePage {
    #[serde(default)]
    pub count: Option<u32>,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<PersonRecord>,
}

/// Entry of the portrait catalog dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub image: String,
}

/// Film record, only the display field is decoded
#[derive(Debug, Clone, Deserialize)]
pub struct FilmRecord {
    pub title: String,
}

/// Vehicle or starship record, only the display field is decoded
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRecord {
    pub name: String,
}

/// Kind of reference URL attached to a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Film,
    Vehicle,
    Starship,
}

impl ReferenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceKind::Film => "film",
            ReferenceKind::Vehicle => "vehicle",
            ReferenceKind::Starship => "starship",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_record_ignores_unknown_fields() {
        let value = json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": ["https://swapi.dev/api/films/1/"],
            "species": [],
            "vehicles": [],
            "starships": [],
            "created": "2014-12-09T13:50:51.644000Z",
            "url": "https://swapi.dev/api/people/1/"
        });

        let record: PersonRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.name, "Luke Skywalker");
        assert_eq!(record.films.len(), 1);
        assert!(record.vehicles.is_empty());
    }

    #[test]
    fn test_catalog_entry_from_dump() {
        let value = json!([
            {"id": 1, "name": "Luke Skywalker", "height": 1.72, "image": "https://img/luke.jpg"},
            {"id": 2, "name": "C-3PO", "image": "https://img/c3po.jpg", "species": "droid"}
        ]);

        let entries: Vec<CatalogEntry> = serde_json::from_value(value).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].image, "https://img/c3po.jpg");
    }

    #[test]
    fn test_page_with_null_cursors() {
        let page: PeoplePage =
            serde_json::from_value(json!({"count": 82, "next": null, "previous": null, "results": []}))
                .unwrap();
        assert_eq!(page.count, Some(82));
        assert!(page.next.is_none());
        assert!(page.previous.is_none());
    }
}
