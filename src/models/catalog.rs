//! Catalog model: the whole dataset served by the recommendation document

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::Place;
use crate::{Result, TravelRecError};

/// A country and the cities recommended in it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Country {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub cities: Vec<Place>,
}

impl Country {
    #[must_use]
    pub fn new(name: &str, cities: Vec<Place>) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            cities,
        }
    }

    /// Exact, case-insensitive comparison of the country name
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// The full recommendation dataset
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub temples: Vec<Place>,
    #[serde(default)]
    pub beaches: Vec<Place>,
}

/// Item counts of a catalog
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub countries: usize,
    pub cities: usize,
    pub temples: usize,
    pub beaches: usize,
}

impl Catalog {
    /// Decode a catalog from its JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| TravelRecError::parse(format!("Invalid catalog document: {e}")))
    }

    /// All cities of all countries, in catalog order
    pub fn cities(&self) -> impl Iterator<Item = &Place> {
        self.countries.iter().flat_map(|country| country.cities.iter())
    }

    /// First country whose name matches case-insensitively
    #[must_use]
    pub fn find_country(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|country| country.is_named(name))
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            countries: self.countries.len(),
            cities: self.cities().count(),
            temples: self.temples.len(),
            beaches: self.beaches.len(),
        }
    }
}

impl Display for CatalogStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "🌍 Countries: {}", self.countries)?;
        writeln!(f, "🏙️ Cities:    {}", self.cities)?;
        writeln!(f, "⛩️ Temples:   {}", self.temples)?;
        write!(f, "🏖️ Beaches:   {}", self.beaches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "countries": [
            {
                "id": 1,
                "name": "Australia",
                "cities": [
                    {"name": "Sydney, Australia", "imageUrl": "sydney.jpg", "description": "Harbour city"},
                    {"name": "Melbourne, Australia", "imageUrl": "melbourne.jpg", "description": "Culture"}
                ]
            },
            {
                "id": 2,
                "name": "Japan",
                "cities": [
                    {"name": "Tokyo, Japan", "imageUrl": "tokyo.jpg", "description": "Capital"}
                ]
            }
        ],
        "temples": [
            {"id": 1, "name": "Angkor Wat, Cambodia", "imageUrl": "angkor.jpg", "description": "Temple complex"}
        ]
    }"#;

    #[test]
    fn test_parse_document() {
        let catalog = Catalog::from_json(DOCUMENT).unwrap();
        assert_eq!(catalog.countries.len(), 2);
        assert_eq!(catalog.temples.len(), 1);
        // Missing collection decodes as empty
        assert!(catalog.beaches.is_empty());
    }

    #[test]
    fn test_cities_in_catalog_order() {
        let catalog = Catalog::from_json(DOCUMENT).unwrap();
        let names: Vec<&str> = catalog.cities().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Sydney, Australia", "Melbourne, Australia", "Tokyo, Japan"]
        );
    }

    #[test]
    fn test_find_country_case_insensitive() {
        let catalog = Catalog::from_json(DOCUMENT).unwrap();
        assert_eq!(catalog.find_country("japan").unwrap().cities.len(), 1);
        assert_eq!(catalog.find_country("AUSTRALIA").unwrap().cities.len(), 2);
        assert!(catalog.find_country("brazil").is_none());
    }

    #[test]
    fn test_stats() {
        let stats = Catalog::from_json(DOCUMENT).unwrap().stats();
        assert_eq!(
            stats,
            CatalogStats {
                countries: 2,
                cities: 3,
                temples: 1,
                beaches: 0
            }
        );
    }

    #[test]
    fn test_invalid_document() {
        let result = Catalog::from_json("[1, 2, 3]");
        assert!(matches!(result, Err(TravelRecError::Parse { .. })));
    }
}
