//! Place model shared by cities, temples and beaches

use serde::{Deserialize, Serialize};

/// A single recommendable item
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Place {
    /// Identifier carried by the source document, unused for matching
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

impl Place {
    /// Create a new place without an identifier
    #[must_use]
    pub fn new(name: &str, description: &str, image_url: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_name_and_description() {
        let place = Place::new("Sydney, Australia", "Famous for its Opera House", "sydney.jpg");
        assert!(place.mentions("sydney"));
        assert!(place.mentions("opera"));
        assert!(!place.mentions("tokyo"));
    }

    #[test]
    fn test_deserialize_camel_case_image_url() {
        let json = r#"{"id": 7, "name": "Kyoto", "imageUrl": "kyoto.jpg", "description": "Temples"}"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.id, Some(7));
        assert_eq!(place.image_url, "kyoto.jpg");
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let place: Place = serde_json::from_str(r#"{"name": "Bare"}"#).unwrap();
        assert_eq!(place.id, None);
        assert!(place.description.is_empty());
        assert!(place.image_url.is_empty());
    }
}
