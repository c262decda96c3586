//! Render model for search results
//!
//! Searches hand back a [`RenderModel`] value instead of writing into a shared
//! display container. The caller owns it and decides how to show it.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::config::RenderConfig;
use crate::models::Place;

pub const NO_RESULTS_MESSAGE: &str = "No recommendations found. Try a different search term.";

/// A single displayable recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Image to swap in when `image_url` fails to load
    pub fallback_image_url: String,
}

impl Card {
    #[must_use]
    pub fn from_place(place: &Place, fallback_image_url: &str) -> Self {
        let image_url = if place.image_url.trim().is_empty() {
            fallback_image_url.to_string()
        } else {
            place.image_url.clone()
        };
        Self {
            name: place.name.clone(),
            description: place.description.clone(),
            image_url,
            fallback_image_url: fallback_image_url.to_string(),
        }
    }

    /// Acknowledgement shown when the visit action is invoked
    #[must_use]
    pub fn visit(&self) -> String {
        format!("You are visiting {}!", self.name)
    }
}

/// What the presentation layer should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RenderModel {
    /// Nothing searched yet, or results were cleared
    Cleared,
    NoResults { message: String },
    Results { cards: Vec<Card> },
}

impl RenderModel {
    /// Build the model for a result list. An empty list is never rendered blank.
    #[must_use]
    pub fn from_places(places: &[&Place], config: &RenderConfig) -> Self {
        if places.is_empty() {
            return RenderModel::NoResults {
                message: NO_RESULTS_MESSAGE.to_string(),
            };
        }
        RenderModel::Results {
            cards: places
                .iter()
                .map(|place| Card::from_place(place, &config.fallback_image_url))
                .collect(),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            RenderModel::Results { cards } => cards.as_slice(),
            _ => &[],
        }
    }

    /// 1-based lookup, the numbering used when cards are displayed
    #[must_use]
    pub fn card(&self, number: usize) -> Option<&Card> {
        number.checked_sub(1).and_then(|index| self.cards().get(index))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "   📝 {}", self.description)?;
        write!(f, "   🖼️ {}", self.image_url)
    }
}

impl Display for RenderModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderModel::Cleared => Ok(()),
            RenderModel::NoResults { message } => write!(f, "🔍 {message}"),
            RenderModel::Results { cards } => {
                for (index, card) in cards.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}. {}", index + 1, card)?;
                    write!(f, "   ➡️ Visit: :visit {}", index + 1)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RenderConfig {
        RenderConfig {
            fallback_image_url: "fallback.jpg".to_string(),
        }
    }

    #[test]
    fn test_empty_results_render_no_results_state() {
        let model = RenderModel::from_places(&[], &config());
        assert_eq!(
            model,
            RenderModel::NoResults {
                message: NO_RESULTS_MESSAGE.to_string()
            }
        );
        assert!(model.to_string().contains("No recommendations found"));
    }

    #[test]
    fn test_cards_preserve_order_and_fields() {
        let tokyo = Place::new("Tokyo", "Capital", "tokyo.jpg");
        let kyoto = Place::new("Kyoto", "Shrines", "kyoto.jpg");
        let model = RenderModel::from_places(&[&tokyo, &kyoto], &config());

        let cards = model.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Tokyo");
        assert_eq!(cards[0].image_url, "tokyo.jpg");
        assert_eq!(cards[0].fallback_image_url, "fallback.jpg");
        assert_eq!(cards[1].description, "Shrines");
    }

    #[test]
    fn test_blank_image_uses_fallback() {
        let place = Place::new("Nowhere", "No picture", " ");
        let card = Card::from_place(&place, "fallback.jpg");
        assert_eq!(card.image_url, "fallback.jpg");
    }

    #[test]
    fn test_visit_surfaces_name() {
        let card = Card::from_place(&Place::new("Bora Bora", "Lagoon", "bora.jpg"), "f.jpg");
        assert!(card.visit().contains("Bora Bora"));
    }

    #[test]
    fn test_card_lookup_is_one_based() {
        let a = Place::new("A", "", "a.jpg");
        let b = Place::new("B", "", "b.jpg");
        let model = RenderModel::from_places(&[&a, &b], &config());
        assert_eq!(model.card(1).unwrap().name, "A");
        assert_eq!(model.card(2).unwrap().name, "B");
        assert!(model.card(0).is_none());
        assert!(model.card(3).is_none());
        assert!(RenderModel::Cleared.card(1).is_none());
    }

    #[test]
    fn test_json_shape() {
        let model = RenderModel::NoResults {
            message: NO_RESULTS_MESSAGE.to_string(),
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["state"], "no_results");
        assert_eq!(json["message"], NO_RESULTS_MESSAGE);

        let cleared = serde_json::to_value(RenderModel::Cleared).unwrap();
        assert_eq!(cleared["state"], "cleared");
    }

    #[test]
    fn test_card_json_uses_catalog_field_names() {
        let place = Place::new("Alpha", "first", "a.jpg");
        let model = RenderModel::from_places(&[&place], &config());
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["cards"][0]["imageUrl"], "a.jpg");
        assert_eq!(json["cards"][0]["fallbackImageUrl"], config().fallback_image_url);
        assert!(json["cards"][0].get("image_url").is_none());
    }

    #[test]
    fn test_display_numbers_cards() {
        let a = Place::new("Alpha", "first", "a.jpg");
        let b = Place::new("Beta", "second", "b.jpg");
        let text = RenderModel::from_places(&[&a, &b], &config()).to_string();
        assert!(text.contains("1. Alpha"));
        assert!(text.contains("2. Beta"));
    }
}
