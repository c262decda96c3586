//! Ordered keyword classification rules
//!
//! Each rule inspects the normalized term and, when it applies, yields a
//! [`Classification`] naming the catalog subset to return. Rules are evaluated
//! in order and the first match wins.

use super::SearchTerm;
use crate::models::{Catalog, Place};

pub const BEACH_KEYWORDS: &[&str] = &["beach", "beaches", "coast", "shore"];
pub const TEMPLE_KEYWORDS: &[&str] = &["temple", "temples", "religious", "worship"];
pub const COUNTRY_KEYWORDS: &[&str] = &["country", "countries", "nation"];
pub const DEFAULT_RECOGNIZED_COUNTRIES: &[&str] = &["australia", "japan", "brazil"];

/// The catalog subset a query targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Beaches,
    Temples,
    AllCities,
    /// Cities of one country, identified by its lower-cased name
    Country(String),
    FreeText,
}

impl Classification {
    /// Borrow the places this classification selects, in catalog order
    #[must_use]
    pub fn select<'a>(&self, term: &SearchTerm, catalog: &'a Catalog) -> Vec<&'a Place> {
        match self {
            Classification::Beaches => catalog.beaches.iter().collect(),
            Classification::Temples => catalog.temples.iter().collect(),
            Classification::AllCities => catalog.cities().collect(),
            Classification::Country(name) => catalog
                .find_country(name)
                .map(|country| country.cities.iter().collect())
                .unwrap_or_default(),
            Classification::FreeText => catalog
                .cities()
                .chain(catalog.temples.iter())
                .chain(catalog.beaches.iter())
                .filter(|place| place.mentions(term.as_str()))
                .collect(),
        }
    }
}

/// Which country names the country rule recognises
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryMatch {
    /// Only these lower-cased names, checked in order
    Listed(Vec<String>),
    /// Any country present in the catalog, checked in catalog order
    Catalog,
}

impl Default for CountryMatch {
    fn default() -> Self {
        CountryMatch::Listed(
            DEFAULT_RECOGNIZED_COUNTRIES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        )
    }
}

/// A single classification rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Fires when the term contains any of the keywords
    Keywords {
        keywords: Vec<String>,
        classification: Classification,
    },
    /// Fires when the term contains a recognised country name
    CountryName(CountryMatch),
    /// Always fires
    FreeText,
}

impl Rule {
    pub fn keywords(keywords: &[&str], classification: Classification) -> Self {
        Rule::Keywords {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            classification,
        }
    }

    /// Short label used in logs
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Rule::Keywords { classification, .. } => match classification {
                Classification::Beaches => "beach-keywords",
                Classification::Temples => "temple-keywords",
                Classification::AllCities => "country-keywords",
                Classification::Country(_) => "country-alias",
                Classification::FreeText => "free-text-keywords",
            },
            Rule::CountryName(_) => "country-name",
            Rule::FreeText => "free-text",
        }
    }

    /// Classification this rule yields for the term, if it applies
    #[must_use]
    pub fn classify(&self, term: &SearchTerm, catalog: &Catalog) -> Option<Classification> {
        match self {
            Rule::Keywords {
                keywords,
                classification,
            } => keywords
                .iter()
                .any(|keyword| term.contains(keyword))
                .then(|| classification.clone()),
            Rule::CountryName(CountryMatch::Listed(names)) => names
                .iter()
                .map(|name| name.to_lowercase())
                .find(|name| !name.is_empty() && term.contains(name))
                .map(Classification::Country),
            Rule::CountryName(CountryMatch::Catalog) => catalog
                .countries
                .iter()
                .map(|country| country.name.to_lowercase())
                .find(|name| !name.trim().is_empty() && term.contains(name))
                .map(Classification::Country),
            Rule::FreeText => Some(Classification::FreeText),
        }
    }

    /// The standard rule order: beaches, temples, countries, country name, free text
    #[must_use]
    pub fn default_rules(country_match: CountryMatch) -> Vec<Rule> {
        vec![
            Rule::keywords(BEACH_KEYWORDS, Classification::Beaches),
            Rule::keywords(TEMPLE_KEYWORDS, Classification::Temples),
            Rule::keywords(COUNTRY_KEYWORDS, Classification::AllCities),
            Rule::CountryName(country_match),
            Rule::FreeText,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Country;
    use rstest::rstest;

    fn catalog() -> Catalog {
        Catalog {
            countries: vec![
                Country::new("Japan", vec![Place::new("Tokyo", "Capital", "tokyo.jpg")]),
                Country::new("New Zealand", vec![Place::new("Auckland", "Sails", "akl.jpg")]),
            ],
            temples: vec![],
            beaches: vec![],
        }
    }

    fn term(s: &str) -> SearchTerm {
        SearchTerm::parse(s).unwrap()
    }

    #[rstest]
    #[case("beach")]
    #[case("coast")]
    #[case("seashore walks")]
    #[case("beaches")]
    fn test_beach_keywords(#[case] input: &str) {
        let rule = Rule::keywords(BEACH_KEYWORDS, Classification::Beaches);
        assert_eq!(
            rule.classify(&term(input), &catalog()),
            Some(Classification::Beaches)
        );
    }

    #[test]
    fn test_keywords_do_not_fire_on_unrelated_term() {
        let rule = Rule::keywords(TEMPLE_KEYWORDS, Classification::Temples);
        assert_eq!(rule.classify(&term("tokyo"), &catalog()), None);
    }

    #[test]
    fn test_listed_countries_checked_in_list_order() {
        let rule = Rule::CountryName(CountryMatch::default());
        assert_eq!(
            rule.classify(&term("japan or brazil"), &catalog()),
            Some(Classification::Country("japan".to_string()))
        );
        assert_eq!(
            rule.classify(&term("brazil and australia"), &catalog()),
            Some(Classification::Country("australia".to_string()))
        );
    }

    #[test]
    fn test_listed_mode_ignores_unlisted_catalog_country() {
        let rule = Rule::CountryName(CountryMatch::default());
        assert_eq!(rule.classify(&term("new zealand"), &catalog()), None);
    }

    #[test]
    fn test_catalog_mode_matches_any_catalog_country() {
        let rule = Rule::CountryName(CountryMatch::Catalog);
        assert_eq!(
            rule.classify(&term("trip to new zealand"), &catalog()),
            Some(Classification::Country("new zealand".to_string()))
        );
        assert_eq!(rule.classify(&term("brazil"), &catalog()), None);
    }

    #[test]
    fn test_country_selection_absent_country_is_empty() {
        let catalog = catalog();
        let selected =
            Classification::Country("brazil".to_string()).select(&term("brazil"), &catalog);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_default_rule_order() {
        let labels: Vec<&str> = Rule::default_rules(CountryMatch::Catalog)
            .iter()
            .map(Rule::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "beach-keywords",
                "temple-keywords",
                "country-keywords",
                "country-name",
                "free-text"
            ]
        );
    }
}
