//! Query engine evaluating classification rules against a catalog

use tracing::debug;

use super::{Classification, CountryMatch, Rule, SearchTerm};
use crate::Result;
use crate::config::{CountryMatchMode, SearchConfig};
use crate::models::{Catalog, Place};

/// Evaluates an ordered rule list, first match wins
#[derive(Debug, Clone)]
pub struct QueryEngine {
    rules: Vec<Rule>,
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(CountryMatch::default())
    }
}

impl QueryEngine {
    /// Engine with the standard rule order
    #[must_use]
    pub fn new(country_match: CountryMatch) -> Self {
        Self::with_rules(Rule::default_rules(country_match))
    }

    /// Engine with a custom rule order
    #[must_use]
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        let country_match = match config.country_match {
            CountryMatchMode::Listed => CountryMatch::Listed(
                config
                    .recognized_countries
                    .iter()
                    .map(|name| name.trim().to_lowercase())
                    .collect(),
            ),
            CountryMatchMode::Catalog => CountryMatch::Catalog,
        };
        Self::new(country_match)
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classification of the first rule that applies.
    ///
    /// Falls back to free text when no rule fires.
    #[must_use]
    pub fn classify(&self, term: &SearchTerm, catalog: &Catalog) -> Classification {
        self.rules
            .iter()
            .find_map(|rule| {
                rule.classify(term, catalog).inspect(|classification| {
                    debug!(rule = rule.label(), ?classification, "Rule matched");
                })
            })
            .unwrap_or(Classification::FreeText)
    }

    /// Places matching an already validated term
    #[must_use]
    pub fn search_term<'a>(&self, term: &SearchTerm, catalog: &'a Catalog) -> Vec<&'a Place> {
        self.classify(term, catalog).select(term, catalog)
    }

    /// Normalize `input` and return the matching places.
    ///
    /// Blank input is rejected before the catalog is touched.
    pub fn search<'a>(&self, input: &str, catalog: &'a Catalog) -> Result<Vec<&'a Place>> {
        let term = SearchTerm::parse(input)?;
        Ok(self.search_term(&term, catalog))
    }
}
