//! Search module
//!
//! Maps a free-text query onto a subset of the catalog:
//! - Search term normalization and validation
//! - Ordered keyword classification rules
//! - The query engine evaluating those rules

pub mod engine;
pub mod rules;
pub mod term;

pub use engine::QueryEngine;
pub use rules::{
    BEACH_KEYWORDS, COUNTRY_KEYWORDS, Classification, CountryMatch, DEFAULT_RECOGNIZED_COUNTRIES,
    Rule, TEMPLE_KEYWORDS,
};
pub use term::SearchTerm;
