//! Travel recommendation search
//!
//! Keyword search over a static catalog of beaches, temples and
//! countries/cities, with a contact form, exposed through a CLI and a JSON API.

pub mod api;
pub mod cache;
pub mod config;
pub mod contact;
pub mod error;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod render;
pub mod search;
pub mod session;
pub mod source;
pub mod web;

// Re-export core types for public API
pub use cache::PersistentCache;
pub use config::TravelRecConfig;
pub use contact::{Acknowledgement, ContactForm};
pub use error::TravelRecError;
pub use models::{Catalog, Country, Place};
pub use prompt::{Prompt, PromptCommand, PromptReply};
pub use render::{Card, RenderModel};
pub use search::{Classification, QueryEngine, SearchTerm};
pub use session::{SearchOutcome, SearchSession};
pub use source::{CatalogSource, build_source};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelRecError>;
