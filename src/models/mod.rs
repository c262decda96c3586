//! Data models for the travel recommendation catalog
//!
//! - Place: a single recommendable city, temple or beach
//! - Catalog: the full dataset with its country grouping

pub mod catalog;
pub mod place;

pub use catalog::{Catalog, CatalogStats, Country};
pub use place::Place;
