//! Catalog sources
//!
//! The catalog is a read-only document fetched once per search. It can live
//! behind an HTTP(S) URL or on the local filesystem, and can optionally be
//! kept in the persistent cache between searches.

pub mod cached;
pub mod file;
pub mod http;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::Result;
use crate::cache::PersistentCache;
use crate::config::TravelRecConfig;
use crate::models::Catalog;

pub use cached::CachedCatalogSource;
pub use file::FileCatalogSource;
pub use http::HttpCatalogSource;

/// Something that can produce the catalog document
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Retrieve the current catalog
    async fn fetch(&self) -> Result<Catalog>;

    /// Human readable origin, used in logs
    fn describe(&self) -> String;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Arc<S> {
    async fn fetch(&self) -> Result<Catalog> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Build the catalog source described by the configuration
pub fn build_source(config: &TravelRecConfig) -> Result<Arc<dyn CatalogSource>> {
    let location = config.catalog.location.trim();

    let source: Arc<dyn CatalogSource> = if config.catalog_is_remote() {
        Arc::new(HttpCatalogSource::new(
            location,
            Duration::from_secs(config.catalog.timeout_seconds.into()),
        )?)
    } else {
        Arc::new(FileCatalogSource::new(location))
    };

    if !config.catalog.cache_enabled {
        info!("Using catalog from {}", source.describe());
        return Ok(source);
    }

    let cache = PersistentCache::open(&config.catalog.cache_location)?;
    let ttl = Duration::from_secs(u64::from(config.catalog.cache_ttl_minutes) * 60);
    let cached = CachedCatalogSource::new(source, cache, ttl);
    info!("Using catalog from {}", cached.describe());
    Ok(Arc::new(cached))
}
