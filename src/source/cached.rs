use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use super::CatalogSource;
use crate::Result;
use crate::cache::PersistentCache;
use crate::models::Catalog;

const CACHE_KEY: &str = "catalog";

/// Keeps the catalog of an inner source in the persistent cache.
///
/// Cache failures never fail a search; they fall through to the inner source.
pub struct CachedCatalogSource<S> {
    inner: S,
    cache: PersistentCache,
    ttl: Duration,
}

impl<S: CatalogSource> CachedCatalogSource<S> {
    pub fn new(inner: S, cache: PersistentCache, ttl: Duration) -> Self {
        Self { inner, cache, ttl }
    }

    fn key(&self) -> String {
        format!("{CACHE_KEY}:{}", self.inner.describe())
    }
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for CachedCatalogSource<S> {
    async fn fetch(&self) -> Result<Catalog> {
        let key = self.key();

        match self.cache.get::<Catalog>(&key).await {
            Ok(Some(catalog)) => {
                debug!("Serving catalog from cache");
                return Ok(catalog);
            }
            Ok(None) => debug!("Catalog not cached"),
            Err(e) => warn!("Catalog cache read failed: {}", e),
        }

        let catalog = self.inner.fetch().await?;

        if let Err(e) = self.cache.put(&key, catalog.clone(), self.ttl).await {
            warn!("Catalog cache write failed: {}", e);
        }

        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("cached {}", self.inner.describe())
    }
}
