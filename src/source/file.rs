use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, error, instrument};

use super::CatalogSource;
use crate::models::Catalog;
use crate::{Result, TravelRecError};

/// Catalog document stored on the local filesystem
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<Catalog> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            error!("Error reading catalog document: {}", e);
            TravelRecError::fetch(format!(
                "Failed to read catalog {}: {e}",
                self.path.display()
            ))
        })?;

        let catalog = Catalog::from_json(&contents)?;
        debug!("Loaded catalog with {} countries", catalog.countries.len());
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
