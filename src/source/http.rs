use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

use super::CatalogSource;
use crate::models::Catalog;
use crate::{Result, TravelRecError};

/// Catalog document served over HTTP(S)
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    /// Create a new client for the document at `url`
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("travel-recommendation/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TravelRecError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Catalog> {
        let start_time = Instant::now();
        debug!("Requesting catalog document");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            error!("Error fetching recommendations: {}", e);
            TravelRecError::fetch(format!("Catalog request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Catalog request returned {}", status);
            return Err(TravelRecError::fetch(format!(
                "Catalog request returned {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TravelRecError::fetch(format!("Failed to read catalog body: {e}")))?;
        let catalog = Catalog::from_json(&body)?;

        let elapsed = start_time.elapsed();
        info!(
            "Fetched catalog in {:.3}s ({} countries, {} temples, {} beaches)",
            elapsed.as_secs_f64(),
            catalog.countries.len(),
            catalog.temples.len(),
            catalog.beaches.len()
        );
        if elapsed.as_secs() > 5 {
            warn!("Slow catalog response detected: {:.3}s", elapsed.as_secs_f64());
        }

        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}
