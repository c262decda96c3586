//! Search session: validate, fetch, query and render one user search at a time
//!
//! Every search takes a ticket from a monotonically increasing generation
//! counter. A search whose ticket is no longer the latest when its fetch
//! completes is reported as superseded, so slow fetches can never overwrite
//! the results of a newer search or a clear.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, instrument};

use crate::Result;
use crate::config::{RenderConfig, TravelRecConfig};
use crate::render::RenderModel;
use crate::search::{QueryEngine, SearchTerm};
use crate::source::CatalogSource;

/// Result of a search that got past validation and the catalog fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search is the most recent one; show this model
    Current(RenderModel),
    /// A newer search or a clear was issued while this one was fetching
    Superseded,
}

impl SearchOutcome {
    #[must_use]
    pub fn into_model(self) -> Option<RenderModel> {
        match self {
            SearchOutcome::Current(model) => Some(model),
            SearchOutcome::Superseded => None,
        }
    }
}

pub struct SearchSession {
    source: Arc<dyn CatalogSource>,
    engine: QueryEngine,
    render: RenderConfig,
    generation: AtomicU64,
}

impl SearchSession {
    pub fn new(source: Arc<dyn CatalogSource>, engine: QueryEngine, render: RenderConfig) -> Self {
        Self {
            source,
            engine,
            render,
            generation: AtomicU64::new(0),
        }
    }

    pub fn from_config(source: Arc<dyn CatalogSource>, config: &TravelRecConfig) -> Self {
        Self::new(
            source,
            QueryEngine::from_config(&config.search),
            config.render.clone(),
        )
    }

    pub fn source(&self) -> &Arc<dyn CatalogSource> {
        &self.source
    }

    /// Run one search.
    ///
    /// Blank input fails before the catalog is fetched. A failed fetch is
    /// returned as an error and never retried, unless a newer search or a
    /// clear has been issued meanwhile, in which case it is superseded.
    #[instrument(skip(self))]
    pub async fn search(&self, input: &str) -> Result<SearchOutcome> {
        let term = SearchTerm::parse(input)?;
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let fetched = self.source.fetch().await;

        // A stale search stays silent even when its fetch failed
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "Search superseded before its results were ready");
            return Ok(SearchOutcome::Superseded);
        }
        let catalog = fetched?;

        let places = self.engine.search_term(&term, &catalog);
        info!(term = %term, results = places.len(), "Search completed");
        Ok(SearchOutcome::Current(RenderModel::from_places(
            &places,
            &self.render,
        )))
    }

    /// Validate, fetch, query and render without taking a ticket.
    ///
    /// For callers whose searches are independent of each other, such as
    /// separate HTTP requests.
    #[instrument(skip(self))]
    pub async fn lookup(&self, input: &str) -> Result<RenderModel> {
        let term = SearchTerm::parse(input)?;
        let catalog = self.source.fetch().await?;
        let places = self.engine.search_term(&term, &catalog);
        info!(term = %term, results = places.len(), "Lookup completed");
        Ok(RenderModel::from_places(&places, &self.render))
    }

    /// Discard the current results and invalidate any search still in flight
    pub fn clear(&self) -> RenderModel {
        self.generation.fetch_add(1, Ordering::SeqCst);
        debug!("Search results cleared");
        RenderModel::Cleared
    }
}
