//! End-to-end searches against the bundled sample catalog

use std::sync::Arc;

use travel_recommendation::source::FileCatalogSource;
use travel_recommendation::{
    CatalogSource, QueryEngine, RenderModel, SearchOutcome, SearchSession, TravelRecConfig,
    build_source,
};

const SAMPLE: &str = "data/travel_recommendation_api.json";

fn sample_session() -> SearchSession {
    SearchSession::from_config(
        Arc::new(FileCatalogSource::new(SAMPLE)),
        &TravelRecConfig::default(),
    )
}

fn names(model: &RenderModel) -> Vec<&str> {
    model.cards().iter().map(|card| card.name.as_str()).collect()
}

async fn search(session: &SearchSession, term: &str) -> RenderModel {
    match session.search(term).await.unwrap() {
        SearchOutcome::Current(model) => model,
        SearchOutcome::Superseded => panic!("sequential search was superseded"),
    }
}

#[tokio::test]
async fn test_sample_catalog_loads() {
    let catalog = FileCatalogSource::new(SAMPLE).fetch().await.unwrap();
    let stats = catalog.stats();
    assert_eq!(stats.countries, 3);
    assert_eq!(stats.cities, 6);
    assert_eq!(stats.temples, 2);
    assert_eq!(stats.beaches, 2);
}

#[tokio::test]
async fn test_beach_search() {
    let session = sample_session();
    let model = search(&session, "Beach").await;
    assert_eq!(
        names(&model),
        vec!["Bora Bora, French Polynesia", "Copacabana Beach, Brazil"]
    );
}

#[tokio::test]
async fn test_temple_search() {
    let session = sample_session();
    let model = search(&session, "temples").await;
    assert_eq!(names(&model), vec!["Angkor Wat, Cambodia", "Taj Mahal, India"]);
}

#[tokio::test]
async fn test_country_keyword_search() {
    let session = sample_session();
    let model = search(&session, "country").await;
    assert_eq!(model.cards().len(), 6);
    assert_eq!(model.cards()[0].name, "Sydney, Australia");
    assert_eq!(model.cards()[5].name, "São Paulo, Brazil");
}

#[tokio::test]
async fn test_brazil_search_returns_its_cities() {
    let session = sample_session();
    let model = search(&session, "  BRAZIL ").await;
    assert_eq!(
        names(&model),
        vec!["Rio de Janeiro, Brazil", "São Paulo, Brazil"]
    );
}

#[tokio::test]
async fn test_free_text_search_across_categories() {
    let session = sample_session();
    // Matches Rio's description and the Copacabana beach description
    let model = search(&session, "rio de janeiro").await;
    assert_eq!(
        names(&model),
        vec!["Rio de Janeiro, Brazil", "Copacabana Beach, Brazil"]
    );
}

#[tokio::test]
async fn test_unknown_term_renders_no_results() {
    let session = sample_session();
    let model = search(&session, "atlantis").await;
    assert!(matches!(model, RenderModel::NoResults { .. }));
}

#[tokio::test]
async fn test_empty_term_rejected() {
    let session = sample_session();
    let err = session.search("").await.unwrap_err();
    assert_eq!(err.user_message(), "Please enter a search term");
}

#[tokio::test]
async fn test_missing_catalog_is_load_failure() {
    let mut config = TravelRecConfig::default();
    config.catalog.location = "data/does_not_exist.json".to_string();
    let session = SearchSession::from_config(build_source(&config).unwrap(), &config);

    let err = session.search("japan").await.unwrap_err();
    assert!(err.is_load_failure());
}

#[tokio::test]
async fn test_engine_is_idempotent_on_sample() {
    let catalog = FileCatalogSource::new(SAMPLE).fetch().await.unwrap();
    let engine = QueryEngine::default();
    let first = engine.search("vibrant", &catalog).unwrap();
    let second = engine.search("vibrant", &catalog).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}
