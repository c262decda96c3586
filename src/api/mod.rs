use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    TravelRecError, VERSION,
    contact::{Acknowledgement, ContactForm},
    models::Catalog,
    render::RenderModel,
    session::SearchSession,
};

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SearchSession>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

/// Error body returned by every endpoint
pub struct ApiError(TravelRecError);

impl From<TravelRecError> for ApiError {
    fn from(err: TravelRecError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TravelRecError::Validation { .. } => StatusCode::BAD_REQUEST,
            TravelRecError::Fetch { .. } | TravelRecError::Parse { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }
        let body = Json(json!({ "error": self.0.user_message() }));
        (status, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/catalog", get(get_catalog))
        .route("/contact", post(submit_contact))
        .route("/health", get(health))
        .with_state(state)
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<RenderModel>, ApiError> {
    let model = state.session.lookup(&params.q).await?;
    Ok(Json(model))
}

async fn get_catalog(State(state): State<AppState>) -> Result<Json<Catalog>, ApiError> {
    let catalog = state.session.source().fetch().await?;
    Ok(Json(catalog))
}

async fn submit_contact(
    Json(mut form): Json<ContactForm>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let ack = form.submit()?;
    Ok(Json(ack))
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: VERSION,
    })
}
