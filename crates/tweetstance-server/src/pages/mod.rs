mod about;
mod predict;
mod team;
mod visualise;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Extension, Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use tweetstance_model::{ModelChoice, ModelError};

use crate::context::AppContext;
use crate::middleware::{request_id, RequestId};
use crate::render;

#[derive(Clone)]
pub struct AppState {
    pub context: Arc<AppContext>,
}

/// Error shown to the browser when a page cannot be produced.
pub(super) struct PageError {
    request_id: String,
    kind: PageErrorKind,
}

enum PageErrorKind {
    UnknownChart(String),
    Model(ModelError),
}

impl PageError {
    pub(super) fn model(request_id: String, source: ModelError) -> Self {
        Self {
            request_id,
            kind: PageErrorKind::Model(source),
        }
    }

    pub(super) fn unknown_chart(request_id: String, value: String) -> Self {
        Self {
            request_id,
            kind: PageErrorKind::UnknownChart(value),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self.kind {
            PageErrorKind::UnknownChart(value) => (
                StatusCode::BAD_REQUEST,
                format!("{value:?} is not one of the available plot types"),
            ),
            PageErrorKind::Model(ModelError::UnknownModel(name)) => (
                StatusCode::BAD_REQUEST,
                format!("{name:?} is not one of the available models"),
            ),
            PageErrorKind::Model(source) => {
                tracing::error!(
                    error = %source,
                    request_id = %self.request_id,
                    "classification failed"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "the model artifacts are unavailable or invalid".to_string(),
                )
            }
        };
        let body = render::error_page(status, &message, &self.request_id);
        (status, Html(body)).into_response()
    }
}

pub fn build_app(state: AppState) -> Router {
    let images = ServeDir::new(state.context.images_dir());

    Router::new()
        .route("/", get(predict::show))
        .route("/classify", post(predict::classify))
        .route("/visualisation", get(visualise::show))
        .route("/team", get(team::show))
        .route("/about", get(about::show))
        .route("/health", get(health))
        .nest_service("/static/img", images)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "models": ModelChoice::ALL.len(),
        "dataset_records": state.context.dataset.len(),
        "request_id": req_id.0,
    }))
}
