pub mod bookmarks;
pub mod events;
pub mod pages;
pub mod support;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use campus_core::CampusError;
use serde::Serialize;

use crate::state::AppState;

/// All routes, ready for state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(events::router())
        .merge(bookmarks::router())
        .merge(support::router())
        .merge(pages::router())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Where a client should navigate instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
}

/// Convert anyhow errors to HTTP responses
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let campus_error = self.0.downcast_ref::<CampusError>();

        let status = match campus_error {
            Some(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Some(CampusError::InvalidFilter(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let back = match campus_error {
            Some(CampusError::EventNotFound(_)) => Some("/events".to_string()),
            Some(CampusError::ServiceNotFound(_)) => Some("/support/services".to_string()),
            Some(CampusError::PageNotFound(_)) => Some("/pages".to_string()),
            _ => None,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
            back,
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
