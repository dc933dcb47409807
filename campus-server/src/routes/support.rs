//! Support directory and FAQ endpoints

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use campus_core::directory::{CategorySelector, DirectoryQuery};
use campus_core::service::{Faq, SupportService};
use serde::{Deserialize, Serialize};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/support/categories", get(categories))
        .route("/support/services", get(list_services))
        .route("/support/services/{slug}", get(service_detail))
        .route("/support/faqs", get(list_faqs))
}

/// GET /support/categories - Category chips, "All" first
async fn categories() -> Json<Vec<String>> {
    Json(CategorySelector::chips().iter().map(|c| c.to_string()).collect())
}

#[derive(Deserialize)]
pub struct ServicesParams {
    pub cat: Option<String>,
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct ServicesResponse {
    pub category: CategorySelector,
    pub query: String,
    pub services: Vec<SupportService>,
}

/// GET /support/services - Directory filtered by category and fuzzy query
async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<ServicesParams>,
) -> Result<Json<ServicesResponse>, AppError> {
    let category: CategorySelector = params.cat.as_deref().unwrap_or_default().parse()?;
    let query = DirectoryQuery::new(category, params.q.unwrap_or_default());

    let services = query
        .search(state.catalog().services())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ServicesResponse {
        category: query.category,
        query: query.query,
        services,
    }))
}

/// GET /support/services/{slug}
async fn service_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<SupportService>, AppError> {
    Ok(Json(state.catalog().find_service(&slug)?.clone()))
}

#[derive(Deserialize)]
pub struct FaqParams {
    pub q: Option<String>,
}

/// GET /support/faqs
async fn list_faqs(State(state): State<AppState>, Query(params): Query<FaqParams>) -> Json<Vec<Faq>> {
    let query = params.q.unwrap_or_default();
    Json(state.catalog().search_faqs(&query).into_iter().cloned().collect())
}
