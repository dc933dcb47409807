//! Static pages, emergency contacts and exit navigation

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use campus_core::exits::{self, ExitInfo};
use campus_core::pages::{EmergencyContact, InfoPage};
use serde::{Deserialize, Serialize};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages", get(list_pages))
        .route("/pages/{slug}", get(page_detail))
        .route("/emergency/contacts", get(contacts))
        .route("/exits", get(list_exits))
        .route("/exits/nearest", get(nearest_exit))
}

#[derive(Serialize)]
pub struct PageSummary {
    pub slug: String,
    pub title: String,
}

/// GET /pages
async fn list_pages(State(state): State<AppState>) -> Json<Vec<PageSummary>> {
    let pages = state
        .catalog()
        .pages()
        .iter()
        .map(|p| PageSummary {
            slug: p.slug.clone(),
            title: p.title.clone(),
        })
        .collect();
    Json(pages)
}

/// GET /pages/{slug}
async fn page_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<InfoPage>, AppError> {
    Ok(Json(state.catalog().find_page(&slug)?.clone()))
}

#[derive(Serialize)]
pub struct ContactView {
    #[serde(flatten)]
    pub contact: EmergencyContact,
    pub href: String,
}

/// GET /emergency/contacts - Contacts with dialable links
async fn contacts(State(state): State<AppState>) -> Json<Vec<ContactView>> {
    let contacts = state
        .catalog()
        .contacts()
        .iter()
        .map(|c| ContactView {
            href: c.tel_href(),
            contact: c.clone(),
        })
        .collect();
    Json(contacts)
}

#[derive(Deserialize)]
pub struct ExitParams {
    pub q: Option<String>,
    pub from: Option<String>,
}

/// GET /exits?q=
async fn list_exits(State(state): State<AppState>, Query(params): Query<ExitParams>) -> Json<Vec<ExitInfo>> {
    let query = params.q.unwrap_or_default();
    Json(
        exits::search_exits(state.catalog().exits(), &query)
            .into_iter()
            .cloned()
            .collect(),
    )
}

#[derive(Serialize)]
pub struct NearestExit {
    pub exit: Option<ExitInfo>,
    pub directions: Option<String>,
}

/// GET /exits/nearest?from= - Recommended exit and shareable directions
async fn nearest_exit(State(state): State<AppState>, Query(params): Query<ExitParams>) -> Json<NearestExit> {
    let from = params.from.as_deref();
    let exit = exits::nearest_open(state.catalog().exits(), from);

    let directions = exit.map(|e| {
        let here = from.map(str::trim).filter(|f| !f.is_empty()).unwrap_or(&e.location);
        exits::directions_text(here, e)
    });

    Json(NearestExit {
        exit: exit.cloned(),
        directions,
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::app;
    use crate::routes::test_support::*;

    #[tokio::test]
    async fn test_list_and_show_pages() {
        let (_, body) = get_json(app(test_state()), "/pages").await;
        let slugs: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["slug"].as_str().unwrap())
            .collect();
        assert_eq!(slugs, ["emergency", "safety", "security-contact", "exit-navigation"]);

        let (status, body) = get_json(app(test_state()), "/pages/safety").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Staying Safe");
    }

    #[tokio::test]
    async fn test_missing_page_links_back() {
        let (status, body) = get_json(app(test_state()), "/pages/parking").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["back"], "/pages");
    }

    #[tokio::test]
    async fn test_contacts_have_tel_links() {
        let (_, body) = get_json(app(test_state()), "/emergency/contacts").await;
        assert_eq!(body[0]["name"], "Campus Security");
        assert_eq!(body[0]["href"], "tel:082260607");
        assert_eq!(body[1]["href"], "tel:999");
    }

    #[tokio::test]
    async fn test_exit_search() {
        let (_, body) = get_json(app(test_state()), "/exits?q=library").await;
        let exits = body.as_array().unwrap();
        assert_eq!(exits.len(), 1);
        assert_eq!(exits[0]["name"], "East Exit - Library");

        let (_, body) = get_json(app(test_state()), "/exits").await;
        assert_eq!(body.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_nearest_exit_skips_unavailable() {
        let (_, body) = get_json(app(test_state()), "/exits/nearest?from=Library,%20Ground%20Floor").await;
        assert_eq!(body["exit"]["name"], "East Exit - Library");
        assert_eq!(
            body["directions"],
            "From Library, Ground Floor, go to East Exit - Library. \
             Direction: Walk straight to the corridor, turn right at the corner."
        );

        let (_, body) = get_json(app(test_state()), "/exits/nearest?from=Engineering%20Block,%20Level%201").await;
        assert_eq!(body["exit"]["name"], "Main Entrance - ADM Building");
        assert_eq!(body["exit"]["status"], "Open");
    }
}
