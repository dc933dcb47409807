//! Bookmark endpoints

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks))
        .route("/bookmarks/{id}/toggle", post(toggle_bookmark))
}

#[derive(Serialize)]
pub struct BookmarkList {
    pub ids: Vec<String>,
    pub count: usize,
}

/// GET /bookmarks - Saved event ids
async fn list_bookmarks(State(state): State<AppState>) -> Result<Json<BookmarkList>, AppError> {
    let bookmarks = state.bookmarks()?;
    Ok(Json(BookmarkList {
        ids: bookmarks.ids(),
        count: bookmarks.len(),
    }))
}

#[derive(Serialize)]
pub struct ToggleResult {
    pub id: String,
    pub saved: bool,
}

/// POST /bookmarks/{id}/toggle - Save or unsave an event
///
/// Ids are not checked against the catalog; a bookmark for an unknown event
/// is kept and simply never matches.
async fn toggle_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ToggleResult>, AppError> {
    let saved = state.bookmarks()?.toggle(&id);
    tracing::info!(%id, saved, "Toggled bookmark");
    Ok(Json(ToggleResult { id, saved }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use campus_core::bookmarks::{KeyValueStorage, MemoryStorage};
    use campus_core::constants::BOOKMARKS_KEY;
    use campus_core::Catalog;

    use crate::routes::app;
    use crate::routes::test_support::*;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let state = test_state();

        let (status, body) = post_json(app(state.clone()), "/bookmarks/talk-ai-ethics/toggle").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["saved"], true);

        let (_, body) = get_json(app(state.clone()), "/bookmarks").await;
        assert_eq!(body["ids"], serde_json::json!(["talk-ai-ethics"]));

        let (_, body) = post_json(app(state.clone()), "/bookmarks/talk-ai-ethics/toggle").await;
        assert_eq!(body["saved"], false);

        let (_, body) = get_json(app(state), "/bookmarks").await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn test_toggle_persists_and_reloads() {
        let storage = Arc::new(MemoryStorage::new());
        let state = AppState::with_storage(Catalog::builtin().unwrap(), storage.clone());

        post_json(app(state), "/bookmarks/club-cultural-night/toggle").await;
        assert_eq!(
            storage.get(BOOKMARKS_KEY).unwrap().as_deref(),
            Some(r#"["club-cultural-night"]"#)
        );

        let reloaded = AppState::with_storage(Catalog::builtin().unwrap(), storage);
        let (_, body) = get_json(app(reloaded), "/events/club-cultural-night").await;
        assert_eq!(body["saved"], true);
    }

    #[tokio::test]
    async fn test_unknown_ids_can_be_bookmarked() {
        let (status, body) = post_json(app(test_state()), "/bookmarks/retired-event/toggle").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["saved"], true);
    }
}
