//! Event listing, detail and calendar export endpoints

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use campus_core::constants::PREVIEW_LEN;
use campus_core::date_range::{DateRange, When};
use campus_core::filter::{self, DayGroup, EventFilter};
use campus_core::maps::MapLinks;
use campus_core::{ics, CampusEvent, CampusResult, EventCategory};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/preview", get(preview))
        .route("/events/categories", get(categories))
        .route("/events/{id}", get(event_detail))
        .route("/events/{id}/ics", get(event_ics))
}

/// Query string for GET /events
#[derive(Debug, Default, Deserialize)]
pub struct EventsParams {
    pub q: Option<String>,
    pub range: Option<String>,
    pub when: Option<String>,
    /// Comma-separated category names
    pub category: Option<String>,
    #[serde(default)]
    pub saved: bool,
    /// `day` to include day groups
    pub group: Option<String>,
}

impl EventsParams {
    fn to_filter(&self) -> CampusResult<EventFilter> {
        let range: DateRange = self.range.as_deref().unwrap_or_default().parse()?;
        let when: When = self.when.as_deref().unwrap_or_default().parse()?;
        let categories = self
            .category
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|c| !c.trim().is_empty())
            .map(str::parse::<EventCategory>)
            .collect::<CampusResult<Vec<_>>>()?;

        Ok(EventFilter {
            query: self.q.clone().unwrap_or_default(),
            range,
            when,
            categories,
            saved_only: self.saved,
        })
    }
}

/// An event plus the caller's bookmark state
#[derive(Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: CampusEvent,
    pub saved: bool,
}

#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<EventView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<DayGroup>>,
    /// Labels of applied filters
    pub chips: Vec<String>,
    pub saved_count: usize,
    /// False when the saved filter was requested but nothing is bookmarked
    pub saved_only: bool,
}

/// GET /events - Filtered, sorted event list
async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventsParams>,
) -> Result<Json<EventsResponse>, AppError> {
    let filter = params.to_filter()?;
    let now = Utc::now();
    let bookmarks = state.bookmarks()?;

    let list = filter.apply(state.catalog().events(), &bookmarks, now);
    let days = matches!(params.group.as_deref(), Some("day")).then(|| filter::group_by_day(&list, now));

    let response = EventsResponse {
        chips: filter.active_chips(&bookmarks),
        saved_count: bookmarks.len(),
        saved_only: filter.effective_saved_only(&bookmarks),
        events: list
            .into_iter()
            .map(|event| EventView {
                saved: bookmarks.is_saved(&event.id),
                event,
            })
            .collect(),
        days,
    };

    Ok(Json(response))
}

#[derive(Deserialize)]
pub struct PreviewParams {
    pub n: Option<usize>,
}

/// GET /events/preview - Next few upcoming events
async fn preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Json<Vec<CampusEvent>> {
    let n = params.n.unwrap_or(PREVIEW_LEN);
    Json(filter::upcoming_preview(state.catalog().events(), Utc::now(), n))
}

/// GET /events/categories - Categories present in the catalog
async fn categories(State(state): State<AppState>) -> Json<Vec<EventCategory>> {
    Json(filter::available_categories(state.catalog().events()))
}

#[derive(Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: CampusEvent,
    pub saved: bool,
    pub maps: MapLinks,
    pub ics: String,
}

/// GET /events/{id} - One event with its links
async fn event_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventDetail>, AppError> {
    let event = state.catalog().find_event(&id)?.clone();
    let saved = state.bookmarks()?.is_saved(&id);

    Ok(Json(EventDetail {
        maps: MapLinks::for_event(&event),
        ics: format!("/events/{}/ics", event.id),
        saved,
        event,
    }))
}

/// GET /events/{id}/ics - Download the event as an .ics file
async fn event_ics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let event = state.catalog().find_event(&id)?;
    let body = ics::generate_ics(event)?;
    let disposition = format!("attachment; filename=\"{}\"", ics::ics_filename(event));

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
