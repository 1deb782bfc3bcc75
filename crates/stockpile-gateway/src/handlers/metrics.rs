use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::obs::metrics::CONTENT_TYPE;

/// Render all registered series for scraping.
pub async fn scrape(State(app): State<AppState>) -> Response {
    match app.metrics() {
        Some(m) => ([(header::CONTENT_TYPE, CONTENT_TYPE)], m.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
