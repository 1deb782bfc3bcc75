//! HTTP mapping for inventory errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use stockpile_core::{ClientCode, InventoryError};

/// Response wrapper for core errors; built by `AppState::reject`.
#[derive(Debug)]
pub struct ApiError(pub InventoryError);

pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::AlreadyExists => StatusCode::BAD_REQUEST,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::InvalidQuantity => StatusCode::BAD_REQUEST,
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        ClientCode::UnsupportedVersion | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.client_code());
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}
