//! Item CRUD handlers.
//!
//! Each handler decodes the path and body, runs boundary validation, and
//! calls the store; gauges follow from the store's observer. Every failure,
//! including extractor rejections, goes through `AppState::reject` so the
//! error counter sees it.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde_json::{json, Value};

use stockpile_core::error::{InventoryError, Result};
use stockpile_core::{Item, ItemPatch, NewItem};

use crate::app_state::AppState;
use crate::error::ApiError;

type Reply<T> = std::result::Result<Json<T>, ApiError>;
type NamePath = std::result::Result<Path<String>, PathRejection>;

fn decode<T>(body: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    body.map(|Json(v)| v)
        .map_err(|e| InventoryError::Unprocessable(e.body_text()))
}

fn item_name(path: NamePath) -> Result<String> {
    path.map(|Path(name)| name)
        .map_err(|e| InventoryError::BadRequest(e.body_text()))
}

pub async fn create_item(
    State(app): State<AppState>,
    body: std::result::Result<Json<NewItem>, JsonRejection>,
) -> Reply<Item> {
    let created = decode(body)
        .and_then(NewItem::validate)
        .and_then(|item| app.store().create(item))
        .map_err(|e| app.reject(e))?;

    tracing::info!(item = %created.name, quantity = created.quantity, "item created");
    Ok(Json(created))
}

pub async fn read_item(State(app): State<AppState>, path: NamePath) -> Reply<Item> {
    let name = item_name(path).map_err(|e| app.reject(e))?;
    let item = app.store().get(&name).map_err(|e| app.reject(e))?;
    tracing::debug!(item = %name, "item read");
    Ok(Json(item))
}

pub async fn update_item(
    State(app): State<AppState>,
    path: NamePath,
    body: std::result::Result<Json<ItemPatch>, JsonRejection>,
) -> Reply<Item> {
    let name = item_name(path).map_err(|e| app.reject(e))?;
    let updated = decode(body)
        .and_then(|patch| app.store().update(&name, &patch))
        .map_err(|e| app.reject(e))?;

    tracing::info!(item = %name, quantity = updated.quantity, "item updated");
    Ok(Json(updated))
}

pub async fn delete_item(State(app): State<AppState>, path: NamePath) -> Reply<Value> {
    let name = item_name(path).map_err(|e| app.reject(e))?;
    app.store().delete(&name).map_err(|e| app.reject(e))?;

    tracing::info!(item = %name, "item deleted");
    Ok(Json(json!({ "detail": "Item deleted" })))
}
