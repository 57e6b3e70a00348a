#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use service_status::api::routes::routes;
use service_status::prelude::*;
use service_status::routes::with_error_layers;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct NewItem {
    #[validate(length(min = 1, max = 20))]
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    pub page: u32,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Serialize)]
pub struct Item {
    pub name: String,
}

pub fn create_test_state(version: &str, ready: bool) -> AppState {
    AppState::new(StatusInfo::new().with_version(version).with_ready(ready))
}

async fn create_item(ApiJson(item): ApiJson<NewItem>) -> Result<(StatusCode, Json<Item>), ApiError> {
    if item.name == "dup" {
        return Err(ServiceError::new(StatusCode::CONFLICT, "duplicate entry")
            .with_kind("DuplicateEntry")
            .with_detail("code", "E_DUPLICATE")
            .into());
    }

    Ok((StatusCode::CREATED, Json(Item { name: item.name })))
}

async fn list_items(ApiQuery(page): ApiQuery<Page>) -> Json<Value> {
    Json(json!({ "page": page.page, "order": page.order, "items": [] }))
}

async fn explode() -> Json<Value> {
    panic!("kaboom");
}

async fn fail() -> Result<Json<Value>, ApiError> {
    Err(anyhow::anyhow!("upstream unreachable").into())
}

async fn io_fail() -> Result<Json<Value>, ApiError> {
    Err(ApiError::unhandled(std::io::Error::other("disk full")))
}

async fn custom_status(Path(code): Path<u16>) -> Result<Json<Value>, ApiError> {
    let status = StatusCode::from_u16(code).map_err(ApiError::unhandled)?;
    Err(ServiceError::new(status, format!("status {code}")).into())
}

/// Status routes plus handlers that fail in every supported way.
pub fn create_test_app(state: AppState) -> Router {
    let router = routes()
        .route("/items", get(list_items).post(create_item))
        .route("/explode", get(explode))
        .route("/fail", get(fail))
        .route("/io-fail", get(io_fail))
        .route("/custom/{code}", get(custom_status))
        .with_state(state);

    with_error_layers(router)
}
