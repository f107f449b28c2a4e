//! OpenAPI document with the record schemas.

use crate::models::{Device, DeviceLog, DeviceProperty, DeviceType, Owner, TypeProperty};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(components(schemas(Owner, DeviceType, TypeProperty, Device, DeviceProperty, DeviceLog)))]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api-docs/openapi.json
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}
