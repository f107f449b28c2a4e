//! Generic record handlers: list, list by parent, create, read, update, delete.
//!
//! Each handler is instantiated per record type and gets that type's service as state.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{ChildRecord, Record};
use crate::service::CrudService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

pub async fn list<R: Record>(
    State(service): State<Arc<CrudService<R>>>,
) -> Result<Json<Vec<R>>, AppError> {
    let records = service.get_many(None).await?;
    Ok(Json(records))
}

/// Records belonging to the parent id in the path, e.g. the logs of one device.
pub async fn list_by_parent<R: ChildRecord>(
    State(service): State<Arc<CrudService<R>>>,
    Path(parent_id): Path<String>,
) -> Result<Json<Vec<R>>, AppError> {
    let records = service
        .get_many(Some((R::PARENT_COLUMN, parent_id.as_str())))
        .await?;
    Ok(Json(records))
}

pub async fn create<R: Record>(
    State(service): State<Arc<CrudService<R>>>,
    JsonBody(mut record): JsonBody<R>,
) -> Result<impl IntoResponse, AppError> {
    service.create(&mut record).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn read<R: Record>(
    State(service): State<Arc<CrudService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<R>, AppError> {
    let record = service.get_one(&id).await?;
    Ok(Json(record))
}

/// Full overwrite. The id in the path wins over any id in the body.
pub async fn update<R: Record>(
    State(service): State<Arc<CrudService<R>>>,
    Path(id): Path<String>,
    JsonBody(mut record): JsonBody<R>,
) -> Result<Json<R>, AppError> {
    record.set_id(id);
    service.update(&record).await?;
    Ok(Json(record))
}

pub async fn delete<R: Record>(
    State(service): State<Arc<CrudService<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
