//! Owner lookups by campus id and email.

use crate::error::AppError;
use crate::models::Owner;
use crate::service::CrudService;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

pub async fn read_by_campus_id(
    State(service): State<Arc<CrudService<Owner>>>,
    Path(campus_id): Path<String>,
) -> Result<Json<Owner>, AppError> {
    let owner = service.get_one_by(Owner::CAMPUS_ID, &campus_id).await?;
    Ok(Json(owner))
}

pub async fn read_by_email(
    State(service): State<Arc<CrudService<Owner>>>,
    Path(email): Path<String>,
) -> Result<Json<Owner>, AppError> {
    let owner = service.get_one_by(Owner::EMAIL, &email).await?;
    Ok(Json(owner))
}
