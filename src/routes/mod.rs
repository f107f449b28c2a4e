//! Router assembly.

mod common;
mod docs;
mod entity;

pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};
pub use entity::entity_routes;

use crate::middleware::log_requests;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

/// Prefix for the record routes.
pub const API_PREFIX: &str = "/api/v1";

/// Full application: common and docs routes at the root, records under `/api/v1`,
/// request logging and a body size limit around everything.
pub fn app_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.pool.clone()))
        .merge(docs_routes())
        .nest(API_PREFIX, entity_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(log_requests))
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
