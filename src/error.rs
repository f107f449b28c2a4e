//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Startup configuration faults. Fatal to the process, never seen by HTTP clients.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("connectivity: {0}")]
    Connectivity(#[source] sqlx::Error),
    #[error("id generation: {0}")]
    Generation(String),
    #[error("commit: {0}")]
    Commit(#[source] sqlx::Error),
    #[error("bad request: {0}")]
    Decode(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("database: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // SQLSTATE class 23: integrity constraint violation (unique, foreign key, not null, check).
        if let sqlx::Error::Database(db) = &err {
            if db.code().is_some_and(|code| code.starts_with("23")) {
                return AppError::ConstraintViolation(db.message().to_string());
            }
        }
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("no rows returned".into()),
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_) => AppError::Connectivity(err),
            other => AppError::Database(other),
        }
    }
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    /// Status and machine-readable code for the error body.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::ConstraintViolation(_) => (StatusCode::CONFLICT, "constraint_violation"),
            AppError::Decode(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::Connectivity(_) => (StatusCode::INTERNAL_SERVER_ERROR, "connectivity_error"),
            AppError::Generation(_) => (StatusCode::INTERNAL_SERVER_ERROR, "generation_error"),
            AppError::Commit(_) => (StatusCode::INTERNAL_SERVER_ERROR, "commit_error"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_not_found() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(err.is_not_found());
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn pool_faults_are_connectivity_errors() {
        assert!(matches!(
            AppError::from(sqlx::Error::PoolTimedOut),
            AppError::Connectivity(_)
        ));
        assert!(matches!(
            AppError::from(sqlx::Error::PoolClosed),
            AppError::Connectivity(_)
        ));
    }

    #[test]
    fn other_sqlx_errors_are_database_errors() {
        let err = AppError::from(sqlx::Error::ColumnNotFound("serial_number".into()));
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.status_and_code(), (StatusCode::INTERNAL_SERVER_ERROR, "database_error"));
    }

    #[test]
    fn client_faults_map_to_4xx() {
        assert_eq!(
            AppError::ConstraintViolation("duplicate key".into()).status_and_code().0,
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Decode("expected value at line 1".into()).status_and_code().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::PayloadTooLarge("length limit exceeded".into()).status_and_code(),
            (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large")
        );
    }

    #[test]
    fn server_faults_map_to_500() {
        for err in [
            AppError::Generation("entropy".into()),
            AppError::Commit(sqlx::Error::PoolClosed),
            AppError::Connectivity(sqlx::Error::PoolTimedOut),
        ] {
            assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn error_body_carries_code_and_message() {
        let response = AppError::NotFound("device 'abc'".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "not_found");
        assert_eq!(body["error"]["message"], "not found: device 'abc'");
    }
}
