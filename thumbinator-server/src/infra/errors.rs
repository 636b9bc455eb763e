use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use thumbinator_core::CatalogError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        }));

        (self.status, body).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Cancelled => {
                Self::unavailable("Search was cancelled")
            }
            _ => {
                tracing::error!(error = %err, "catalog search failed");
                Self::internal(err.to_string())
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_json_error_envelope() {
        let response = AppError::bad_request("Invalid dateFrom").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(value["error"]["message"], "Invalid dateFrom");
        assert_eq!(value["error"]["status"], 400);
    }

    #[test]
    fn catalog_errors_map_to_status_codes() {
        assert_eq!(
            AppError::from(CatalogError::Cancelled).status,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(CatalogError::Join("panicked".into())).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn anyhow_errors_keep_their_context() {
        let err = anyhow::anyhow!("disk on fire").context("catalog rebuild");
        let app_error = AppError::from(err);
        assert_eq!(app_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app_error.message, "catalog rebuild");
    }
}
