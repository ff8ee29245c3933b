//! Conversion of service errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::{BindErrorMessage, CatalogError, ErrorResponse};
use catalog_service::UNKNOWN_COMMAND_BODY;
use tracing::{debug, error};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub CatalogError);

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            CatalogError::Binding(ref violations) => {
                debug!("Request rejected with {} binding error(s)", violations.len());
                (
                    StatusCode::BAD_REQUEST,
                    Json(BindErrorMessage::from_violations(violations)),
                )
                    .into_response()
            }
            CatalogError::NotFound { .. } => {
                debug!("{}", self.0);
                StatusCode::NOT_FOUND.into_response()
            }
            CatalogError::UnrecognizedCommand(_) => {
                debug!("{}", self.0);
                (StatusCode::BAD_REQUEST, UNKNOWN_COMMAND_BODY).into_response()
            }
            ref err => {
                let status = StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                if status.is_server_error() {
                    error!("Request failed: {}", err);
                } else {
                    debug!("Request rejected: {}", err);
                }
                (status, Json(ErrorResponse::from_error(err))).into_response()
            }
        }
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
#[allow(clippy::unnecessary_wraps)]
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Violation;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CatalogError::Binding(vec![Violation::object("product", "bad")]), 400),
            (CatalogError::not_found("Product", 1), 404),
            (CatalogError::UnknownType("ZZ".into()), 400),
            (CatalogError::UnrecognizedCommand("FROB".into()), 400),
            (CatalogError::conflict("duplicate"), 409),
            (CatalogError::Database("down".into()), 500),
        ];
        for (err, status) in cases {
            assert_eq!(AppError(err).into_response().status().as_u16(), status);
        }
    }

    #[tokio::test]
    async fn test_unknown_type_outside_binding_is_generic_client_error() {
        let response = AppError(CatalogError::UnknownType("ZZ".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["code"], "UNKNOWN_TYPE");
    }
}
