//! JSON extractor that reports parse failures as binding errors.
//!
//! A body that cannot be parsed at all becomes a single object-level
//! [`Violation`] carrying the parser message, so malformed JSON is answered
//! in the same error shape as field validation failures.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use catalog_core::{Bindable, CatalogError, Violation};
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON extractor for request types whose failures are reported as violations.
///
/// Field validation is left to the service, which also resolves references.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindingJson<T>(pub T);

impl<T> std::ops::Deref for BindingJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for BindingJson<T>
where
    T: DeserializeOwned + Bindable + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!("Unreadable {} body: {}", T::OBJECT_NAME, rejection.body_text());
                Err(AppError(CatalogError::Binding(vec![parse_violation::<T>(&rejection)])))
            }
        }
    }
}

fn parse_violation<T: Bindable>(rejection: &JsonRejection) -> Violation {
    Violation::object(T::OBJECT_NAME, rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header::CONTENT_TYPE};
    use catalog_service::ProductRequest;

    async fn extract(body: &str) -> Result<BindingJson<ProductRequest>, AppError> {
        let request = Request::builder()
            .method("POST")
            .uri("/product")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        BindingJson::<ProductRequest>::from_request(request, &()).await
    }

    fn single_violation(result: Result<BindingJson<ProductRequest>, AppError>) -> Violation {
        match result {
            Err(AppError(CatalogError::Binding(mut violations))) => {
                assert_eq!(violations.len(), 1);
                violations.remove(0)
            }
            Err(other) => panic!("expected binding error, got {:?}", other),
            Ok(_) => panic!("expected binding error"),
        }
    }

    #[tokio::test]
    async fn test_empty_object_is_accepted() {
        let BindingJson(request) = extract("{}").await.unwrap();
        assert_eq!(request, ProductRequest::default());
    }

    #[tokio::test]
    async fn test_syntax_error_is_object_violation() {
        let violation = single_violation(extract("{\"name\": ").await);
        let rendered = violation.to_bind_error();
        assert_eq!(rendered.code, "E999");
        assert!(rendered.description.starts_with("Error in object 'product': "));
    }

    #[tokio::test]
    async fn test_unparsable_date_is_object_violation() {
        let violation = single_violation(extract(r#"{"roleStart": "yesterday"}"#).await);
        assert!(violation.field_name().is_none());
        assert!(violation.to_bind_error().description.contains("roleStart"));
    }
}
