//! Product controller.

use crate::{
    extractors::BindingJson,
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use catalog_core::{BindErrorMessage, ProductId};
use catalog_service::{ProductRequest, ProductResponse};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product", post(create_product))
        .route("/product/:id", get(get_product).patch(update_product))
}

/// Get a product by id.
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "product",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn get_product(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<ProductResponse> {
    debug!("Get product request: {}", id);

    let response = state.product_service.get_product(ProductId::from(id)).await?;
    ok(response)
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/product",
    tag = "product",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid request", body = BindErrorMessage)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    BindingJson(request): BindingJson<ProductRequest>,
) -> ApiResult<ProductResponse> {
    debug!("Create product request");

    let response = state.product_service.create_product(request).await?;
    ok(response)
}

/// Replace every field of a product.
#[utoipa::path(
    patch,
    path = "/product/{id}",
    tag = "product",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid request", body = BindErrorMessage),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    BindingJson(request): BindingJson<ProductRequest>,
) -> ApiResult<ProductResponse> {
    debug!("Update product request: {}", id);

    let response = state
        .product_service
        .update_product(ProductId::from(id), request)
        .await?;
    ok(response)
}
