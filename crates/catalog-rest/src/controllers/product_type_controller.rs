//! Read-only product type controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use catalog_service::ProductTypeResponse;

/// Creates the product type router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product-type", get(list_product_types))
        .route("/product-type/:code", get(get_product_type))
}

/// List every product type.
#[utoipa::path(
    get,
    path = "/product-type",
    tag = "product-type",
    responses(
        (status = 200, description = "All product types", body = Vec<ProductTypeResponse>)
    )
)]
pub async fn list_product_types(State(state): State<AppState>) -> ApiResult<Vec<ProductTypeResponse>> {
    let types = state.type_resolver.list_types().await?;
    ok(types.into_iter().map(ProductTypeResponse::from).collect())
}

/// Get a product type by code.
#[utoipa::path(
    get,
    path = "/product-type/{code}",
    tag = "product-type",
    params(("code" = String, Path, description = "Product type code")),
    responses(
        (status = 200, description = "Product type found", body = ProductTypeResponse),
        (status = 404, description = "Unknown code")
    )
)]
pub async fn get_product_type(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<ProductTypeResponse> {
    let product_type = state.type_resolver.resolve(&code).await?;
    ok(ProductTypeResponse::from(product_type))
}
