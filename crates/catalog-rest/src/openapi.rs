//! OpenAPI documentation configuration.

use crate::controllers::{CheckResult, HealthResponse, ReadinessResponse};
use catalog_core::{BindError, BindErrorMessage, ErrorResponse};
use catalog_service::{CacheRegionSummary, ProductRequest, ProductResponse, ProductTypeResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the product catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "Products referencing product types by natural key, with cache administration",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::create_product,
        crate::controllers::product_controller::update_product,
        crate::controllers::product_type_controller::list_product_types,
        crate::controllers::product_type_controller::get_product_type,
        crate::controllers::cache_controller::list_regions,
        crate::controllers::cache_controller::run_command,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            BindError,
            BindErrorMessage,
            ProductRequest,
            ProductResponse,
            ProductTypeResponse,
            CacheRegionSummary,
            HealthResponse,
            CheckResult,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "product", description = "Product CRUD"),
        (name = "product-type", description = "Product type lookup"),
        (name = "cache", description = "Cache administration"),
        (name = "health", description = "Health checks")
    )
)]
pub struct ApiDoc;
