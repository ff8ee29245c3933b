//! Product service implementation.

use crate::dto::{ProductRequest, ProductResponse};
use crate::product_service::{ProductService, PRODUCT_RESOURCE};
use crate::reference_codec::ReferenceCodec;
use crate::type_resolver::TypeResolver;
use async_trait::async_trait;
use catalog_core::{Bindable, CatalogError, CatalogResult, NewProduct, ProductId, ProductType, Violation};
use catalog_repository::ProductRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

const TYPE_FIELD: &str = "type";

/// Product CRUD with request binding and full-replacement update.
#[derive(Component)]
#[shaku(interface = ProductService)]
pub struct ProductServiceComponent {
    #[shaku(inject)]
    product_repository: Arc<dyn ProductRepository>,
    #[shaku(inject)]
    type_resolver: Arc<dyn TypeResolver>,
}

impl ProductServiceComponent {
    pub fn new(product_repository: Arc<dyn ProductRepository>, type_resolver: Arc<dyn TypeResolver>) -> Self {
        Self {
            product_repository,
            type_resolver,
        }
    }

    fn codec(&self) -> ReferenceCodec {
        ReferenceCodec::new(Arc::clone(&self.type_resolver))
    }

    /// Turns a request into a product, or fails with every binding violation.
    ///
    /// The type is decoded only when it passed structural validation. An
    /// unknown code joins the other violations; any other decode failure
    /// aborts binding.
    async fn bind(&self, request: ProductRequest) -> CatalogResult<NewProduct> {
        let mut violations = request.violations();
        let mut product_type: Option<ProductType> = None;

        let type_rejected = violations.iter().any(|v| v.field_name() == Some(TYPE_FIELD));
        if let (false, Some(code)) = (type_rejected, request.product_type.as_deref()) {
            match self.codec().decode(code).await {
                Ok(resolved) => product_type = Some(resolved),
                Err(CatalogError::UnknownType(unknown)) => {
                    let message = format!("Unknown product type '{}'", unknown);
                    violations.push(Violation::field(
                        ProductRequest::OBJECT_NAME,
                        TYPE_FIELD,
                        Some(unknown),
                        message,
                    ));
                }
                Err(e) => return Err(e),
            }
        }

        if !violations.is_empty() {
            violations.sort_by_key(ProductRequest::report_position);
            debug!("Rejected product request with {} violation(s)", violations.len());
            return Err(CatalogError::Binding(violations));
        }

        let ProductRequest {
            name: Some(name),
            category: Some(category),
            sub_category: Some(sub_category),
            role_start: Some(role_start),
            role_end,
            ..
        } = request
        else {
            return Err(CatalogError::internal("validated product request is incomplete"));
        };
        let product_type =
            product_type.ok_or_else(|| CatalogError::internal("validated product request has no type"))?;

        Ok(NewProduct {
            name,
            product_type,
            category,
            sub_category,
            role_start,
            role_end,
        })
    }
}

#[async_trait]
impl ProductService for ProductServiceComponent {
    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductResponse> {
        debug!("Getting product: {}", id);

        let product = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(PRODUCT_RESOURCE, id))?;

        Ok(ProductResponse::from(product))
    }

    async fn create_product(&self, request: ProductRequest) -> CatalogResult<ProductResponse> {
        let new_product = self.bind(request).await?;
        let product = self.product_repository.insert(&new_product).await?;

        info!("Product created: {} ({})", product.id, product.name);
        Ok(ProductResponse::from(product))
    }

    async fn update_product(&self, id: ProductId, request: ProductRequest) -> CatalogResult<ProductResponse> {
        let incoming = self.bind(request).await?;

        let mut product = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(PRODUCT_RESOURCE, id))?;

        product.merge(incoming);
        let updated = self.product_repository.update(&product).await?;

        info!("Product updated: {}", updated.id);
        Ok(ProductResponse::from(updated))
    }
}

impl std::fmt::Debug for ProductServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceComponent").finish_non_exhaustive()
    }
}
