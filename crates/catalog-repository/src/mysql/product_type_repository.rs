//! MySQL product type repository implementation.

use super::insert_id;
use crate::{traits::ProductTypeRepository, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{CatalogResult, NewProductType, ProductType, ProductTypeId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL product type repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductTypeRepository)]
pub struct MySqlProductTypeRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductTypeRepository {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductTypeRow {
    id: i64,
    code: String,
    description: Option<String>,
}

impl From<ProductTypeRow> for ProductType {
    fn from(row: ProductTypeRow) -> Self {
        ProductType {
            id: ProductTypeId(row.id),
            code: row.code,
            description: row.description,
        }
    }
}

#[async_trait]
impl ProductTypeRepository for MySqlProductTypeRepository {
    async fn find_by_code(&self, code: &str) -> CatalogResult<Option<ProductType>> {
        debug!("Finding product type by code: {}", code);

        let row = sqlx::query_as::<_, ProductTypeRow>(
            "SELECT id, code, description FROM product_type WHERE code = ?",
        )
        .bind(code)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(ProductType::from))
    }

    async fn find_all(&self) -> CatalogResult<Vec<ProductType>> {
        let rows = sqlx::query_as::<_, ProductTypeRow>(
            "SELECT id, code, description FROM product_type ORDER BY id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(ProductType::from).collect())
    }

    async fn create(&self, product_type: &NewProductType) -> CatalogResult<ProductType> {
        debug!("Creating product type: {}", product_type.code);

        let result = sqlx::query("INSERT INTO product_type (code, description) VALUES (?, ?)")
            .bind(&product_type.code)
            .bind(&product_type.description)
            .execute(self.pool.inner())
            .await?;

        let id = insert_id(result.last_insert_id())?;
        Ok(product_type.clone().into_product_type(ProductTypeId(id)))
    }

    async fn health_check(&self) -> CatalogResult<()> {
        self.pool.health_check().await
    }
}
