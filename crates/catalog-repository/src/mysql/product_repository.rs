//! MySQL product repository implementation.

use super::insert_id;
use crate::{traits::ProductRepository, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, NewProduct, Product, ProductId, ProductType, ProductTypeId};
use chrono::NaiveDateTime;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL product repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductRepository)]
pub struct MySqlProductRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductRepository {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// A product joined with its type.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    category: String,
    sub_category: String,
    role_start: NaiveDateTime,
    role_end: Option<NaiveDateTime>,
    type_id: i64,
    type_code: String,
    type_description: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId(row.id),
            name: row.name,
            product_type: ProductType {
                id: ProductTypeId(row.type_id),
                code: row.type_code,
                description: row.type_description,
            },
            category: row.category,
            sub_category: row.sub_category,
            role_start: row.role_start,
            role_end: row.role_end,
        }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT p.id, p.name, p.category, p.sub_category, p.role_start, p.role_end,
                   t.id AS type_id, t.code AS type_code, t.description AS type_description
            FROM product p
            JOIN product_type t ON t.id = p.product_type_id
            WHERE p.id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn insert(&self, product: &NewProduct) -> CatalogResult<Product> {
        debug!("Inserting product: {}", product.name);

        let result = sqlx::query(
            r#"
            INSERT INTO product (name, product_type_id, category, sub_category, role_start, role_end)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(product.product_type.id.into_inner())
        .bind(&product.category)
        .bind(&product.sub_category)
        .bind(product.role_start)
        .bind(product.role_end)
        .execute(self.pool.inner())
        .await?;

        let id = insert_id(result.last_insert_id())?;
        Ok(product.clone().into_product(ProductId(id)))
    }

    async fn update(&self, product: &Product) -> CatalogResult<Product> {
        debug!("Updating product: {}", product.id);

        sqlx::query(
            r#"
            UPDATE product
            SET name = ?, product_type_id = ?, category = ?, sub_category = ?,
                role_start = ?, role_end = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(product.product_type.id.into_inner())
        .bind(&product.category)
        .bind(&product.sub_category)
        .bind(product.role_start)
        .bind(product.role_end)
        .bind(product.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        // MySQL reports zero affected rows for an unchanged row, so re-read
        self.find_by_id(product.id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", product.id))
    }
}
