//! Seeding of the default product types.

use crate::ProductTypeRepository;
use catalog_core::{default_product_types, CatalogResult};
use tracing::info;

/// Creates every default product type the store does not have yet.
///
/// Returns the number of types created.
pub async fn seed_default_types(repository: &dyn ProductTypeRepository) -> CatalogResult<usize> {
    let mut created = 0;
    for product_type in default_product_types() {
        if repository.find_by_code(&product_type.code).await?.is_none() {
            repository.create(&product_type).await?;
            created += 1;
        }
    }
    if created > 0 {
        info!("Seeded {} product type(s)", created);
    }
    Ok(created)
}
