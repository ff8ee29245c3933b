//! Conversion between a product type and its natural-key string.

use crate::type_resolver::{TypeResolver, PRODUCT_TYPE_RESOURCE};
use catalog_core::{CatalogError, CatalogResult, ProductType};
use std::sync::Arc;

/// Encodes product types as their code at the system boundary and decodes
/// codes back into stored product types.
#[derive(Clone)]
pub struct ReferenceCodec {
    resolver: Arc<dyn TypeResolver>,
}

impl ReferenceCodec {
    #[must_use]
    pub fn new(resolver: Arc<dyn TypeResolver>) -> Self {
        Self { resolver }
    }

    /// Returns the external representation of a product type.
    #[must_use]
    pub fn encode(product_type: &ProductType) -> String {
        product_type.code.clone()
    }

    /// Resolves a code to its product type.
    ///
    /// An unknown code is the caller's fault and fails with `UnknownType`.
    /// Any other resolver failure passes through unchanged.
    pub async fn decode(&self, code: &str) -> CatalogResult<ProductType> {
        self.resolver.resolve(code).await.map_err(|e| {
            if e.is_not_found_for(PRODUCT_TYPE_RESOURCE) {
                CatalogError::UnknownType(code.to_string())
            } else {
                e
            }
        })
    }
}

impl std::fmt::Debug for ReferenceCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceCodec").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ConcurrentMapCacheManager;
    use crate::r#impl::CachingTypeResolver;
    use catalog_core::NewProductType;
    use catalog_repository::{InMemoryProductTypeRepository, ProductTypeRepository};

    fn codec_over(repository: Arc<InMemoryProductTypeRepository>) -> ReferenceCodec {
        let resolver = CachingTypeResolver::new(repository, Arc::new(ConcurrentMapCacheManager::new()));
        ReferenceCodec::new(Arc::new(resolver))
    }

    #[tokio::test]
    async fn test_decode_encode_round_trip_for_every_type() {
        let repository = Arc::new(InMemoryProductTypeRepository::with_default_types());
        let codec = codec_over(Arc::clone(&repository));

        for product_type in repository.find_all().await.unwrap() {
            let decoded = codec.decode(&ReferenceCodec::encode(&product_type)).await.unwrap();
            assert_eq!(decoded, product_type);
        }
    }

    #[tokio::test]
    async fn test_encode_decode_round_trip_for_codes() {
        let codec = codec_over(Arc::new(InMemoryProductTypeRepository::with_default_types()));
        for code in ["X1", "R3", "R4"] {
            let decoded = codec.decode(code).await.unwrap();
            assert_eq!(ReferenceCodec::encode(&decoded), code);
        }
    }

    #[tokio::test]
    async fn test_unknown_code_is_unknown_type() {
        let codec = codec_over(Arc::new(InMemoryProductTypeRepository::with_default_types()));
        let err = codec.decode("NO_SUCH_CODE").await.unwrap_err();
        assert!(matches!(err, CatalogError::UnknownType(ref code) if code == "NO_SUCH_CODE"));
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_unknown_code_resolves_once_created() {
        let repository = Arc::new(InMemoryProductTypeRepository::with_default_types());
        let codec = codec_over(Arc::clone(&repository));

        assert!(codec.decode("Z9").await.is_err());
        let created = repository.create(&NewProductType::new("Z9", "Late")).await.unwrap();
        assert_eq!(codec.decode("Z9").await.unwrap(), created);
    }
}
