//! Product type DTOs.

use crate::reference_codec::ReferenceCodec;
use catalog_core::ProductType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product type as exposed by the read-only listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductTypeResponse {
    pub id: i64,
    /// Natural key.
    #[serde(rename = "type")]
    pub code: String,
    pub description: Option<String>,
}

impl From<&ProductType> for ProductTypeResponse {
    fn from(product_type: &ProductType) -> Self {
        Self {
            id: product_type.id.into_inner(),
            code: ReferenceCodec::encode(product_type),
            description: product_type.description.clone(),
        }
    }
}

impl From<ProductType> for ProductTypeResponse {
    fn from(product_type: ProductType) -> Self {
        Self::from(&product_type)
    }
}
