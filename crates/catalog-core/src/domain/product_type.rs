//! Product type entity.

use crate::{ProductTypeId};
use serde::{Deserialize, Serialize};

/// A product classification, referenced externally by its natural-key `code`.
///
/// Owned by the store. Everything else holds read-only copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductType {
    /// Store-assigned identity.
    pub id: ProductTypeId,

    /// Unique natural key, e.g. `X1`.
    pub code: String,

    /// Free-text description.
    pub description: Option<String>,
}

impl ProductType {
    #[must_use]
    pub fn new(id: ProductTypeId, code: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id,
            code: code.into(),
            description,
        }
    }
}

/// A product type that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductType {
    pub code: String,
    pub description: Option<String>,
}

impl NewProductType {
    #[must_use]
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: Some(description.into()),
        }
    }

    /// Attaches a store-assigned id.
    #[must_use]
    pub fn into_product_type(self, id: ProductTypeId) -> ProductType {
        ProductType {
            id,
            code: self.code,
            description: self.description,
        }
    }
}

/// The product types every fresh catalog starts with.
#[must_use]
pub fn default_product_types() -> Vec<NewProductType> {
    vec![
        NewProductType::new("X1", "Standard product"),
        NewProductType::new("R3", "Regional product"),
        NewProductType::new("R4", "Regional product, extended"),
    ]
}
