//! Product entity.

use crate::{ProductId, ProductType};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored product.
///
/// References exactly one [`ProductType`]; the type itself belongs to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub product_type: ProductType,
    pub category: String,
    pub sub_category: String,
    pub role_start: NaiveDateTime,
    pub role_end: Option<NaiveDateTime>,
}

impl Product {
    /// Replaces every mutable field with the incoming values.
    ///
    /// This is a full replacement, not a sparse patch: an absent `role_end`
    /// on the incoming record clears the stored one. The id is kept.
    pub fn merge(&mut self, incoming: NewProduct) {
        self.name = incoming.name;
        self.product_type = incoming.product_type;
        self.category = incoming.category;
        self.sub_category = incoming.sub_category;
        self.role_start = incoming.role_start;
        self.role_end = incoming.role_end;
    }
}

/// A bound product without identity, produced from a create or update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub product_type: ProductType,
    pub category: String,
    pub sub_category: String,
    pub role_start: NaiveDateTime,
    pub role_end: Option<NaiveDateTime>,
}

impl NewProduct {
    /// Attaches a store-assigned id.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            product_type: self.product_type,
            category: self.category,
            sub_category: self.sub_category,
            role_start: self.role_start,
            role_end: self.role_end,
        }
    }
}
