//! Cache region names and fixed keys.

/// Region holding product types keyed by code.
pub const PRODUCT_TYPE_BY_CODE: &str = "product_type_by_code";

/// Region holding the full product type enumeration.
pub const PRODUCT_TYPES: &str = "product_types";

/// Key of the enumeration entry in [`PRODUCT_TYPES`].
pub const ALL_PRODUCT_TYPES: &str = "all";

/// Regions the type resolver populates.
#[must_use]
pub fn resolver_regions() -> [&'static str; 2] {
    [PRODUCT_TYPE_BY_CODE, PRODUCT_TYPES]
}
