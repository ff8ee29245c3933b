//! Typed ID wrappers for domain entities.
//!
//! Both ids are assigned by the store and never generated in-process.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A strongly-typed wrapper for product ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A strongly-typed wrapper for product type ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductTypeId(pub i64);

impl ProductTypeId {
    /// Returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for ProductTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductTypeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductTypeId> for i64 {
    fn from(id: ProductTypeId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_parse() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id, ProductId(42));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId(7).to_string(), "7");
        assert_eq!(ProductTypeId(3).to_string(), "3");
    }

    #[test]
    fn test_id_serde_transparent() {
        let json = serde_json::to_string(&ProductTypeId(9)).unwrap();
        assert_eq!(json, "9");
        let parsed: ProductId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed.into_inner(), 12);
    }
}
