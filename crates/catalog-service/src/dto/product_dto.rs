//! Product DTOs.

use crate::reference_codec::ReferenceCodec;
use catalog_core::{Bindable, Product};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of a create or update request.
///
/// Every field is optional at the wire level so that missing fields surface
/// as binding violations instead of deserialization failures. Any `id` in
/// the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    /// Product type natural key.
    #[serde(rename = "type")]
    #[validate(required, length(min = 1))]
    pub product_type: Option<String>,

    #[validate(required, length(min = 1))]
    pub category: Option<String>,

    #[validate(required, length(min = 1))]
    pub sub_category: Option<String>,

    #[validate(required)]
    #[schema(value_type = Option<String>, format = DateTime, example = "2021-02-16T15:32:01")]
    pub role_start: Option<NaiveDateTime>,

    #[schema(value_type = Option<String>, format = DateTime)]
    pub role_end: Option<NaiveDateTime>,
}

impl Bindable for ProductRequest {
    const OBJECT_NAME: &'static str = "product";
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("name", "name"),
        ("product_type", "type"),
        ("category", "category"),
        ("sub_category", "subCategory"),
        ("role_start", "roleStart"),
        ("role_end", "roleEnd"),
    ];

    fn rejected_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => self.name.clone(),
            "product_type" | "type" => self.product_type.clone(),
            "category" => self.category.clone(),
            "sub_category" | "subCategory" => self.sub_category.clone(),
            "role_start" | "roleStart" => self.role_start.map(|t| t.to_string()),
            "role_end" | "roleEnd" => self.role_end.map(|t| t.to_string()),
            _ => None,
        }
    }
}

/// A stored product as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    /// Product type natural key.
    #[serde(rename = "type")]
    pub product_type: String,
    pub category: String,
    pub sub_category: String,
    #[schema(value_type = String, format = DateTime)]
    pub role_start: NaiveDateTime,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub role_end: Option<NaiveDateTime>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.into_inner(),
            name: product.name.clone(),
            product_type: ReferenceCodec::encode(&product.product_type),
            category: product.category.clone(),
            sub_category: product.sub_category.clone(),
            role_start: product.role_start,
            role_end: product.role_end,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self::from(&product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{ProductId, ProductType, ProductTypeId, Violation};
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 2, day)
            .unwrap()
            .and_hms_opt(15, 32, 1)
            .unwrap()
    }

    fn complete() -> ProductRequest {
        ProductRequest {
            name: Some("Widget".into()),
            product_type: Some("X1".into()),
            category: Some("Tools".into()),
            sub_category: Some("Hand".into()),
            role_start: Some(at(1)),
            role_end: None,
        }
    }

    #[test]
    fn test_deserializes_external_names() {
        let request: ProductRequest = serde_json::from_str(
            r#"{"id":99,"name":"Widget","type":"X1","category":"Tools","subCategory":"Hand","roleStart":"2021-02-01T15:32:01","roleEnd":null}"#,
        )
        .unwrap();
        assert_eq!(request, complete());
    }

    #[test]
    fn test_complete_request_is_valid() {
        assert!(complete().violations().is_empty());
    }

    #[test]
    fn test_empty_request_reports_five_required_fields() {
        let violations = ProductRequest::default().violations();
        let fields: Vec<_> = violations.iter().filter_map(Violation::field_name).collect();
        assert_eq!(fields, vec!["name", "type", "category", "subCategory", "roleStart"]);
    }

    #[test]
    fn test_empty_strings_are_rejected_with_value() {
        let request = ProductRequest {
            name: Some(String::new()),
            ..complete()
        };
        let violations = request.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_bind_error().description,
            "Field error in object 'product' on field 'name' rejected value: "
        );
    }

    #[test]
    fn test_role_end_is_not_checked_against_role_start() {
        let request = ProductRequest {
            role_start: Some(at(16)),
            role_end: Some(at(1)),
            ..complete()
        };
        assert!(request.violations().is_empty());
    }

    #[test]
    fn test_response_serializes_type_code_and_null_role_end() {
        let product = Product {
            id: ProductId(7),
            name: "Widget".into(),
            product_type: ProductType::new(ProductTypeId(1), "X1", None),
            category: "Tools".into(),
            sub_category: "Hand".into(),
            role_start: at(1),
            role_end: None,
        };
        let json = serde_json::to_value(ProductResponse::from(&product)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["type"], "X1");
        assert_eq!(json["subCategory"], "Hand");
        assert_eq!(json["roleStart"], "2021-02-01T15:32:01");
        assert!(json["roleEnd"].is_null());
    }
}
