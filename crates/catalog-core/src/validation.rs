//! Request binding failures and their external error shape.
//!
//! Every binding failure, whether it comes from the structural validator or
//! from resolving a natural key, is expressed as a [`Violation`]. The external
//! [`BindErrorMessage`] list is rendered from violations in one place.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Error code for a rejected field.
pub const FIELD_ERROR_CODE: &str = "E001";
/// Error code for a failure not attributable to a single field.
pub const OBJECT_ERROR_CODE: &str = "E999";
/// Top-level description of a bind error response.
pub const INVALID_REQUEST: &str = "Invalid request";

/// Key under which `validator` reports struct-level failures.
const OBJECT_LEVEL_KEY: &str = "__all__";

/// A single binding failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// One field was rejected.
    Field {
        object_name: String,
        field: String,
        /// Rendered rejected value; `None` when the field was absent.
        rejected_value: Option<String>,
        message: String,
    },
    /// The request as a whole was rejected.
    Object { object_name: String, message: String },
}

impl Violation {
    /// Creates a field violation.
    #[must_use]
    pub fn field(
        object_name: impl Into<String>,
        field: impl Into<String>,
        rejected_value: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Field {
            object_name: object_name.into(),
            field: field.into(),
            rejected_value,
            message: message.into(),
        }
    }

    /// Creates an object-level violation.
    #[must_use]
    pub fn object(object_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Object {
            object_name: object_name.into(),
            message: message.into(),
        }
    }

    /// Returns the field name for field violations.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Field { field, .. } => Some(field),
            Self::Object { .. } => None,
        }
    }

    /// Renders this violation in the external error shape.
    #[must_use]
    pub fn to_bind_error(&self) -> BindError {
        match self {
            Self::Field {
                object_name,
                field,
                rejected_value,
                ..
            } => BindError {
                code: FIELD_ERROR_CODE.to_string(),
                code_description: "Field Error".to_string(),
                description: format!(
                    "Field error in object '{}' on field '{}' rejected value: {}",
                    object_name,
                    field,
                    rejected_value.as_deref().unwrap_or("null")
                ),
            },
            Self::Object {
                object_name,
                message,
            } => BindError {
                code: OBJECT_ERROR_CODE.to_string(),
                code_description: "Object Error".to_string(),
                description: format!("Error in object '{}': {}", object_name, message),
            },
        }
    }
}

/// One entry of the external error list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BindError {
    pub code: String,
    pub code_description: String,
    pub description: String,
}

/// Body of a 400 response caused by binding failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BindErrorMessage {
    pub description: String,
    pub errors: Vec<BindError>,
}

impl BindErrorMessage {
    /// Renders violations in the order given.
    #[must_use]
    pub fn from_violations(violations: &[Violation]) -> Self {
        Self {
            description: INVALID_REQUEST.to_string(),
            errors: violations.iter().map(Violation::to_bind_error).collect(),
        }
    }
}

/// A request type whose validation failures can be reported as violations.
pub trait Bindable: Validate {
    /// Object name used in error descriptions.
    const OBJECT_NAME: &'static str;

    /// Validated fields in report order, as `(struct field, external name)`.
    const FIELDS: &'static [(&'static str, &'static str)];

    /// Renders the current value of a field, `None` when absent.
    fn rejected_value(&self, field: &str) -> Option<String>;

    /// Runs validation and collects violations.
    ///
    /// At most one violation is reported per field, in `FIELDS` order,
    /// followed by object-level violations.
    fn violations(&self) -> Vec<Violation> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_violations(self, &errors),
        }
    }

    /// Position of a violation in report order; object-level ones sort last.
    fn report_position(violation: &Violation) -> usize
    where
        Self: Sized,
    {
        violation
            .field_name()
            .and_then(|name| Self::FIELDS.iter().position(|(_, external)| *external == name))
            .unwrap_or(Self::FIELDS.len())
    }
}

fn collect_violations<T: Bindable + ?Sized>(request: &T, errors: &ValidationErrors) -> Vec<Violation> {
    let field_errors = errors.field_errors();
    let mut violations = Vec::new();

    for (field, external) in T::FIELDS {
        let reported = field_errors.get(*field).or_else(|| field_errors.get(*external));
        if let Some(error) = reported.and_then(|list| list.first()) {
            violations.push(Violation::field(
                T::OBJECT_NAME,
                *external,
                request.rejected_value(field),
                message_of(error),
            ));
        }
    }

    if let Some(list) = field_errors.get(OBJECT_LEVEL_KEY) {
        violations.extend(
            list.iter()
                .map(|error| Violation::object(T::OBJECT_NAME, message_of(error))),
        );
    }

    violations
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map_or_else(|| error.code.to_string(), ToString::to_string)
}
