//! Payload Validation
//!
//! Create/update bodies are flat JSON objects. Validation is a presence
//! check of the kind's required fields plus coercion of the `order` and
//! `isActive` controls, which are lifted out of the document into dedicated
//! columns. No cross-record invariants exist; duplicate display orders are
//! allowed and resolved by insertion order at list time.

use serde_json::{Map, Value};

use crate::domain::kind::ResourceKind;
use crate::error::{ContentError, ContentResult};

/// A validated create/update payload
#[derive(Debug, Clone)]
pub struct ValidatedPayload {
    /// The flat document, without the `order`/`isActive` controls
    pub data: Map<String, Value>,
    pub sort_order: i32,
    pub is_active: bool,
}

/// Validate a request body for the given kind.
pub fn validate(kind: ResourceKind, body: Value) -> ContentResult<ValidatedPayload> {
    let Value::Object(mut data) = body else {
        return Err(ContentError::Validation(
            "Request body must be a JSON object".to_string(),
        ));
    };

    for field in kind.required_fields() {
        if !is_present(data.get(*field)) {
            return Err(ContentError::MissingField(field));
        }
    }

    let sort_order = match data.remove("order") {
        Some(value) => coerce_order(&value)?,
        None => 0,
    };

    let is_active = match data.remove("isActive") {
        Some(Value::Bool(b)) => b,
        Some(other) => {
            return Err(ContentError::Validation(format!(
                "isActive must be a boolean, got {other}"
            )));
        }
        None => true,
    };

    Ok(ValidatedPayload {
        data,
        sort_order,
        is_active,
    })
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// Display order arrives as a number or a numeric string.
fn coerce_order(value: &Value) -> ContentResult<i32> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ContentError::Validation(format!("order must be an integer, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_complete_payload() {
        let payload = validate(
            ResourceKind::Logos,
            json!({"name": "Acme", "imageUrl": "https://a/l.png", "order": 3}),
        )
        .unwrap();

        assert_eq!(payload.sort_order, 3);
        assert!(payload.is_active);
        assert_eq!(payload.data["name"], "Acme");
        // Controls are lifted out of the document
        assert!(!payload.data.contains_key("order"));
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = validate(ResourceKind::Projects, json!({"title": "Expansion"})).unwrap_err();
        assert!(matches!(err, ContentError::MissingField("description")));
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let err = validate(
            ResourceKind::Gallery,
            json!({"imageUrl": "   "}),
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::MissingField("imageUrl")));
    }

    #[test]
    fn test_order_coerced_from_numeric_string() {
        let payload = validate(
            ResourceKind::Gallery,
            json!({"imageUrl": "https://a/g.jpg", "order": "12"}),
        )
        .unwrap();
        assert_eq!(payload.sort_order, 12);
    }

    #[test]
    fn test_non_numeric_order_rejected() {
        let err = validate(
            ResourceKind::Gallery,
            json!({"imageUrl": "https://a/g.jpg", "order": "first"}),
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
    }

    #[test]
    fn test_defaults() {
        let payload = validate(
            ResourceKind::Services,
            json!({"title": "Advisory", "description": "We advise."}),
        )
        .unwrap();
        assert_eq!(payload.sort_order, 0);
        assert!(payload.is_active);
    }

    #[test]
    fn test_is_active_false() {
        let payload = validate(
            ResourceKind::Services,
            json!({"title": "Advisory", "description": "We advise.", "isActive": false}),
        )
        .unwrap();
        assert!(!payload.is_active);
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert!(validate(ResourceKind::Logos, json!([1, 2, 3])).is_err());
    }
}
