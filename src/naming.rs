//! Attribute and column naming conventions
//!
//! Persisted columns are snake_case while attribute names are lowerCamelCase.
//! Inbound write payloads may arrive with either convention; keys are
//! normalized to the attribute form before they are matched against a
//! registered mapping.

use convert_case::{Case, Casing};
use serde_json::{Map, Value};

/// Convert a single snake_case key to lowerCamelCase.
///
/// The key is split on `_`; the first segment is kept as-is and every later
/// segment contributes its first letter upper-cased. Keys without an
/// underscore pass through unchanged.
pub fn to_lower_camel_case(key: &str) -> String {
    if !key.contains('_') {
        return key.to_string();
    }

    let mut parts = key.split('_');
    let mut out = String::with_capacity(key.len());
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        let mut chars = part.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Normalize every key of a payload map to lowerCamelCase.
///
/// Values are passed through unmodified. Applied before every create/update
/// write.
pub fn normalize_keys(payload: Map<String, Value>) -> Map<String, Value> {
    payload
        .into_iter()
        .map(|(key, value)| (to_lower_camel_case(&key), value))
        .collect()
}

/// Derive the persisted column name for an attribute (`firstName` ->
/// `first_name`).
pub fn to_column_name(attribute: &str) -> String {
    attribute.to_case(Case::Snake)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_underscored_keys_are_camel_cased() {
        assert_eq!(to_lower_camel_case("a_b_c"), "aBC");
        assert_eq!(to_lower_camel_case("first_name"), "firstName");
        assert_eq!(to_lower_camel_case("customer_order_id"), "customerOrderId");
    }

    #[test]
    fn test_keys_without_underscores_are_unchanged() {
        assert_eq!(to_lower_camel_case("id"), "id");
        assert_eq!(to_lower_camel_case("firstName"), "firstName");
        assert_eq!(to_lower_camel_case("UPPER"), "UPPER");
    }

    #[test]
    fn test_empty_trailing_segments_are_ignored() {
        assert_eq!(to_lower_camel_case("name_"), "name");
        assert_eq!(to_lower_camel_case("_name"), "Name");
    }

    #[test]
    fn test_normalize_keys_preserves_values() {
        let mut payload = Map::new();
        payload.insert("first_name".to_string(), json!("Ana"));
        payload.insert("active".to_string(), json!(true));

        let normalized = normalize_keys(payload);
        assert_eq!(normalized.get("firstName"), Some(&json!("Ana")));
        assert_eq!(normalized.get("active"), Some(&json!(true)));
        assert!(normalized.get("first_name").is_none());
    }

    #[test]
    fn test_normalize_keys_empty_input() {
        let normalized = normalize_keys(Map::new());
        assert!(normalized.is_empty());
    }

    #[test]
    fn test_column_name_direction() {
        assert_eq!(to_column_name("firstName"), "first_name");
        assert_eq!(to_column_name("id"), "id");
        assert_eq!(to_column_name("customerOrderId"), "customer_order_id");
    }
}
