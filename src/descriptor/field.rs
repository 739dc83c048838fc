//! Typed field descriptions

use serde::{Deserialize, Serialize};

/// Column types the adapter knows how to bind and decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Integer,
    BigInt,
    Double,
    Text,
    Boolean,
    Uuid,
    Timestamp,
    Date,
    Json,
}

/// One declared attribute of a model
///
/// Attribute names use lowerCamelCase; the persisted column name is derived
/// from the mapping's conventions, not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldDescriptor {
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_descriptor_roundtrips_through_serde() {
        let field = FieldDescriptor::new("firstName", FieldType::Text);
        let json = serde_json::to_string(&field).unwrap();
        let back: FieldDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }
}
