//! Model descriptor definition and builder

use serde::{Deserialize, Serialize};

use super::field::{FieldDescriptor, FieldType};
use super::relationship::RelationshipDescriptor;

/// Declarative description of one entity: name, ordered attribute list,
/// optional primary-key designation, and belongs-to relationships.
///
/// Field declaration order is significant: when no primary key is designated
/// explicitly, the first declared field is the primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    name: String,
    fields: Vec<FieldDescriptor>,
    primary_key: Option<String>,
    relationships: Vec<RelationshipDescriptor>,
}

impl ModelDescriptor {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
            primary_key: None,
            relationships: Vec::new(),
        }
    }

    /// Declare an attribute. Declaration order is preserved.
    pub fn with_field(mut self, name: &str, field_type: FieldType) -> Self {
        self.fields.push(FieldDescriptor::new(name, field_type));
        self
    }

    /// Designate the primary-key attribute explicitly.
    ///
    /// Without this, the first declared field is the primary key.
    pub fn with_primary_key(mut self, name: &str) -> Self {
        self.primary_key = Some(name.to_string());
        self
    }

    /// Declare a belongs-to relationship keyed on one of this model's
    /// attributes.
    pub fn with_belongs_to(mut self, related: ModelDescriptor, foreign_key: &str) -> Self {
        self.relationships
            .push(RelationshipDescriptor::new(related, foreign_key));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn relationships(&self) -> &[RelationshipDescriptor] {
        &self.relationships
    }

    /// Look up a declared field by attribute name.
    pub fn find_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Resolve the primary-key field: the explicit designation when set,
    /// otherwise the first declared field.
    pub fn primary_key_field(&self) -> Option<&FieldDescriptor> {
        match &self.primary_key {
            Some(name) => self.find_field(name),
            None => self.fields.first(),
        }
    }

    /// The explicit primary-key designation, if any.
    pub fn primary_key_designation(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }
}
