//! Entity mapping registration
//!
//! An [`EntityMapping`] is the live registration produced from a
//! [`ModelDescriptor`]: the resolved table name, the per-attribute column
//! plan, and the primary-key column. Registration is a bounded transformation
//! over the descriptor; it touches no connection and fails fast on a
//! malformed descriptor.

use std::collections::HashSet;

use crate::descriptor::{FieldType, ModelDescriptor};
use crate::error::{AdapterError, AdapterResult};
use crate::naming::to_column_name;

/// Connection-wide mapping conventions
///
/// Defaults match the adapter's contract: no automatic timestamp columns,
/// table names not pluralized, column names underscored.
#[derive(Debug, Clone)]
pub struct MappingConventions {
    /// Append `createdAt`/`updatedAt` timestamp attributes to every mapping.
    pub timestamps: bool,
    /// Use the descriptor name verbatim as the table name.
    pub freeze_table_name: bool,
    /// Derive snake_case column names from camelCase attributes.
    pub underscored: bool,
}

impl Default for MappingConventions {
    fn default() -> Self {
        Self {
            timestamps: false,
            freeze_table_name: true,
            underscored: true,
        }
    }
}

/// One attribute's place in the mapping: its name, its persisted column, and
/// its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeColumn {
    pub attribute: String,
    pub column: String,
    pub field_type: FieldType,
}

/// Live schema registration for one entity
#[derive(Debug, Clone)]
pub struct EntityMapping {
    table: String,
    columns: Vec<AttributeColumn>,
    primary_key: AttributeColumn,
}

impl EntityMapping {
    /// Register a descriptor under the given conventions.
    ///
    /// Fails on an empty field list, duplicate attribute names, or a
    /// primary-key designation that names no declared field.
    pub fn register(
        descriptor: &ModelDescriptor,
        conventions: &MappingConventions,
    ) -> AdapterResult<Self> {
        if descriptor.fields().is_empty() {
            return Err(AdapterError::Schema(format!(
                "model '{}' declares no fields",
                descriptor.name()
            )));
        }

        let table = if conventions.freeze_table_name {
            descriptor.name().to_string()
        } else {
            pluralize(descriptor.name())
        };

        let mut columns = Vec::with_capacity(descriptor.fields().len());
        let mut seen = HashSet::new();
        for field in descriptor.fields() {
            if !seen.insert(field.name.as_str()) {
                return Err(AdapterError::Schema(format!(
                    "model '{}' declares attribute '{}' more than once",
                    descriptor.name(),
                    field.name
                )));
            }
            columns.push(plan_column(&field.name, field.field_type, conventions));
        }

        if conventions.timestamps {
            for name in ["createdAt", "updatedAt"] {
                if seen.contains(name) {
                    return Err(AdapterError::Schema(format!(
                        "model '{}' declares '{}' while timestamps are enabled",
                        descriptor.name(),
                        name
                    )));
                }
                columns.push(plan_column(name, FieldType::Timestamp, conventions));
            }
        }

        let primary_key_field = descriptor.primary_key_field().ok_or_else(|| {
            AdapterError::Schema(format!(
                "model '{}' designates primary key '{}' but declares no such field",
                descriptor.name(),
                descriptor.primary_key_designation().unwrap_or_default()
            ))
        })?;
        let primary_key = columns
            .iter()
            .find(|col| col.attribute == primary_key_field.name)
            .cloned()
            .expect("primary key resolved from declared fields");

        tracing::debug!(
            "Registered entity mapping '{}' ({} columns, pk '{}')",
            table,
            columns.len(),
            primary_key.column
        );

        Ok(Self {
            table,
            columns,
            primary_key,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[AttributeColumn] {
        &self.columns
    }

    pub fn primary_key(&self) -> &AttributeColumn {
        &self.primary_key
    }

    /// Look up the column plan for an attribute name.
    pub fn column_for_attribute(&self, attribute: &str) -> Option<&AttributeColumn> {
        self.columns.iter().find(|col| col.attribute == attribute)
    }
}

fn plan_column(attribute: &str, field_type: FieldType, conventions: &MappingConventions) -> AttributeColumn {
    let column = if conventions.underscored {
        to_column_name(attribute)
    } else {
        attribute.to_string()
    };
    AttributeColumn {
        attribute: attribute.to_string(),
        column,
        field_type,
    }
}

fn pluralize(name: &str) -> String {
    if name.ends_with('s') {
        name.to_string()
    } else {
        format!("{}s", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldType;

    fn customer() -> ModelDescriptor {
        ModelDescriptor::new("customer")
            .with_field("customerId", FieldType::Integer)
            .with_field("firstName", FieldType::Text)
            .with_field("cityId", FieldType::Integer)
    }

    #[test]
    fn test_register_freezes_table_name_and_underscores_columns() {
        let mapping = EntityMapping::register(&customer(), &MappingConventions::default()).unwrap();
        assert_eq!(mapping.table(), "customer");

        let columns: Vec<&str> = mapping.columns().iter().map(|c| c.column.as_str()).collect();
        assert_eq!(columns, vec!["customer_id", "first_name", "city_id"]);
    }

    #[test]
    fn test_register_resolves_positional_primary_key() {
        let mapping = EntityMapping::register(&customer(), &MappingConventions::default()).unwrap();
        assert_eq!(mapping.primary_key().attribute, "customerId");
        assert_eq!(mapping.primary_key().column, "customer_id");
    }

    #[test]
    fn test_register_honors_explicit_primary_key() {
        let descriptor = customer().with_primary_key("firstName");
        let mapping = EntityMapping::register(&descriptor, &MappingConventions::default()).unwrap();
        assert_eq!(mapping.primary_key().column, "first_name");
    }

    #[test]
    fn test_register_rejects_empty_descriptor() {
        let err = EntityMapping::register(&ModelDescriptor::new("empty"), &MappingConventions::default())
            .unwrap_err();
        assert!(matches!(err, AdapterError::Schema(_)));
    }

    #[test]
    fn test_register_rejects_duplicate_attributes() {
        let descriptor = ModelDescriptor::new("dup")
            .with_field("id", FieldType::Integer)
            .with_field("id", FieldType::Text);
        let err = EntityMapping::register(&descriptor, &MappingConventions::default()).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_register_rejects_unknown_primary_key_designation() {
        let descriptor = customer().with_primary_key("missing");
        let err = EntityMapping::register(&descriptor, &MappingConventions::default()).unwrap_err();
        assert!(matches!(err, AdapterError::Schema(_)));
    }

    #[test]
    fn test_timestamps_convention_appends_columns() {
        let conventions = MappingConventions {
            timestamps: true,
            ..MappingConventions::default()
        };
        let mapping = EntityMapping::register(&customer(), &conventions).unwrap();
        assert!(mapping.column_for_attribute("createdAt").is_some());
        assert_eq!(
            mapping.column_for_attribute("updatedAt").unwrap().column,
            "updated_at"
        );
    }

    #[test]
    fn test_unfrozen_table_name_is_pluralized() {
        let conventions = MappingConventions {
            freeze_table_name: false,
            ..MappingConventions::default()
        };
        let mapping = EntityMapping::register(&customer(), &conventions).unwrap();
        assert_eq!(mapping.table(), "customers");
    }
}
