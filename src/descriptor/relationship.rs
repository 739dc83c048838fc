//! Belongs-to relationship declarations

use serde::{Deserialize, Serialize};

use super::model::ModelDescriptor;

/// Static belongs-to declaration: the related model's descriptor and the
/// foreign-key attribute on the declaring model.
///
/// The related descriptor is a plain value resolved before connection setup;
/// registration instantiates nothing at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipDescriptor {
    pub related: ModelDescriptor,
    pub foreign_key: String,
}

impl RelationshipDescriptor {
    pub fn new(related: ModelDescriptor, foreign_key: &str) -> Self {
        Self {
            related,
            foreign_key: foreign_key.to_string(),
        }
    }
}
