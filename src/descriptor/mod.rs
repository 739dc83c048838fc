//! Model descriptors - caller-supplied entity descriptions
//!
//! A [`ModelDescriptor`] declares an entity's name, its ordered typed field
//! list, and any belongs-to relationships. Descriptors are plain values built
//! before connection setup; the adapter registers them into live entity
//! mappings at construction time.

mod field;
mod model;
mod relationship;

pub use field::{FieldDescriptor, FieldType};
pub use model::ModelDescriptor;
pub use relationship::RelationshipDescriptor;
