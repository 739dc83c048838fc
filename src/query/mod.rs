//! Parameterized query building and execution
//!
//! A trimmed-down builder for the four statement shapes the adapter issues.
//! Values are always carried as parameters and bound at execution time;
//! column and table identifiers come from registered mappings, never from
//! caller payloads.

mod builder;
mod execution;
mod sql;
mod types;

pub use builder::QueryBuilder;
pub use types::{QueryOperator, QueryType, SetClause, WhereCondition};
