//! Query builder core

use serde_json::Value;

use super::types::*;

/// Builder for the statements the adapter issues
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    pub(crate) query_type: QueryType,
    pub(crate) select_fields: Vec<String>,
    pub(crate) table: Option<String>,
    pub(crate) set_clauses: Vec<SetClause>,
    pub(crate) where_conditions: Vec<WhereCondition>,
    pub(crate) returning: bool,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Create a new SELECT builder
    pub fn new() -> Self {
        Self {
            query_type: QueryType::Select,
            select_fields: Vec::new(),
            table: None,
            set_clauses: Vec::new(),
            where_conditions: Vec::new(),
            returning: false,
        }
    }

    /// Create an INSERT builder for a table
    pub fn insert_into(table: &str) -> Self {
        Self {
            query_type: QueryType::Insert,
            table: Some(table.to_string()),
            ..Self::new()
        }
    }

    /// Create an UPDATE builder for a table
    pub fn update(table: &str) -> Self {
        Self {
            query_type: QueryType::Update,
            table: Some(table.to_string()),
            ..Self::new()
        }
    }

    /// Create a DELETE builder for a table
    pub fn delete_from(table: &str) -> Self {
        Self {
            query_type: QueryType::Delete,
            table: Some(table.to_string()),
            ..Self::new()
        }
    }

    /// Set the FROM table
    pub fn from(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Add a projected column; without any, the query selects `*`
    pub fn select_column(mut self, column: &str) -> Self {
        self.select_fields.push(column.to_string());
        self
    }

    /// Add a column assignment for INSERT/UPDATE
    pub fn set<T: Into<Value>>(mut self, column: &str, value: T) -> Self {
        self.set_clauses.push(SetClause {
            column: column.to_string(),
            value: value.into(),
        });
        self
    }

    /// Add a WHERE equality condition
    pub fn where_eq<T: Into<Value>>(mut self, column: &str, value: T) -> Self {
        self.where_conditions.push(WhereCondition {
            column: column.to_string(),
            operator: QueryOperator::Equal,
            value: Some(value.into()),
            values: Vec::new(),
        });
        self
    }

    /// Add a WHERE IN condition
    pub fn where_in(mut self, column: &str, values: Vec<Value>) -> Self {
        self.where_conditions.push(WhereCondition {
            column: column.to_string(),
            operator: QueryOperator::In,
            value: None,
            values,
        });
        self
    }

    /// Append `RETURNING *` to an INSERT
    pub fn returning_all(mut self) -> Self {
        self.returning = true;
        self
    }
}
