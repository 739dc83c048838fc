//! Query execution against a connection pool

use serde_json::Value;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Pool, Postgres};

use crate::error::{AdapterError, AdapterResult};

use super::builder::QueryBuilder;

impl QueryBuilder {
    /// Execute and return all rows
    pub async fn fetch_all(&self, pool: &Pool<Postgres>) -> AdapterResult<Vec<PgRow>> {
        let (sql, params) = self.to_sql_with_params();
        tracing::debug!("Executing query: {}", sql);

        bind_params(sqlx::query(&sql), &params)?
            .fetch_all(pool)
            .await
            .map_err(|e| AdapterError::Database(e.to_string()))
    }

    /// Execute and return at most one row
    pub async fn fetch_optional(&self, pool: &Pool<Postgres>) -> AdapterResult<Option<PgRow>> {
        let (sql, params) = self.to_sql_with_params();
        tracing::debug!("Executing query: {}", sql);

        bind_params(sqlx::query(&sql), &params)?
            .fetch_optional(pool)
            .await
            .map_err(|e| AdapterError::Database(e.to_string()))
    }

    /// Execute and return exactly one row
    pub async fn fetch_one(&self, pool: &Pool<Postgres>) -> AdapterResult<PgRow> {
        let (sql, params) = self.to_sql_with_params();
        tracing::debug!("Executing query: {}", sql);

        bind_params(sqlx::query(&sql), &params)?
            .fetch_one(pool)
            .await
            .map_err(|e| AdapterError::Database(e.to_string()))
    }

    /// Execute a statement and return the affected-row count
    pub async fn execute(&self, pool: &Pool<Postgres>) -> AdapterResult<u64> {
        let (sql, params) = self.to_sql_with_params();
        tracing::debug!("Executing statement: {}", sql);

        let result = bind_params(sqlx::query(&sql), &params)?
            .execute(pool)
            .await
            .map_err(|e| AdapterError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

fn bind_params<'a>(
    mut query: Query<'a, Postgres, PgArguments>,
    params: &'a [Value],
) -> AdapterResult<Query<'a, Postgres, PgArguments>> {
    for value in params {
        query = bind_value(query, value)?;
    }
    Ok(query)
}

/// Bind one JSON value with its native SQL type
fn bind_value<'a>(
    query: Query<'a, Postgres, PgArguments>,
    value: &'a Value,
) -> AdapterResult<Query<'a, Postgres, PgArguments>> {
    match value {
        Value::Null => Ok(query.bind(None::<String>)),
        Value::Bool(b) => Ok(query.bind(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(query.bind(i))
            } else if let Some(f) = n.as_f64() {
                Ok(query.bind(f))
            } else {
                Ok(query.bind(n.to_string()))
            }
        }
        Value::String(s) => Ok(query.bind(s.as_str())),
        Value::Array(_) | Value::Object(_) => Ok(query.bind(sqlx::types::Json(value.clone()))),
    }
}
