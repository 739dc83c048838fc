//! Dynamic row decoding
//!
//! Rows are decoded into plain JSON records keyed by attribute name, driven
//! by the registered mapping's declared field types rather than by runtime
//! column introspection.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Number, Value};
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::descriptor::FieldType;
use crate::error::{AdapterError, AdapterResult};
use crate::schema::AttributeColumn;

/// A plain key-value record keyed by attribute names
pub type Record = Map<String, Value>;

/// Decode the given columns of a row into a [`Record`].
pub fn decode_row(row: &PgRow, columns: &[AttributeColumn]) -> AdapterResult<Record> {
    let mut record = Record::new();
    for column in columns {
        record.insert(column.attribute.clone(), decode_column(row, column)?);
    }
    Ok(record)
}

fn decode_column(row: &PgRow, column: &AttributeColumn) -> AdapterResult<Value> {
    let name = column.column.as_str();
    let value = match column.field_type {
        FieldType::Integer => row
            .try_get::<Option<i32>, _>(name)
            .map_err(|e| decode_error(name, &e))?
            .map(Value::from)
            .unwrap_or(Value::Null),
        FieldType::BigInt => row
            .try_get::<Option<i64>, _>(name)
            .map_err(|e| decode_error(name, &e))?
            .map(Value::from)
            .unwrap_or(Value::Null),
        FieldType::Double => row
            .try_get::<Option<f64>, _>(name)
            .map_err(|e| decode_error(name, &e))?
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        FieldType::Text => row
            .try_get::<Option<String>, _>(name)
            .map_err(|e| decode_error(name, &e))?
            .map(Value::String)
            .unwrap_or(Value::Null),
        FieldType::Boolean => row
            .try_get::<Option<bool>, _>(name)
            .map_err(|e| decode_error(name, &e))?
            .map(Value::Bool)
            .unwrap_or(Value::Null),
        FieldType::Uuid => row
            .try_get::<Option<uuid::Uuid>, _>(name)
            .map_err(|e| decode_error(name, &e))?
            .map(|id| Value::String(id.to_string()))
            .unwrap_or(Value::Null),
        FieldType::Timestamp => decode_timestamp(row, name)?,
        FieldType::Date => row
            .try_get::<Option<NaiveDate>, _>(name)
            .map_err(|e| decode_error(name, &e))?
            .map(|date| Value::String(date.format("%Y-%m-%d").to_string()))
            .unwrap_or(Value::Null),
        FieldType::Json => row
            .try_get::<Option<Value>, _>(name)
            .map_err(|e| decode_error(name, &e))?
            .unwrap_or(Value::Null),
    };
    Ok(value)
}

// TIMESTAMPTZ decodes as DateTime<Utc>; plain TIMESTAMP only as
// NaiveDateTime, so both are attempted.
fn decode_timestamp(row: &PgRow, name: &str) -> AdapterResult<Value> {
    if let Ok(value) = row.try_get::<Option<DateTime<Utc>>, _>(name) {
        return Ok(value
            .map(|ts| Value::String(ts.to_rfc3339()))
            .unwrap_or(Value::Null));
    }

    row.try_get::<Option<NaiveDateTime>, _>(name)
        .map_err(|e| decode_error(name, &e))
        .map(|value| {
            value
                .map(|ts| Value::String(ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()))
                .unwrap_or(Value::Null)
        })
}

fn decode_error(column: &str, err: &sqlx::Error) -> AdapterError {
    AdapterError::Serialization(format!("Failed to decode column '{}': {}", column, err))
}
