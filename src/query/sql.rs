//! SQL generation with parameter placeholders

use serde_json::Value;

use super::builder::QueryBuilder;
use super::types::*;

impl QueryBuilder {
    /// Generate SQL with `$n` placeholders and the parameters to bind
    pub fn to_sql_with_params(&self) -> (String, Vec<Value>) {
        match self.query_type {
            QueryType::Select => self.build_select_sql(),
            QueryType::Insert => self.build_insert_sql(),
            QueryType::Update => self.build_update_sql(),
            QueryType::Delete => self.build_delete_sql(),
        }
    }

    fn build_select_sql(&self) -> (String, Vec<Value>) {
        let mut sql = String::from("SELECT ");
        let mut params = Vec::new();

        if self.select_fields.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.select_fields.join(", "));
        }

        if let Some(table) = &self.table {
            sql.push_str(" FROM ");
            sql.push_str(table);
        }

        self.build_where_clause(&mut sql, &mut params);
        (sql, params)
    }

    fn build_insert_sql(&self) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut params = Vec::new();

        if let Some(table) = &self.table {
            if self.set_clauses.is_empty() {
                sql.push_str(&format!("INSERT INTO {} DEFAULT VALUES", table));
            } else {
                let columns: Vec<&str> = self
                    .set_clauses
                    .iter()
                    .map(|clause| clause.column.as_str())
                    .collect();
                let placeholders: Vec<String> =
                    (1..=self.set_clauses.len()).map(|i| format!("${}", i)).collect();

                sql.push_str(&format!(
                    "INSERT INTO {} ({}) VALUES ({})",
                    table,
                    columns.join(", "),
                    placeholders.join(", ")
                ));
                params.extend(self.set_clauses.iter().map(|clause| clause.value.clone()));
            }

            if self.returning {
                sql.push_str(" RETURNING *");
            }
        }

        (sql, params)
    }

    fn build_update_sql(&self) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut params = Vec::new();

        if let Some(table) = &self.table {
            sql.push_str(&format!("UPDATE {} SET ", table));
            for (i, clause) in self.set_clauses.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(&format!("{} = ${}", clause.column, params.len() + 1));
                params.push(clause.value.clone());
            }

            self.build_where_clause(&mut sql, &mut params);
        }

        (sql, params)
    }

    fn build_delete_sql(&self) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut params = Vec::new();

        if let Some(table) = &self.table {
            sql.push_str(&format!("DELETE FROM {}", table));
            self.build_where_clause(&mut sql, &mut params);
        }

        (sql, params)
    }

    fn build_where_clause(&self, sql: &mut String, params: &mut Vec<Value>) {
        if self.where_conditions.is_empty() {
            return;
        }

        sql.push_str(" WHERE ");
        for (i, condition) in self.where_conditions.iter().enumerate() {
            if i > 0 {
                sql.push_str(" AND ");
            }

            match condition.operator {
                QueryOperator::In => {
                    if condition.values.is_empty() {
                        // IN over an empty set matches nothing
                        sql.push_str("FALSE");
                    } else {
                        sql.push_str(&format!("{} {} (", condition.column, condition.operator));
                        for (j, value) in condition.values.iter().enumerate() {
                            if j > 0 {
                                sql.push_str(", ");
                            }
                            sql.push_str(&format!("${}", params.len() + 1));
                            params.push(value.clone());
                        }
                        sql.push(')');
                    }
                }
                QueryOperator::Equal => match &condition.value {
                    Some(Value::Null) | None => {
                        sql.push_str(&format!("{} IS NULL", condition.column));
                    }
                    Some(value) => {
                        sql.push_str(&format!(
                            "{} {} ${}",
                            condition.column,
                            condition.operator,
                            params.len() + 1
                        ));
                        params.push(value.clone());
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_all_sql() {
        let (sql, params) = QueryBuilder::new().from("customer").to_sql_with_params();
        assert_eq!(sql, "SELECT * FROM customer");
        assert!(params.is_empty());
    }

    #[test]
    fn test_select_projection_with_conditions() {
        let (sql, params) = QueryBuilder::new()
            .from("customer")
            .select_column("name")
            .select_column("active")
            .where_eq("active", true)
            .where_eq("city_id", 3)
            .to_sql_with_params();

        assert_eq!(
            sql,
            "SELECT name, active FROM customer WHERE active = $1 AND city_id = $2"
        );
        assert_eq!(params, vec![json!(true), json!(3)]);
    }

    #[test]
    fn test_select_null_criterion_becomes_is_null() {
        let (sql, params) = QueryBuilder::new()
            .from("customer")
            .where_eq("deleted_reason", Value::Null)
            .to_sql_with_params();

        assert_eq!(sql, "SELECT * FROM customer WHERE deleted_reason IS NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn test_insert_sql_with_returning() {
        let (sql, params) = QueryBuilder::insert_into("customer")
            .set("first_name", "Ana")
            .set("active", true)
            .returning_all()
            .to_sql_with_params();

        assert_eq!(
            sql,
            "INSERT INTO customer (first_name, active) VALUES ($1, $2) RETURNING *"
        );
        assert_eq!(params, vec![json!("Ana"), json!(true)]);
    }

    #[test]
    fn test_insert_without_values_uses_default_values() {
        let (sql, params) = QueryBuilder::insert_into("customer")
            .returning_all()
            .to_sql_with_params();
        assert_eq!(sql, "INSERT INTO customer DEFAULT VALUES RETURNING *");
        assert!(params.is_empty());
    }

    #[test]
    fn test_update_sql_binds_id_as_parameter() {
        let (sql, params) = QueryBuilder::update("customer")
            .set("first_name", "Bia")
            .where_eq("customer_id", 7)
            .to_sql_with_params();

        assert_eq!(
            sql,
            "UPDATE customer SET first_name = $1 WHERE customer_id = $2"
        );
        assert_eq!(params, vec![json!("Bia"), json!(7)]);
    }

    #[test]
    fn test_delete_sql() {
        let (sql, params) = QueryBuilder::delete_from("customer")
            .where_eq("customer_id", json!("abc"))
            .to_sql_with_params();

        assert_eq!(sql, "DELETE FROM customer WHERE customer_id = $1");
        assert_eq!(params, vec![json!("abc")]);
    }

    #[test]
    fn test_where_in_sql() {
        let (sql, params) = QueryBuilder::new()
            .from("city")
            .where_in("city_id", vec![json!(1), json!(2), json!(3)])
            .to_sql_with_params();

        assert_eq!(sql, "SELECT * FROM city WHERE city_id IN ($1, $2, $3)");
        assert_eq!(params, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_where_in_empty_set_matches_nothing() {
        let (sql, params) = QueryBuilder::new()
            .from("city")
            .where_in("city_id", Vec::new())
            .to_sql_with_params();

        assert_eq!(sql, "SELECT * FROM city WHERE FALSE");
        assert!(params.is_empty());
    }
}
