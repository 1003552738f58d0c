//! UPDATE query generation
//!
//! Two numbering policies coexist on purpose:
//!
//! - [`update`] keeps each column's position in the full column list, so the
//!   placeholder that would have belonged to the primary key is missing
//!   (`SET name = $2, email = $3` when `id` came first). The returned params
//!   hold only the SET values, in order, so `params[0]` belongs to `$2` here;
//!   callers must remap them to those positions before binding.
//! - [`update_where`] renumbers from `$1` and appends the primary key value as
//!   the last parameter of the WHERE clause.

use super::common::{placeholder, Query};
use crate::{Error, Model, Result, Value};

/// `UPDATE <table> SET <column> = $<position>, ...` without the primary key
pub(crate) fn update(model: &Model, table: &str, primary: &str) -> Result<Query> {
    let mut set_parts = Vec::new();
    let mut params = Vec::new();

    for (i, (column, value)) in model.iter().enumerate() {
        if column == primary {
            continue;
        }
        set_parts.push(format!("{} = {}", column, placeholder(i + 1)));
        params.push(value.clone());
    }

    if set_parts.is_empty() {
        return Err(Error::invalid_query("UPDATE requires SET clauses"));
    }

    let mut sql = String::new();

    // UPDATE clause
    sql.push_str("UPDATE ");
    sql.push_str(table);

    // SET clause
    sql.push_str(" SET ");
    sql.push_str(&set_parts.join(", "));

    Ok(Query::new(sql, params))
}

/// `UPDATE <table> SET <column> = $1, ... WHERE <primary> = $n`
pub(crate) fn update_where(
    model: &Model,
    table: &str,
    primary: &str,
    primary_value: Value,
) -> Result<Query> {
    let mut set_parts = Vec::new();
    let mut params = Vec::new();

    for (column, value) in model.iter().filter(|(column, _)| *column != primary) {
        params.push(value.clone());
        set_parts.push(format!("{} = {}", column, placeholder(params.len())));
    }

    if set_parts.is_empty() {
        return Err(Error::invalid_query("UPDATE requires SET clauses"));
    }

    params.push(primary_value);

    let mut sql = String::new();

    // UPDATE clause
    sql.push_str("UPDATE ");
    sql.push_str(table);

    // SET clause
    sql.push_str(" SET ");
    sql.push_str(&set_parts.join(", "));

    // WHERE clause
    sql.push_str(" WHERE ");
    sql.push_str(primary);
    sql.push_str(" = ");
    sql.push_str(&placeholder(params.len()));

    Ok(Query::new(sql, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::model;
    use pretty_assertions::assert_eq;

    fn user() -> Model {
        model(&[
            ("id", Value::I64(7)),
            ("name", Value::from("Ann")),
            ("email", Value::from("ann@example.com")),
        ])
    }

    #[test]
    fn test_update_excludes_primary_key() {
        let query = update(&user(), "users", "id").unwrap();
        assert_eq!(query.sql(), "UPDATE users SET name = $2, email = $3");
        assert_eq!(
            query.params(),
            &[Value::from("Ann"), Value::from("ann@example.com")]
        );
    }

    #[test]
    fn test_update_keeps_original_positions() {
        let query = update(&user(), "users", "name").unwrap();
        assert_eq!(query.sql(), "UPDATE users SET id = $1, email = $3");
        // Params skip the primary, so `$3` is bound by the second entry
        assert_eq!(query.params().len(), 2);
        assert_eq!(query.params()[1], Value::from("ann@example.com"));
    }

    #[test]
    fn test_update_without_primary_in_model() {
        let query = update(&user(), "users", "uuid").unwrap();
        assert_eq!(query.sql(), "UPDATE users SET id = $1, name = $2, email = $3");
        assert_eq!(query.params().len(), 3);
    }

    #[test]
    fn test_update_without_set_fails() {
        let only_id = model(&[("id", Value::I64(7))]);
        let result = update(&only_id, "users", "id");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("UPDATE requires SET clauses"));
    }

    #[test]
    fn test_update_where_renumbers() {
        let query = update_where(&user(), "users", "id", Value::I64(42)).unwrap();
        assert_eq!(
            query.sql(),
            "UPDATE users SET name = $1, email = $2 WHERE id = $3"
        );
        assert_eq!(
            query.params(),
            &[
                Value::from("Ann"),
                Value::from("ann@example.com"),
                Value::I64(42),
            ]
        );
        assert_eq!(query.placeholder_count(), query.params().len());
    }

    #[test]
    fn test_update_where_primary_in_middle() {
        let query = update_where(&user(), "users", "name", Value::from("Bob")).unwrap();
        assert_eq!(
            query.sql(),
            "UPDATE users SET id = $1, email = $2 WHERE name = $3"
        );
        assert_eq!(query.params()[2], Value::from("Bob"));
    }

    #[test]
    fn test_update_where_without_set_fails() {
        let only_id = model(&[("id", Value::I64(7))]);
        assert!(update_where(&only_id, "users", "id", Value::I64(7)).is_err());
    }
}
