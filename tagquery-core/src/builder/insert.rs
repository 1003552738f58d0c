//! INSERT query generation

use super::common::{placeholder_list, Query};
use crate::reflect::Reflect;
use crate::{extract, Error, Model, Result};

/// `INSERT INTO <table> (<columns>) VALUES ($1, ...)`; `$i` binds the i-th
/// extracted value.
pub(crate) fn insert(model: &Model, table: &str) -> Result<Query> {
    if model.is_empty() {
        return Err(Error::invalid_query("INSERT requires columns and values"));
    }

    let mut sql = String::new();

    // INSERT INTO clause
    sql.push_str("INSERT INTO ");
    sql.push_str(table);

    // Columns
    sql.push_str(" (");
    sql.push_str(&model.columns().join(", "));
    sql.push(')');

    // VALUES clause
    sql.push_str(" VALUES (");
    sql.push_str(&placeholder_list(1, model.len()));
    sql.push(')');

    Ok(Query::new(sql, model.values().to_vec()))
}

/// Insert several records of one type in a single statement.
///
/// Placeholders run contiguously across rows:
/// `INSERT INTO t (a, b) VALUES ($1, $2), ($3, $4)`.
///
/// # Examples
/// ```
/// use tagquery_core::{insert_many, Error};
///
/// let records: [tagquery_core::Value; 0] = [];
/// assert_eq!(insert_many("users", &records), Err(Error::NoModel));
/// ```
pub fn insert_many<T: Reflect>(table: &str, records: &[T]) -> Result<Query> {
    let models = records
        .iter()
        .map(|record| extract(record))
        .collect::<Result<Vec<_>>>()?;
    insert_models(table, models)
}

pub(crate) fn insert_models(table: &str, models: Vec<Model>) -> Result<Query> {
    let mut models = models.into_iter();
    let first = models.next().ok_or(Error::NoModel)?;
    if first.is_empty() {
        return Err(Error::invalid_query("INSERT requires columns and values"));
    }

    let width = first.len();
    let (columns, mut params) = first.into_parts();
    let mut rows = vec![format!("({})", placeholder_list(1, width))];

    for model in models {
        if model.columns() != columns.as_slice() {
            return Err(Error::invalid_query(format!(
                "batch row {} has columns ({}) but the first row has ({})",
                rows.len() + 1,
                model.columns().join(", "),
                columns.join(", ")
            )));
        }
        rows.push(format!("({})", placeholder_list(params.len() + 1, width)));
        params.extend(model.into_parts().1);
    }

    let mut sql = String::new();

    // INSERT INTO clause
    sql.push_str("INSERT INTO ");
    sql.push_str(table);

    // Columns
    sql.push_str(" (");
    sql.push_str(&columns.join(", "));
    sql.push(')');

    // VALUES clause
    sql.push_str(" VALUES ");
    sql.push_str(&rows.join(", "));

    Ok(Query::new(sql, params))
}
