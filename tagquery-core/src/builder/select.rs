//! SELECT query generation

use super::common::Query;
use crate::{Error, Model, Result};

/// `SELECT <columns> FROM <table>`, columns in declaration order
pub(crate) fn view_all(model: &Model, table: &str) -> Result<Query> {
    if model.is_empty() {
        return Err(Error::invalid_query("SELECT requires at least one column"));
    }

    let mut sql = String::new();

    // SELECT clause
    sql.push_str("SELECT ");
    sql.push_str(&model.columns().join(", "));

    // FROM clause
    sql.push_str(" FROM ");
    sql.push_str(table);

    Ok(Query::new(sql, Vec::new()))
}
