//! DELETE query generation

use super::common::Query;
use crate::Result;

/// `DELETE FROM <table>`.
///
/// No WHERE clause is generated; combine with
/// [`QueryProvider::where_clause`](super::QueryProvider::where_clause) to
/// restrict the rows affected.
pub(crate) fn delete(table: &str) -> Result<Query> {
    let mut sql = String::new();

    // DELETE FROM clause
    sql.push_str("DELETE FROM ");
    sql.push_str(table);

    Ok(Query::new(sql, Vec::new()))
}
