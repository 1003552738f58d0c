//! Common types and traits shared across all query builders

use std::fmt::{self, Display};

use crate::{Operator, Result, Value};

/// Generated SQL text plus the values bound to its `$N` placeholders.
///
/// `params[i]` is bound to `$i+1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    sql: String,
    params: Vec<Value>,
}

impl Query {
    pub(crate) fn new(sql: String, params: Vec<Value>) -> Self {
        tracing::debug!(sql = %sql, params = params.len(), "generated query");
        Self { sql, params }
    }

    /// The SQL text
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bound values, in placeholder order
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Number of distinct `$N` placeholders in the SQL text
    pub fn placeholder_count(&self) -> usize {
        let mut seen = std::collections::BTreeSet::new();
        let mut rest = self.sql.as_str();
        while let Some(pos) = rest.find('$') {
            rest = &rest[pos + 1..];
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if let Ok(n) = rest[..digits].parse::<usize>() {
                seen.insert(n);
            }
            rest = &rest[digits..];
        }
        seen.len()
    }

    /// Split into the SQL text and bound values for handing to a driver
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// How WHERE conditions are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhereConnector {
    And,
    Or,
}

impl WhereConnector {
    pub fn as_str(&self) -> &'static str {
        match self {
            WhereConnector::And => "AND",
            WhereConnector::Or => "OR",
        }
    }
}

impl Display for WhereConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query-generating operations over a column/value set.
///
/// Implemented by [`Model`](crate::Model) and by the deferred carrier
/// [`Deferred<Model>`](crate::Deferred), which fails every call with the error
/// captured at construction.
pub trait QueryProvider {
    /// `SELECT <columns> FROM <table>`
    fn view_all(&self, table: &str) -> Result<Query>;

    /// `INSERT INTO <table> (<columns>) VALUES ($1, ...)`
    fn insert(&self, table: &str) -> Result<Query>;

    /// `DELETE FROM <table>`, without a WHERE clause
    fn delete(&self, table: &str) -> Result<Query>;

    /// `UPDATE <table> SET <column> = $i, ...` over every column except
    /// `primary`. `$i` is the column's position in the full column list, so
    /// numbering has a gap where `primary` sat.
    fn update(&self, table: &str, primary: &str) -> Result<Query>;

    /// `UPDATE <table> SET <column> = $1, ... WHERE <primary> = $n` with
    /// placeholders renumbered contiguously and `primary_value` bound last.
    fn update_where(&self, table: &str, primary: &str, primary_value: Value) -> Result<Query>;

    /// ` WHERE <column> <operator> $1 <connector> ...` over every column
    fn where_clause(&self, operator: Operator, connector: WhereConnector) -> Result<Query>;
}

/// `$n`
pub(crate) fn placeholder(n: usize) -> String {
    format!("${n}")
}

/// `$start, $start+1, ...` for `count` placeholders
pub(crate) fn placeholder_list(start: usize, count: usize) -> String {
    (start..start + count)
        .map(placeholder)
        .collect::<Vec<_>>()
        .join(", ")
}
