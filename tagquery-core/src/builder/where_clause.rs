//! WHERE clause generation

use super::common::{placeholder, Query, WhereConnector};
use crate::{Error, Model, Operator, Result};

/// ` WHERE <column> <operator> $i <connector> ...`.
///
/// The same operator applies to every column and the same connector joins
/// every pair; per-column operators and mixed AND/OR are not expressible.
/// The text starts with a space so it can be appended to another statement.
/// `IN` and `NOT IN` compare against a single array parameter and render as
/// `= ANY($i)` and `<> ALL($i)`.
pub(crate) fn where_clause(
    model: &Model,
    operator: &Operator,
    connector: WhereConnector,
) -> Result<Query> {
    if model.is_empty() {
        return Err(Error::invalid_query("WHERE requires at least one column"));
    }
    operator.validate()?;

    let separator = format!(" {} ", connector.as_str());
    let conditions: Vec<String> = model
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| condition(column, operator, i + 1))
        .collect();

    let mut sql = String::new();
    sql.push_str(" WHERE ");
    sql.push_str(&conditions.join(&separator));

    Ok(Query::new(sql, model.values().to_vec()))
}

fn condition(column: &str, operator: &Operator, n: usize) -> String {
    if *operator == Operator::IN {
        format!("{} = ANY({})", column, placeholder(n))
    } else if *operator == Operator::NOT_IN {
        format!("{} <> ALL({})", column, placeholder(n))
    } else {
        format!("{} {} {}", column, operator.as_str(), placeholder(n))
    }
}
