//! Multi-table SELECT over record schemas
//!
//! Only types are inspected, never values. Every field of every model must
//! carry an explicit `db` tag (usually table-qualified, e.g. `"u.id"`), and the
//! join predicates are caller-supplied SQL fragments.

use super::common::Query;
use crate::reflect::Reflect;
use crate::schema::Schema;
use crate::{Error, Result};

/// Collects record types for a [`JoinModel`], keeping the first failure
#[derive(Debug, Clone, Default)]
pub struct JoinBuilder {
    schemas: Vec<Schema>,
    error: Option<Error>,
}

impl JoinBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record type to the join
    pub fn model<T: Reflect>(mut self) -> Self {
        match T::schema() {
            Some(schema) => self.schemas.push(schema),
            None => {
                self.error.get_or_insert_with(Error::not_a_struct::<T>);
            }
        }
        self
    }

    pub fn build(self) -> Result<JoinModel> {
        match self.error {
            Some(err) => Err(err),
            None => JoinModel::from_schemas(&self.schemas),
        }
    }
}

/// Column lists of the joined models, in model order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinModel {
    tables: Vec<Vec<&'static str>>,
}

impl JoinModel {
    /// Collect the `db`-tagged columns of each schema.
    ///
    /// Fails with [`Error::NoModel`] on an empty list and
    /// [`Error::MissingTag`] on the first untagged field.
    pub fn from_schemas(schemas: &[Schema]) -> Result<Self> {
        if schemas.is_empty() {
            return Err(Error::NoModel);
        }

        let tables = schemas
            .iter()
            .map(Schema::tagged_columns)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tables })
    }

    /// All columns, flattened in model order
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.iter().flatten().copied()
    }

    /// `SELECT <all columns> FROM <tables> WHERE <on AND ...>`.
    ///
    /// The WHERE clause is left out when `on` is empty.
    pub fn select_all<T, O>(&self, tables: &[T], on: &[O]) -> Result<Query>
    where
        T: AsRef<str>,
        O: AsRef<str>,
    {
        if tables.is_empty() {
            return Err(Error::invalid_query("SELECT requires at least one table"));
        }

        let columns: Vec<&str> = self.columns().collect();
        if columns.is_empty() {
            return Err(Error::invalid_query("SELECT requires at least one column"));
        }

        let mut sql = String::new();

        // SELECT clause
        sql.push_str("SELECT ");
        sql.push_str(&columns.join(", "));

        // FROM clause
        sql.push_str(" FROM ");
        sql.push_str(&join_fragments(tables, ", "));

        // WHERE clause
        if !on.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&join_fragments(on, " AND "));
        }

        Ok(Query::new(sql, Vec::new()))
    }
}

fn join_fragments<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Build a [`JoinModel`] from record types.
///
/// # Examples
/// ```ignore
/// let join = join_clause!(User, Order)?;
/// let query = join.select_all(&["users u", "orders o"], &["u.id = o.user_id"])?;
/// ```
#[macro_export]
macro_rules! join_clause {
    ($($model:ty),* $(,)?) => {
        $crate::JoinBuilder::new()$(.model::<$model>())*.build()
    };
}
