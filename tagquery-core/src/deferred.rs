//! Deferred errors for fluent construct-then-call usage
//!
//! [`conversion`] never fails up front. The returned [`Deferred`] is either
//! `Ready` with a model or `Failed` with the extraction error, and every query
//! method on a `Failed` value returns that error without building anything.
//! Match on it, or call [`Deferred::into_result`], to fail early instead.

use crate::builder::{JoinBuilder, JoinModel, Query, QueryProvider, WhereConnector};
use crate::reflect::Reflect;
use crate::{extract, Error, Model, Operator, Result, Value};

/// A builder input, or the error that prevented building it
#[derive(Debug, Clone, PartialEq)]
pub enum Deferred<T> {
    Ready(T),
    Failed(Error),
}

impl<T> Deferred<T> {
    /// Borrow the ready value, or a clone of the carried error
    pub fn get(&self) -> Result<&T> {
        match self {
            Deferred::Ready(value) => Ok(value),
            Deferred::Failed(err) => Err(err.clone()),
        }
    }

    pub fn into_result(self) -> Result<T> {
        self.into()
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Deferred::Ready(_) => None,
            Deferred::Failed(err) => Some(err),
        }
    }
}

impl<T> From<Result<T>> for Deferred<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Deferred::Ready(value),
            Err(err) => Deferred::Failed(err),
        }
    }
}

impl<T> From<Deferred<T>> for Result<T> {
    fn from(deferred: Deferred<T>) -> Self {
        match deferred {
            Deferred::Ready(value) => Ok(value),
            Deferred::Failed(err) => Err(err),
        }
    }
}

/// Extract a record, deferring any failure to the first query method call.
///
/// # Examples
/// ```
/// use tagquery_core::{conversion, Error, QueryProvider};
///
/// let deferred = conversion(&"not a record");
/// assert!(matches!(deferred.insert("users"), Err(Error::NotAStruct { .. })));
/// assert!(matches!(deferred.delete("users"), Err(Error::NotAStruct { .. })));
/// ```
pub fn conversion<T: Reflect + ?Sized>(record: &T) -> Deferred<Model> {
    let deferred = Deferred::from(extract(record));
    if let Deferred::Failed(err) = &deferred {
        tracing::debug!(error = %err, "deferring extraction error");
    }
    deferred
}

impl QueryProvider for Deferred<Model> {
    fn view_all(&self, table: &str) -> Result<Query> {
        self.get()?.view_all(table)
    }

    fn insert(&self, table: &str) -> Result<Query> {
        self.get()?.insert(table)
    }

    fn delete(&self, table: &str) -> Result<Query> {
        self.get()?.delete(table)
    }

    fn update(&self, table: &str, primary: &str) -> Result<Query> {
        self.get()?.update(table, primary)
    }

    fn update_where(&self, table: &str, primary: &str, primary_value: Value) -> Result<Query> {
        self.get()?.update_where(table, primary, primary_value)
    }

    fn where_clause(&self, operator: Operator, connector: WhereConnector) -> Result<Query> {
        self.get()?.where_clause(operator, connector)
    }
}

impl JoinBuilder {
    /// Finish collecting models, deferring any failure to `select_all`
    pub fn build_deferred(self) -> Deferred<JoinModel> {
        self.build().into()
    }
}

impl Deferred<JoinModel> {
    /// See [`JoinModel::select_all`]
    pub fn select_all<T, O>(&self, tables: &[T], on: &[O]) -> Result<Query>
    where
        T: AsRef<str>,
        O: AsRef<str>,
    {
        self.get()?.select_all(tables, on)
    }
}
