//! Field extraction: record value to ordered (column, value) pairs

use chrono::{DateTime, Utc};

use crate::reflect::{Reflect, Reflected};
use crate::schema::{DateTag, LetterCase};
use crate::{Error, Result, Value};

/// Ordered (column, value) pairs derived from one record.
///
/// Order is field declaration order; placeholder numbering in every builder
/// depends on it. Column names are not deduplicated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Model {
    /// Build a model from explicit pairs, bypassing extraction
    pub fn from_pairs<I, C, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: Into<String>,
        V: Into<Value>,
    {
        let mut model = Model::default();
        for (column, value) in pairs {
            model.push(column.into(), value.into());
        }
        model
    }

    fn push(&mut self, column: String, value: Value) {
        self.columns.push(column);
        self.values.push(value);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over (column, value) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<Value>) {
        (self.columns, self.values)
    }
}

/// Extract the column/value set of a record, reading the wall clock for
/// `date = "now"` fields.
///
/// # Examples
/// ```
/// use tagquery_core::{extract, Error};
///
/// let err = extract(&42i32).unwrap_err();
/// assert!(matches!(err, Error::NotAStruct { .. }));
/// ```
pub fn extract<T: Reflect + ?Sized>(record: &T) -> Result<Model> {
    extract_at(record, Utc::now())
}

/// Extract with an explicit `now` for `date = "now"` fields
pub fn extract_at<T: Reflect + ?Sized>(record: &T, now: DateTime<Utc>) -> Result<Model> {
    let (schema, fields) = match record.reflect() {
        Reflected::Struct { schema, fields } => (schema, fields),
        Reflected::Scalar(_) | Reflected::Opaque => return Err(Error::not_a_struct::<T>()),
    };

    if schema.fields.len() != fields.len() {
        return Err(Error::invalid_query(format!(
            "record `{}` reflected {} fields but declares {}",
            schema.name,
            fields.len(),
            schema.fields.len()
        )));
    }

    let mut model = Model::default();
    for (spec, reflected) in schema.fields.iter().zip(fields) {
        let value = match reflected {
            Reflected::Struct { .. } => {
                tracing::trace!(model = schema.name, field = spec.ident, "skipping nested record");
                continue;
            }
            _ if spec.skip => continue,
            Reflected::Scalar(value) => Some(value),
            Reflected::Opaque => None,
        };

        let column = spec.column_name().into_owned();

        if let Some(date) = spec.date {
            tracing::trace!(model = schema.name, field = spec.ident, %date, "injecting timestamp");
            model.push(column, date_value(date, now));
            continue;
        }

        // Only skip-tagged fields reflect as opaque
        let Some(value) = value else { continue };

        match spec.case {
            Some(case) => model.push(column, case_value(case, value)),
            None => model.push(column, value),
        }
    }

    tracing::trace!(model = schema.name, columns = model.len(), "extracted record");
    Ok(model)
}

fn date_value(date: DateTag, now: DateTime<Utc>) -> Value {
    match date {
        DateTag::Now => Value::Timestamp(now),
        // Bound as text; PostgreSQL reads 'now' as the transaction timestamp.
        DateTag::CurrentTimestamp => Value::String("now".to_string()),
    }
}

/// Case-transform the string form of a value. NULL stays NULL.
fn case_value(case: LetterCase, value: Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::String(s) => Value::String(case.apply(&s)),
        other => Value::String(case.apply(&other.to_string())),
    }
}

/// Helper shared by the builders' tests
#[cfg(test)]
pub(crate) fn model(pairs: &[(&str, Value)]) -> Model {
    Model::from_pairs(pairs.iter().cloned())
}
