//! Per-field tag metadata for records
//!
//! A [`Schema`] is the compile-time description of a record type: its name and
//! one [`FieldSpec`] per declared field, in declaration order. The
//! `#[derive(Record)]` macro emits these, but they are plain `const`-friendly
//! values and can be written by hand:
//!
//! ```
//! use tagquery_core::{DateTag, FieldSpec, LetterCase, Schema};
//!
//! const FIELDS: &[FieldSpec] = &[
//!     FieldSpec::new("id").db("user_id"),
//!     FieldSpec::new("Name").default_case(LetterCase::Lower),
//!     FieldSpec::new("created").date(DateTag::Now),
//! ];
//! let schema = Schema::new("User", FIELDS);
//! assert_eq!(schema.fields[1].column_name(), "name");
//! ```

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Error, Result};

/// Letter case applied by the `default` and `case` tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Lower,
    Upper,
}

impl LetterCase {
    /// Apply this case to a string
    pub fn apply(self, s: &str) -> String {
        match self {
            LetterCase::Lower => s.to_lowercase(),
            LetterCase::Upper => s.to_uppercase(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LetterCase::Lower => "lower",
            LetterCase::Upper => "upper",
        }
    }
}

/// Parses the `default`/`case` tag spellings for hand-written schemas built
/// from configuration or other runtime input.
///
/// ```
/// use tagquery_core::{FieldSpec, LetterCase};
///
/// let case: LetterCase = "upper".parse()?;
/// let spec = FieldSpec::new("code").value_case(case);
/// assert_eq!(spec.case, Some(LetterCase::Upper));
/// assert!("title".parse::<LetterCase>().is_err());
/// # Ok::<(), tagquery_core::Error>(())
/// ```
impl FromStr for LetterCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lower" => Ok(LetterCase::Lower),
            "upper" => Ok(LetterCase::Upper),
            other => Err(Error::invalid_query(format!(
                "unknown case '{other}', expected \"lower\" or \"upper\""
            ))),
        }
    }
}

impl Display for LetterCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value injected by the `date` tag in place of the field's own value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTag {
    /// Bind the wall-clock time at extraction
    Now,
    /// Bind the literal string `"now"`; PostgreSQL resolves it on input
    CurrentTimestamp,
}

impl DateTag {
    pub fn as_str(self) -> &'static str {
        match self {
            DateTag::Now => "now",
            DateTag::CurrentTimestamp => "CURRENT_TIMESTAMP",
        }
    }
}

/// Parses the `date` tag spellings for hand-written schemas.
///
/// ```
/// use tagquery_core::DateTag;
///
/// assert_eq!("CURRENT_TIMESTAMP".parse::<DateTag>()?, DateTag::CurrentTimestamp);
/// assert!("today".parse::<DateTag>().is_err());
/// # Ok::<(), tagquery_core::Error>(())
/// ```
impl FromStr for DateTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "now" => Ok(DateTag::Now),
            "CURRENT_TIMESTAMP" => Ok(DateTag::CurrentTimestamp),
            other => Err(Error::invalid_query(format!(
                "unknown date '{other}', expected \"now\" or \"CURRENT_TIMESTAMP\""
            ))),
        }
    }
}

impl Display for DateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags attached to a single record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The Rust identifier of the field
    pub ident: &'static str,
    /// Explicit column name
    pub db: Option<&'static str>,
    /// Exclude the field from extraction
    pub skip: bool,
    /// Case transform of `ident` when no `db` tag is given
    pub default: Option<LetterCase>,
    /// Case transform of the field's value
    pub case: Option<LetterCase>,
    /// Timestamp injected instead of the field's value
    pub date: Option<DateTag>,
}

impl FieldSpec {
    /// Untagged field
    pub const fn new(ident: &'static str) -> Self {
        Self {
            ident,
            db: None,
            skip: false,
            default: None,
            case: None,
            date: None,
        }
    }

    pub const fn db(mut self, column: &'static str) -> Self {
        self.db = Some(column);
        self
    }

    pub const fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    pub const fn default_case(mut self, case: LetterCase) -> Self {
        self.default = Some(case);
        self
    }

    pub const fn value_case(mut self, case: LetterCase) -> Self {
        self.case = Some(case);
        self
    }

    pub const fn date(mut self, date: DateTag) -> Self {
        self.date = Some(date);
        self
    }

    /// Resolve the column name: `db` tag, then `default` case of the
    /// identifier, then the identifier unchanged.
    pub fn column_name(&self) -> Cow<'static, str> {
        match (self.db, self.default) {
            (Some(db), _) => Cow::Borrowed(db),
            (None, Some(case)) => Cow::Owned(case.apply(self.ident)),
            (None, None) => Cow::Borrowed(self.ident),
        }
    }
}

/// Field layout of a record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Name of the record type
    pub name: &'static str,
    /// Fields in declaration order
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Column names taken strictly from `db` tags.
    ///
    /// Every declared field must carry one, skipped and nested fields included.
    pub fn tagged_columns(&self) -> Result<Vec<&'static str>> {
        self.fields
            .iter()
            .map(|field| {
                field
                    .db
                    .ok_or_else(|| Error::missing_tag(self.name, field.ident))
            })
            .collect()
    }
}
