//! tagquery core - struct-to-SQL mapping and query assembly
//!
//! Turns a tagged record into ordered (column, value) pairs and assembles
//! SELECT/INSERT/UPDATE/DELETE/WHERE/JOIN text with PostgreSQL `$N`
//! placeholders plus the matching parameter list. Nothing here talks to a
//! database; hand the resulting [`Query`] to your driver.

pub mod builder;
pub mod deferred;
pub mod error;
pub mod extract;
pub mod operator;
pub mod reflect;
pub mod schema;
pub mod value;

// Re-export main types
pub use builder::{
    insert_many, JoinBuilder, JoinModel, Query, QueryProvider, WhereConnector,
};
pub use deferred::{conversion, Deferred};
pub use error::{Error, Result};
pub use extract::{extract, extract_at, Model};
pub use operator::{op, Operator};
pub use reflect::{ArrayElement, Reflect, Reflected};
pub use schema::{DateTag, FieldSpec, LetterCase, Schema};
pub use value::Value;
