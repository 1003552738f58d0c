//! tagquery - build PostgreSQL query strings from tagged Rust structs
//!
//! Derive [`Record`] on a struct, tag its fields, and generate
//! SELECT/INSERT/UPDATE/DELETE/WHERE text with `$N` placeholders and the
//! matching bound values. Execution is left to whichever driver you use.
//!
//! ```
//! use tagquery::prelude::*;
//!
//! #[derive(Record)]
//! struct User {
//!     id: i64,
//!     #[record(default = "lower")]
//!     Name: String,
//!     #[record(case = "lower")]
//!     email: String,
//!     #[record(skip)]
//!     session: Vec<u8>,
//! }
//!
//! let user = User {
//!     id: 1,
//!     Name: "Ann".into(),
//!     email: "Ann@Example.com".into(),
//!     session: Vec::new(),
//! };
//!
//! let query = extract(&user)?.insert("users")?;
//! assert_eq!(query.sql(), "INSERT INTO users (id, name, email) VALUES ($1, $2, $3)");
//! assert_eq!(query.params()[2], Value::from("ann@example.com"));
//! # Ok::<(), tagquery::Error>(())
//! ```
//!
//! # Rejected definitions
//!
//! Tag values are checked when the derive expands. Each of these fails to
//! compile:
//!
//! ```compile_fail
//! #[derive(tagquery::Record)]
//! struct Title {
//!     #[record(case = "title")]
//!     name: String,
//! }
//! ```
//!
//! ```compile_fail
//! #[derive(tagquery::Record)]
//! struct Event {
//!     #[record(date = "today")]
//!     at: Option<chrono::DateTime<chrono::Utc>>,
//! }
//! ```
//!
//! ```compile_fail
//! #[derive(tagquery::Record)]
//! struct Bogus {
//!     #[record(bogus)]
//!     id: i64,
//! }
//! ```
//!
//! ```compile_fail
//! #[derive(tagquery::Record)]
//! struct EmptyColumn {
//!     #[record(db = "")]
//!     id: i64,
//! }
//! ```
//!
//! ```compile_fail
//! #[derive(tagquery::Record)]
//! enum Status {
//!     Active,
//!     Banned,
//! }
//! ```
//!
//! ```compile_fail
//! #[derive(tagquery::Record)]
//! struct Pair(i64, String);
//! ```
//!
//! ```compile_fail
//! struct Address {
//!     city: String,
//! }
//!
//! // Nested types that do not derive `Record` must be skipped
//! #[derive(tagquery::Record)]
//! struct User {
//!     id: i64,
//!     address: Address,
//! }
//! ```
//!
//! The same definitions compile once the tags are valid:
//!
//! ```
//! struct Address {
//!     city: String,
//! }
//!
//! #[derive(tagquery::Record)]
//! struct User {
//!     #[record(db = "user_id", case = "lower")]
//!     id: i64,
//!     #[record(skip)]
//!     address: Address,
//!     #[record(date = "CURRENT_TIMESTAMP")]
//!     at: Option<chrono::DateTime<chrono::Utc>>,
//! }
//! ```

pub use tagquery_core::*;

#[cfg(feature = "derive")]
pub use tagquery_derive::Record;

/// Common imports
pub mod prelude {
    pub use tagquery_core::{
        conversion, extract, insert_many, join_clause, op, Deferred, Error, JoinBuilder,
        JoinModel, Model, Operator, Query, QueryProvider, Reflect, Result, Value,
        WhereConnector,
    };

    #[cfg(feature = "derive")]
    pub use tagquery_derive::Record;
}
