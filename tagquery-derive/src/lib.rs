//! Derive macros for tagquery
//!
//! Provides `#[derive(Record)]`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod record;

/// Derive `Reflect` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// use tagquery::Record;
///
/// #[derive(Record)]
/// struct User {
///     #[record(db = "id")]
///     user_id: i64,
///     #[record(default = "lower")]
///     Name: String,
///     #[record(case = "upper")]
///     country: String,
///     #[record(skip)]
///     password_hash: Vec<u8>,
///     #[record(date = "now")]
///     created_at: Option<chrono::DateTime<chrono::Utc>>,
/// }
/// ```
///
/// # Attributes
///
/// - `#[record(db = "name")]` - Explicit column name
/// - `#[record(skip)]` - Leave the field out; its type need not implement `Reflect`
/// - `#[record(default = "lower" | "upper")]` - Case the field name when no `db` is given
/// - `#[record(case = "lower" | "upper")]` - Case the field's value
/// - `#[record(date = "now" | "CURRENT_TIMESTAMP")]` - Bind a timestamp instead of the value
/// - `#[record(crate = "path")]` on the struct - Path to the `tagquery` crate
///
/// Every field that is not skipped must implement `Reflect`. Fields whose type
/// derives `Record` are treated as nested and left out of the column set;
/// nested types that do not derive it need `#[record(skip)]`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
