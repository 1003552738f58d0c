//! Error types for tagquery

use thiserror::Error;

/// The main error type for tagquery operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Extraction was handed something other than a tagged record
    #[error("parameter must be a struct, got `{type_name}`")]
    NotAStruct { type_name: &'static str },

    /// A join model has a field without an explicit `db` tag
    #[error("tag db in model `{model}` not found on field `{field}`")]
    MissingTag {
        model: &'static str,
        field: &'static str,
    },

    /// A join or batch was requested over zero models
    #[error("model is not found")]
    NoModel,

    /// Invalid query configuration
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },
}

/// Convenience Result type for tagquery operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new not-a-struct error for the given Rust type
    pub fn not_a_struct<T: ?Sized>() -> Self {
        Self::NotAStruct {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a new missing tag error
    pub fn missing_tag(model: &'static str, field: &'static str) -> Self {
        Self::MissingTag { model, field }
    }

    /// Create a new invalid query error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }
}
