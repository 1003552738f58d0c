//! SQL comparison operators for WHERE clauses

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Error, Result};

/// Type-safe SQL operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator(&'static str);

impl Operator {
    pub const GT: Self = Operator(">");
    pub const LT: Self = Operator("<");
    pub const EQ: Self = Operator("=");
    pub const NEQ: Self = Operator("!=");
    pub const GTE: Self = Operator(">=");
    pub const LTE: Self = Operator("<=");
    pub const LIKE: Self = Operator("LIKE");
    pub const ILIKE: Self = Operator("ILIKE");
    pub const IN: Self = Operator("IN");
    pub const NOT_IN: Self = Operator("NOT IN");
    pub const IS_NULL: Self = Operator("IS NULL");
    pub const IS_NOT_NULL: Self = Operator("IS NOT NULL");

    /// Create a custom operator for database-specific operations
    ///
    /// # Examples
    /// ```
    /// use tagquery_core::Operator;
    ///
    /// // PostgreSQL full-text search
    /// let fts_op = Operator::custom("@@");
    ///
    /// // JSONB containment
    /// let contains_op = Operator::custom("@>");
    /// ```
    pub const fn custom(op: &'static str) -> Self {
        Operator(op)
    }

    /// Parse one of the built-in operators from its SQL spelling.
    ///
    /// Keywords are case-insensitive. Use [`Operator::custom`] for anything else.
    pub fn parse(s: &str) -> Result<Self> {
        let op = match s.trim().to_ascii_uppercase().as_str() {
            ">" => Operator::GT,
            "<" => Operator::LT,
            "=" => Operator::EQ,
            "!=" | "<>" => Operator::NEQ,
            ">=" => Operator::GTE,
            "<=" => Operator::LTE,
            "LIKE" => Operator::LIKE,
            "ILIKE" => Operator::ILIKE,
            "IN" => Operator::IN,
            "NOT IN" => Operator::NOT_IN,
            "IS NULL" => Operator::IS_NULL,
            "IS NOT NULL" => Operator::IS_NOT_NULL,
            _ => {
                return Err(Error::invalid_query(format!(
                    "Unknown operator '{s}'. Use the Operator constants or Operator::custom for custom operators."
                )))
            }
        };
        Ok(op)
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &str {
        self.0
    }

    /// Check the operator can compare a column against a single `$N` value
    pub fn validate(&self) -> Result<()> {
        if self.0.trim().is_empty() {
            return Err(Error::invalid_query("operator must not be empty"));
        }
        if *self == Operator::IS_NULL || *self == Operator::IS_NOT_NULL {
            return Err(Error::invalid_query(format!(
                "operator '{}' takes no value and cannot be bound to a placeholder",
                self.0
            )));
        }
        Ok(())
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operator::parse(s)
    }
}

impl TryFrom<&str> for Operator {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Operator::parse(s)
    }
}

/// Convenience module for operator constants
pub mod op {
    use super::Operator;

    pub const GT: Operator = Operator::GT;
    pub const LT: Operator = Operator::LT;
    pub const EQ: Operator = Operator::EQ;
    pub const NEQ: Operator = Operator::NEQ;
    pub const GTE: Operator = Operator::GTE;
    pub const LTE: Operator = Operator::LTE;
    pub const LIKE: Operator = Operator::LIKE;
    pub const ILIKE: Operator = Operator::ILIKE;
    pub const IN: Operator = Operator::IN;
    pub const NOT_IN: Operator = Operator::NOT_IN;
    pub const IS_NULL: Operator = Operator::IS_NULL;
    pub const IS_NOT_NULL: Operator = Operator::IS_NOT_NULL;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_constants() {
        assert_eq!(Operator::GT.as_str(), ">");
        assert_eq!(Operator::LT.as_str(), "<");
        assert_eq!(Operator::EQ.as_str(), "=");
        assert_eq!(Operator::LIKE.as_str(), "LIKE");
    }

    #[test]
    fn test_custom_operator() {
        let custom_op = Operator::custom("@@");
        assert_eq!(custom_op.as_str(), "@@");
        assert!(custom_op.validate().is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Operator::GT), ">");
        assert_eq!(format!("{}", Operator::LIKE), "LIKE");
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(Operator::parse(">").unwrap(), Operator::GT);
        assert_eq!(Operator::parse("LIKE").unwrap(), Operator::LIKE);
        assert_eq!(Operator::parse("like").unwrap(), Operator::LIKE);
        assert_eq!(">=".parse::<Operator>().unwrap(), Operator::GTE);
        assert_eq!(Operator::try_from("<>").unwrap(), Operator::NEQ);
        assert_eq!(Operator::parse("is not null").unwrap(), Operator::IS_NOT_NULL);
    }

    #[test]
    fn test_invalid_string_conversion() {
        let err = Operator::parse("INVALID").unwrap_err();
        assert!(err.to_string().contains("Unknown operator 'INVALID'"));
    }

    #[test]
    fn test_validate() {
        assert!(Operator::EQ.validate().is_ok());
        assert!(Operator::IS_NULL.validate().is_err());
        assert!(Operator::custom(" ").validate().is_err());
    }
}
