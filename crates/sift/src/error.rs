//! Error types for the sift crate.

use thiserror::Error;

use crate::attr::Attribute;
use crate::op::Op;

/// Errors that can occur when building predicates.
///
/// Every variant is raised at construction time. Evaluating a predicate or
/// filtering a collection never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiftError {
    /// Value is not a member of the attribute's closed enumeration.
    #[error("invalid value '{value}' for attribute '{attribute}'")]
    InvalidValue {
        attribute: &'static str,
        value: String,
    },

    /// Attribute name is not part of the item schema.
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    /// A value belongs to a different attribute than the clause it was given to.
    #[error("value '{value}' belongs to attribute '{actual}', expected '{expected}'")]
    AttributeMismatch {
        expected: Attribute,
        actual: Attribute,
        value: String,
    },

    /// Operator used with the wrong number of values.
    #[error("operator '{op}' expects {expects}")]
    InvalidOperator { op: Op, expects: &'static str },

    /// Clause text could not be split into attribute, operator and value.
    #[error("malformed clause '{0}': expected attr=value, attr!=value or attr~a|b")]
    MalformedClause(String),
}

/// Result type for sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
