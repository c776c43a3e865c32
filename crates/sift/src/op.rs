//! Comparison operators for leaf predicates.
//!
//! Attributes are closed enumerations, so only equality-style operators make
//! sense: there is no ordering between `red` and `blue`.

/// Comparison operator for a [`Clause`](crate::Clause).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Attribute equals the expected value.
    Eq,
    /// Attribute differs from the expected value.
    Ne,
    /// Attribute is one of the given set.
    In,
}

impl Op {
    /// Returns `true` if this operator compares against a set of values
    /// rather than a single one.
    pub fn takes_set(self) -> bool {
        matches!(self, Op::In)
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::In => "in",
        }
    }

    /// Returns the infix symbol used when rendering a clause.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::In => "in",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
