//! Leaf predicates.
//!
//! A [`Clause`] tests one attribute of an item: an attribute, an operator,
//! and the expected value (or set of values for [`Op::In`]). Clauses are
//! validated when they are built, so evaluation cannot fail.

use std::fmt;
use std::str::FromStr;

use crate::attr::{AttrValue, Attribute};
use crate::error::{Result, SiftError};
use crate::op::Op;

/// A single attribute test.
///
/// # Example
///
/// ```
/// use sift::{Clause, Color, Op};
///
/// let green = Clause::equals(Color::Green);
/// assert_eq!(green.op(), Op::Eq);
/// assert_eq!(green.to_string(), "color = green");
///
/// let parsed: Clause = "size!=large".parse().unwrap();
/// assert_eq!(parsed.to_string(), "size != large");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    attribute: Attribute,
    op: Op,
    value: ClauseValue,
}

/// Expected value stored in a clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClauseValue {
    /// Single value, for `Eq` and `Ne`.
    One(AttrValue),
    /// Set of values, for `In`.
    Set(Vec<AttrValue>),
}

impl Clause {
    /// Creates a clause, checking that the operator and value agree.
    ///
    /// # Errors
    ///
    /// - [`SiftError::InvalidOperator`] if a set is given to `Eq`/`Ne` or a
    ///   single value to `In`.
    /// - [`SiftError::AttributeMismatch`] if any value belongs to a different
    ///   attribute than `attribute`.
    pub fn new(attribute: Attribute, op: Op, value: ClauseValue) -> Result<Self> {
        match (&value, op.takes_set()) {
            (ClauseValue::One(_), true) => {
                return Err(SiftError::InvalidOperator {
                    op,
                    expects: "a set of values",
                })
            }
            (ClauseValue::Set(_), false) => {
                return Err(SiftError::InvalidOperator {
                    op,
                    expects: "a single value",
                })
            }
            _ => {}
        }

        let values: &[AttrValue] = match &value {
            ClauseValue::One(v) => std::slice::from_ref(v),
            ClauseValue::Set(set) => set,
        };
        if let Some(stray) = values.iter().find(|v| v.attribute() != attribute) {
            return Err(SiftError::AttributeMismatch {
                expected: attribute,
                actual: stray.attribute(),
                value: stray.to_string(),
            });
        }

        Ok(Clause {
            attribute,
            op,
            value,
        })
    }

    /// Creates an equality clause. The attribute is implied by the value.
    pub fn equals(value: impl Into<AttrValue>) -> Self {
        let value = value.into();
        Clause {
            attribute: value.attribute(),
            op: Op::Eq,
            value: ClauseValue::One(value),
        }
    }

    /// Creates a not-equal clause.
    pub fn not_equals(value: impl Into<AttrValue>) -> Self {
        let value = value.into();
        Clause {
            attribute: value.attribute(),
            op: Op::Ne,
            value: ClauseValue::One(value),
        }
    }

    /// Creates a set-membership clause.
    ///
    /// An empty set is allowed and matches nothing.
    pub fn one_of<I, V>(attribute: Attribute, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<AttrValue>,
    {
        let set = values.into_iter().map(Into::into).collect();
        Clause::new(attribute, Op::In, ClauseValue::Set(set))
    }

    /// Parses clause text. Same as [`str::parse`].
    pub fn parse(text: &str) -> Result<Self> {
        text.parse()
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn value(&self) -> &ClauseValue {
        &self.value
    }

    /// Evaluates this clause against the item's value for the clause's attribute.
    pub fn matches(&self, field: AttrValue) -> bool {
        match (&self.value, self.op) {
            (ClauseValue::One(expected), Op::Eq) => field == *expected,
            (ClauseValue::One(expected), Op::Ne) => field != *expected,
            (ClauseValue::Set(set), Op::In) => set.contains(&field),
            // unreachable through the validated constructors
            _ => false,
        }
    }
}

impl FromStr for Clause {
    type Err = SiftError;

    /// Accepts `attr=value`, `attr!=value` and `attr~a|b|c`.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let (attr, op, raw) = if let Some((a, v)) = text.split_once("!=") {
            (a, Op::Ne, v)
        } else if let Some((a, v)) = text.split_once('=') {
            (a, Op::Eq, v)
        } else if let Some((a, v)) = text.split_once('~') {
            (a, Op::In, v)
        } else {
            return Err(SiftError::MalformedClause(s.to_string()));
        };

        if attr.trim().is_empty() {
            return Err(SiftError::MalformedClause(s.to_string()));
        }
        let attribute: Attribute = attr.parse()?;

        let value = if op.takes_set() {
            let set = raw
                .split('|')
                .map(|part| AttrValue::parse(attribute, part))
                .collect::<Result<Vec<_>>>()?;
            ClauseValue::Set(set)
        } else {
            ClauseValue::One(AttrValue::parse(attribute, raw)?)
        };

        Clause::new(attribute, op, value)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.attribute, self.op.symbol())?;
        match &self.value {
            ClauseValue::One(v) => write!(f, "{}", v),
            ClauseValue::Set(set) => {
                let names: Vec<&str> = set.iter().map(|v| v.as_str()).collect();
                write!(f, "{{{}}}", names.join(", "))
            }
        }
    }
}
