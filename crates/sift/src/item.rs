//! Items that predicates can be evaluated against.
//!
//! This module provides the [`Attributed`] trait, which gives predicates
//! total access to an item's categorical attributes, and [`Product`], the
//! concrete record used throughout the crate and the demo CLI.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attr::{AttrValue, Attribute, Color, Size};

/// Trait for types that expose the categorical attribute schema.
///
/// Access is total: every [`Attribute`] has a value on every item, so
/// predicate evaluation can never fail.
///
/// # Example
///
/// ```
/// use sift::{AttrValue, Attribute, Attributed, Color, Size};
///
/// struct Marble {
///     color: Color,
/// }
///
/// impl Attributed for Marble {
///     fn attribute(&self, attr: Attribute) -> AttrValue {
///         match attr {
///             Attribute::Color => AttrValue::Color(self.color),
///             Attribute::Size => AttrValue::Size(Size::Small),
///         }
///     }
/// }
///
/// let m = Marble { color: Color::Blue };
/// assert_eq!(m.attribute(Attribute::Color), AttrValue::Color(Color::Blue));
/// ```
pub trait Attributed {
    /// Returns the value of `attr` for this item.
    fn attribute(&self, attr: Attribute) -> AttrValue;
}

impl<T: Attributed + ?Sized> Attributed for &T {
    fn attribute(&self, attr: Attribute) -> AttrValue {
        (**self).attribute(attr)
    }
}

/// A named product with a color and a size.
///
/// Fields are private so a product cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    color: Color,
    size: Size,
}

impl Product {
    /// Creates a new product.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Product {
            name: name.into(),
            color,
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Attributed for Product {
    fn attribute(&self, attr: Attribute) -> AttrValue {
        match attr {
            Attribute::Color => AttrValue::Color(self.color),
            Attribute::Size => AttrValue::Size(self.size),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}
