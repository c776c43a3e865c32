//! Categorical attribute types.
//!
//! Every attribute an item exposes is a closed enumeration. [`Attribute`]
//! names the attribute, [`AttrValue`] carries one member of it. Because the
//! enumerations are closed, a value built from the Rust enums can never be
//! invalid; parsing from text fails fast with [`SiftError::InvalidValue`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};

/// Item color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// All colors, in declaration order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Returns the lowercase name of this color.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SiftError::InvalidValue {
                attribute: Attribute::Color.as_str(),
                value: s.to_string(),
            })
    }
}

/// Item size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// All sizes, in declaration order.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Returns the lowercase name of this size.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        Size::ALL
            .into_iter()
            .find(|sz| sz.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SiftError::InvalidValue {
                attribute: Attribute::Size.as_str(),
                value: s.to_string(),
            })
    }
}

/// Names one attribute of the item schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Color,
    Size,
}

impl Attribute {
    /// Every attribute in the schema.
    pub const ALL: [Attribute; 2] = [Attribute::Color, Attribute::Size];

    /// Returns the attribute name as used in clause text.
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Color => "color",
            Attribute::Size => "size",
        }
    }

    /// Returns every member of this attribute's enumeration.
    pub fn values(self) -> Vec<AttrValue> {
        match self {
            Attribute::Color => Color::ALL.into_iter().map(AttrValue::Color).collect(),
            Attribute::Size => Size::ALL.into_iter().map(AttrValue::Size).collect(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SiftError::UnknownAttribute(s.to_string()))
    }
}

/// One member of some attribute's enumeration.
///
/// The variant determines which attribute the value belongs to, so a value
/// can be compared against an item without naming the attribute separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrValue {
    Color(Color),
    Size(Size),
}

impl AttrValue {
    /// Parses `raw` as a member of `attribute`'s enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::InvalidValue`] if `raw` is not a member.
    pub fn parse(attribute: Attribute, raw: &str) -> Result<Self> {
        match attribute {
            Attribute::Color => raw.parse().map(AttrValue::Color),
            Attribute::Size => raw.parse().map(AttrValue::Size),
        }
    }

    /// Returns the attribute this value belongs to.
    pub fn attribute(self) -> Attribute {
        match self {
            AttrValue::Color(_) => Attribute::Color,
            AttrValue::Size(_) => Attribute::Size,
        }
    }

    /// Returns the lowercase name of the value.
    pub fn as_str(self) -> &'static str {
        match self {
            AttrValue::Color(c) => c.as_str(),
            AttrValue::Size(s) => s.as_str(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Color> for AttrValue {
    fn from(c: Color) -> Self {
        AttrValue::Color(c)
    }
}

impl From<Size> for AttrValue {
    fn from(s: Size) -> Self {
        AttrValue::Size(s)
    }
}
