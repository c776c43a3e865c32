//! Sift - Composable specification predicates for filtering collections.
//!
//! Sift implements the specification pattern over items with closed,
//! categorical attributes. It provides:
//!
//! - Closed attribute enumerations ([`Color`], [`Size`]) that fail fast on bad input
//! - Leaf predicates ([`Clause`]) with `Eq`, `Ne` and `In` operators
//! - Predicate trees ([`Spec`]) composed with AND, OR and NOT
//! - A stateless, lazy [`Filter`] that preserves input order
//!
//! # Quick Start
//!
//! ```rust
//! use sift::{Color, Filter, Product, Size, Spec};
//!
//! let products = vec![
//!     Product::new("Apple", Color::Red, Size::Small),
//!     Product::new("Tree", Color::Green, Size::Medium),
//!     Product::new("Car", Color::Blue, Size::Large),
//! ];
//!
//! let large_blue = Spec::size(Size::Large).and(Spec::color(Color::Blue));
//!
//! let matches: Vec<&Product> = Filter.filter(&products, &large_blue).collect();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].name(), "Car");
//! ```
//!
//! # Evaluation Semantics
//!
//! ```text
//! Leaf(attr op v)  = item.attr op v
//! And([c1..cn])    = c1 ∧ .. ∧ cn      (empty = true)
//! Or([c1..cn])     = c1 ∨ .. ∨ cn      (empty = false)
//! Not(c)           = ¬c
//! ```
//!
//! Evaluation short-circuits left to right. Because predicates are pure,
//! child order never changes the result, only how many children are
//! evaluated.
//!
//! # Building From Text
//!
//! | Syntax | Operator |
//! |--------|----------|
//! | `color=green` | `Eq` |
//! | `size!=large` | `Ne` |
//! | `color~red\|blue` | `In` |
//!
//! Unknown values fail with [`SiftError::InvalidValue`] when the clause is
//! built, never during filtering.

mod attr;
mod clause;
mod error;
mod filter;
mod item;
mod op;
mod spec;

// Re-export public API
pub use attr::{AttrValue, Attribute, Color, Size};
pub use clause::{Clause, ClauseValue};
pub use error::{Result, SiftError};
pub use filter::{Filter, Filtered};
pub use item::{Attributed, Product};
pub use op::Op;
pub use spec::{Spec, Specification};
