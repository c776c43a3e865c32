//! Composable predicate trees.
//!
//! A [`Spec`] is an immutable tree of [`Clause`] leaves joined by AND, OR
//! and NOT. Trees are built bottom-up by value: combining two specs moves
//! them into a new node that owns them exclusively, so a tree is always
//! finite and acyclic.
//!
//! Evaluation goes through the [`Specification`] trait, which is also the
//! seam for caller-defined predicates.

use std::fmt;
use std::ops;

use tracing::trace;

use crate::attr::{AttrValue, Attribute, Color, Size};
use crate::clause::Clause;
use crate::error::Result;
use crate::item::Attributed;

/// A predicate over items of type `T`.
///
/// Implementations must be pure: the answer depends only on the item, and
/// evaluation has no side effects and always terminates.
pub trait Specification<T: ?Sized> {
    /// Returns `true` if `item` satisfies this predicate.
    fn is_satisfied(&self, item: &T) -> bool;
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: Attributed + ?Sized> Specification<T> for Clause {
    fn is_satisfied(&self, item: &T) -> bool {
        self.matches(item.attribute(self.attribute()))
    }
}

/// A node in a predicate tree.
///
/// # Example
///
/// ```
/// use sift::{Color, Product, Size, Spec, Specification};
///
/// let car = Product::new("Car", Color::Blue, Size::Large);
///
/// let large_blue = Spec::size(Size::Large).and(Spec::color(Color::Blue));
/// assert!(large_blue.is_satisfied(&car));
///
/// let large_green = Spec::size(Size::Large) & Spec::color(Color::Green);
/// assert!(!large_green.is_satisfied(&car));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Spec {
    /// Tests one attribute.
    Leaf(Clause),
    /// Satisfied when every child is. Empty means always satisfied.
    And(Vec<Spec>),
    /// Satisfied when any child is. Empty means never satisfied.
    Or(Vec<Spec>),
    /// Satisfied when the child is not.
    Not(Box<Spec>),
}

impl Spec {
    // ========================================================================
    // Leaves
    // ========================================================================

    /// Attribute equals `value`.
    pub fn equals(value: impl Into<AttrValue>) -> Self {
        Spec::Leaf(Clause::equals(value))
    }

    /// Attribute differs from `value`.
    pub fn not_equals(value: impl Into<AttrValue>) -> Self {
        Spec::Leaf(Clause::not_equals(value))
    }

    /// Attribute is one of `values`.
    ///
    /// Fails with [`SiftError::AttributeMismatch`](crate::SiftError::AttributeMismatch)
    /// if a value belongs to another attribute.
    pub fn one_of<I, V>(attribute: Attribute, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<AttrValue>,
    {
        Clause::one_of(attribute, values).map(Spec::Leaf)
    }

    /// Color equals `color`.
    pub fn color(color: Color) -> Self {
        Spec::equals(color)
    }

    /// Size equals `size`.
    pub fn size(size: Size) -> Self {
        Spec::equals(size)
    }

    /// Parses a single clause, e.g. `color=green`, into a leaf.
    pub fn parse(text: &str) -> Result<Self> {
        Clause::parse(text).map(Spec::Leaf)
    }

    // ========================================================================
    // Composites
    // ========================================================================

    /// The tautology: satisfied by every item.
    pub fn always() -> Self {
        Spec::And(Vec::new())
    }

    /// The contradiction: satisfied by no item.
    pub fn never() -> Self {
        Spec::Or(Vec::new())
    }

    /// AND over all of `specs`.
    pub fn all(specs: impl IntoIterator<Item = Spec>) -> Self {
        Spec::And(specs.into_iter().collect())
    }

    /// OR over all of `specs`.
    pub fn any(specs: impl IntoIterator<Item = Spec>) -> Self {
        Spec::Or(specs.into_iter().collect())
    }

    /// Combines with `other` under AND.
    ///
    /// When `self` is already an AND node, `other` is appended to its
    /// children instead of nesting another level.
    pub fn and(self, other: Spec) -> Self {
        let children = match self {
            Spec::And(mut children) => {
                children.push(other);
                children
            }
            lhs => vec![lhs, other],
        };
        trace!(children = children.len(), "composed AND specification");
        Spec::And(children)
    }

    /// Combines with `other` under OR.
    ///
    /// When `self` is already an OR node, `other` is appended to its
    /// children instead of nesting another level.
    pub fn or(self, other: Spec) -> Self {
        let children = match self {
            Spec::Or(mut children) => {
                children.push(other);
                children
            }
            lhs => vec![lhs, other],
        };
        trace!(children = children.len(), "composed OR specification");
        Spec::Or(children)
    }

    /// Wraps in a NOT node.
    pub fn negate(self) -> Self {
        Spec::Not(Box::new(self))
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns `true` if this node is a single clause.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Spec::Leaf(_))
    }

    /// Number of levels in the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Spec::Leaf(_) => 1,
            Spec::And(children) | Spec::Or(children) => {
                1 + children.iter().map(Spec::depth).max().unwrap_or(0)
            }
            Spec::Not(child) => 1 + child.depth(),
        }
    }

    /// Number of clauses in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Spec::Leaf(_) => 1,
            Spec::And(children) | Spec::Or(children) => {
                children.iter().map(Spec::leaf_count).sum()
            }
            Spec::Not(child) => child.leaf_count(),
        }
    }

    fn is_composite(&self) -> bool {
        match self {
            Spec::And(children) | Spec::Or(children) => children.len() > 1,
            _ => false,
        }
    }
}

impl<T: Attributed + ?Sized> Specification<T> for Spec {
    fn is_satisfied(&self, item: &T) -> bool {
        match self {
            Spec::Leaf(clause) => clause.is_satisfied(item),
            Spec::And(children) => children.iter().all(|c| c.is_satisfied(item)),
            Spec::Or(children) => children.iter().any(|c| c.is_satisfied(item)),
            Spec::Not(child) => !child.is_satisfied(item),
        }
    }
}

impl From<Clause> for Spec {
    fn from(clause: Clause) -> Self {
        Spec::Leaf(clause)
    }
}

impl ops::BitAnd for Spec {
    type Output = Spec;

    fn bitand(self, rhs: Spec) -> Spec {
        self.and(rhs)
    }
}

impl ops::BitOr for Spec {
    type Output = Spec;

    fn bitor(self, rhs: Spec) -> Spec {
        self.or(rhs)
    }
}

impl ops::Not for Spec {
    type Output = Spec;

    fn not(self) -> Spec {
        self.negate()
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spec::Leaf(clause) => write!(f, "{}", clause),
            Spec::And(children) if children.is_empty() => f.write_str("TRUE"),
            Spec::Or(children) if children.is_empty() => f.write_str("FALSE"),
            Spec::And(children) => write_joined(f, children, " AND "),
            Spec::Or(children) => write_joined(f, children, " OR "),
            Spec::Not(child) if child.is_composite() => write!(f, "NOT ({})", child),
            Spec::Not(child) => write!(f, "NOT {}", child),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[Spec], sep: &str) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        if child.is_composite() {
            write!(f, "({})", child)?;
        } else {
            write!(f, "{}", child)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Product;
    use crate::SiftError;

    fn apple() -> Product {
        Product::new("Apple", Color::Red, Size::Small)
    }

    fn tree() -> Product {
        Product::new("Tree", Color::Green, Size::Medium)
    }

    fn car() -> Product {
        Product::new("Car", Color::Blue, Size::Large)
    }

    #[test]
    fn leaf_color() {
        let green = Spec::color(Color::Green);
        assert!(green.is_satisfied(&tree()));
        assert!(!green.is_satisfied(&apple()));
    }

    #[test]
    fn leaf_not_equals() {
        let not_small = Spec::not_equals(Size::Small);
        assert!(!not_small.is_satisfied(&apple()));
        assert!(not_small.is_satisfied(&car()));
    }

    #[test]
    fn leaf_one_of() {
        let warm = Spec::one_of(Attribute::Color, [Color::Red, Color::Green]).unwrap();
        assert!(warm.is_satisfied(&apple()));
        assert!(warm.is_satisfied(&tree()));
        assert!(!warm.is_satisfied(&car()));
    }

    #[test]
    fn one_of_mismatch_fails_at_construction() {
        let result = Spec::one_of(Attribute::Size, [Color::Red]);
        assert!(matches!(result, Err(SiftError::AttributeMismatch { .. })));
    }

    #[test]
    fn and_requires_all() {
        let large_blue = Spec::size(Size::Large).and(Spec::color(Color::Blue));
        assert!(large_blue.is_satisfied(&car()));

        let large_green = Spec::size(Size::Large).and(Spec::color(Color::Green));
        assert!(!large_green.is_satisfied(&car()));
        assert!(!large_green.is_satisfied(&tree()));
    }

    #[test]
    fn or_requires_any() {
        let red_or_large = Spec::color(Color::Red).or(Spec::size(Size::Large));
        assert!(red_or_large.is_satisfied(&apple()));
        assert!(red_or_large.is_satisfied(&car()));
        assert!(!red_or_large.is_satisfied(&tree()));
    }

    #[test]
    fn negate_inverts() {
        let not_green = Spec::color(Color::Green).negate();
        assert!(!not_green.is_satisfied(&tree()));
        assert!(not_green.is_satisfied(&car()));
    }

    #[test]
    fn operators_match_methods() {
        let a = Spec::color(Color::Red);
        let b = Spec::size(Size::Small);

        assert_eq!(a.clone() & b.clone(), a.clone().and(b.clone()));
        assert_eq!(a.clone() | b.clone(), a.clone().or(b.clone()));
        assert_eq!(!a.clone(), a.negate());
    }

    #[test]
    fn and_flattens_left_operand() {
        let spec = Spec::color(Color::Red)
            .and(Spec::size(Size::Small))
            .and(Spec::not_equals(Color::Blue));

        match &spec {
            Spec::And(children) => assert_eq!(children.len(), 3),
            other => panic!("expected AND node, got {:?}", other),
        }
        assert_eq!(spec.depth(), 2);
    }

    #[test]
    fn and_does_not_flatten_right_operand() {
        let right = Spec::size(Size::Small).and(Spec::color(Color::Red));
        let spec = Spec::color(Color::Red).and(right);

        match &spec {
            Spec::And(children) => assert_eq!(children.len(), 2),
            other => panic!("expected AND node, got {:?}", other),
        }
        assert_eq!(spec.depth(), 3);
    }

    #[test]
    fn or_flattens_left_operand() {
        let spec = Spec::color(Color::Red)
            .or(Spec::color(Color::Green))
            .or(Spec::color(Color::Blue));

        assert!(matches!(&spec, Spec::Or(children) if children.len() == 3));
    }

    #[test]
    fn always_and_never() {
        for item in [apple(), tree(), car()] {
            assert!(Spec::always().is_satisfied(&item));
            assert!(!Spec::never().is_satisfied(&item));
        }
    }

    #[test]
    fn single_child_and() {
        let spec = Spec::all([Spec::color(Color::Blue)]);
        assert!(spec.is_satisfied(&car()));
        assert!(!spec.is_satisfied(&apple()));
    }

    #[test]
    fn combining_leaves_operands_usable_via_clone() {
        let large = Spec::size(Size::Large);
        let blue = Spec::color(Color::Blue);
        let both = large.clone().and(blue.clone());

        assert_eq!(large, Spec::size(Size::Large));
        assert_eq!(blue, Spec::color(Color::Blue));
        assert_eq!(both.leaf_count(), 2);
    }

    #[test]
    fn clause_is_a_specification() {
        let clause = Clause::equals(Size::Medium);
        assert!(clause.is_satisfied(&tree()));
        assert!(!clause.is_satisfied(&car()));
    }

    #[test]
    fn boxed_and_borrowed_specifications() {
        let boxed: Box<dyn Specification<Product>> = Box::new(Spec::color(Color::Red));
        assert!(boxed.is_satisfied(&apple()));

        let spec = Spec::color(Color::Red);
        let by_ref: &Spec = &spec;
        assert!(Specification::<Product>::is_satisfied(&by_ref, &apple()));
    }

    #[test]
    fn custom_specification() {
        struct NameStartsWith(&'static str);

        impl Specification<Product> for NameStartsWith {
            fn is_satisfied(&self, item: &Product) -> bool {
                item.name().starts_with(self.0)
            }
        }

        assert!(NameStartsWith("Ca").is_satisfied(&car()));
        assert!(!NameStartsWith("Ca").is_satisfied(&tree()));
    }

    #[test]
    fn depth_and_leaf_count() {
        assert!(Spec::color(Color::Red).is_leaf());
        assert!(!Spec::always().is_leaf());
        assert_eq!(Spec::color(Color::Red).depth(), 1);
        assert_eq!(Spec::always().depth(), 1);

        let spec = (Spec::color(Color::Red) | Spec::size(Size::Large)).negate();
        assert_eq!(spec.depth(), 3);
        assert_eq!(spec.leaf_count(), 2);
    }

    #[test]
    fn parse_leaf() {
        assert_eq!(Spec::parse("size=large").unwrap(), Spec::size(Size::Large));
        assert!(matches!(
            Spec::parse("size=enormous"),
            Err(SiftError::InvalidValue { .. })
        ));
    }

    #[test]
    fn display() {
        let spec = Spec::size(Size::Large).and(Spec::color(Color::Blue));
        assert_eq!(spec.to_string(), "size = large AND color = blue");

        let nested = Spec::color(Color::Red).and(Spec::size(Size::Small) | Spec::size(Size::Large));
        assert_eq!(
            nested.to_string(),
            "color = red AND (size = small OR size = large)"
        );

        assert_eq!(
            (!(Spec::color(Color::Red) & Spec::size(Size::Small))).to_string(),
            "NOT (color = red AND size = small)"
        );
        assert_eq!((!Spec::color(Color::Red)).to_string(), "NOT color = red");
        assert_eq!(Spec::always().to_string(), "TRUE");
        assert_eq!(Spec::never().to_string(), "FALSE");
    }
}
