//! Applying specifications to collections.
//!
//! [`Filter::filter`] is lazy: it returns a [`Filtered`] iterator that only
//! evaluates the predicate for an item when that item is pulled. The eager
//! helpers (`count`, `find`, `filter_cloned`, ...) are built on the same
//! iterator.

use std::iter::FusedIterator;

use tracing::trace;

use crate::spec::Specification;

/// Stateless filter over any sequence of items.
///
/// # Example
///
/// ```
/// use sift::{Color, Filter, Product, Size, Spec};
///
/// let products = vec![
///     Product::new("Apple", Color::Red, Size::Small),
///     Product::new("Tree", Color::Green, Size::Medium),
///     Product::new("Car", Color::Blue, Size::Large),
/// ];
///
/// let green = Spec::color(Color::Green);
/// let names: Vec<&str> = Filter
///     .filter(&products, &green)
///     .map(|p| p.name())
///     .collect();
/// assert_eq!(names, ["Tree"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filter;

impl Filter {
    /// Creates a new filter.
    pub fn new() -> Self {
        Filter
    }

    /// Lazily yields the items satisfying `spec`, in their original order.
    ///
    /// Works over any [`IntoIterator`], including infinite ones.
    pub fn filter<I, S>(&self, items: I, spec: S) -> Filtered<I::IntoIter, S>
    where
        I: IntoIterator,
        S: Specification<I::Item>,
    {
        Filtered {
            items: items.into_iter(),
            spec,
            examined: 0,
            matched: 0,
        }
    }

    /// Filters a slice and clones the matching items.
    pub fn filter_cloned<T, S>(&self, items: &[T], spec: S) -> Vec<T>
    where
        T: Clone,
        S: Specification<T>,
    {
        items
            .iter()
            .filter(|item| spec.is_satisfied(*item))
            .cloned()
            .collect()
    }

    /// Removes the items of `items` that do not satisfy `spec`.
    pub fn retain<T, S>(&self, items: &mut Vec<T>, spec: S)
    where
        S: Specification<T>,
    {
        items.retain(|item| spec.is_satisfied(item));
    }

    /// Counts the items satisfying `spec`.
    pub fn count<I, S>(&self, items: I, spec: S) -> usize
    where
        I: IntoIterator,
        S: Specification<I::Item>,
    {
        self.filter(items, spec).count()
    }

    /// Returns `true` if any item satisfies `spec`.
    pub fn any<I, S>(&self, items: I, spec: S) -> bool
    where
        I: IntoIterator,
        S: Specification<I::Item>,
    {
        self.find(items, spec).is_some()
    }

    /// Returns `true` if every item satisfies `spec`. Vacuously true when empty.
    pub fn all<I, S>(&self, items: I, spec: S) -> bool
    where
        I: IntoIterator,
        S: Specification<I::Item>,
    {
        items.into_iter().all(|item| spec.is_satisfied(&item))
    }

    /// Returns the first item satisfying `spec`.
    pub fn find<I, S>(&self, items: I, spec: S) -> Option<I::Item>
    where
        I: IntoIterator,
        S: Specification<I::Item>,
    {
        self.filter(items, spec).next()
    }

    /// Returns the index of the first item satisfying `spec`.
    pub fn position<I, S>(&self, items: I, spec: S) -> Option<usize>
    where
        I: IntoIterator,
        S: Specification<I::Item>,
    {
        items.into_iter().position(|item| spec.is_satisfied(&item))
    }
}

/// Lazy iterator returned by [`Filter::filter`].
///
/// Single pass and forward only: each item of the underlying iterator is
/// examined at most once, when the consumer asks for the next match.
#[derive(Debug, Clone)]
pub struct Filtered<I, S> {
    items: I,
    spec: S,
    examined: usize,
    matched: usize,
}

impl<I, S> Filtered<I, S> {
    /// Number of items pulled from the source so far.
    pub fn examined(&self) -> usize {
        self.examined
    }

    /// Number of items yielded so far.
    pub fn matched(&self) -> usize {
        self.matched
    }
}

impl<I, S> Iterator for Filtered<I, S>
where
    I: Iterator,
    S: Specification<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.items.by_ref() {
            self.examined += 1;
            if self.spec.is_satisfied(&item) {
                self.matched += 1;
                trace!(index = self.examined - 1, "item matched");
                return Some(item);
            }
        }
        trace!(
            examined = self.examined,
            matched = self.matched,
            "filter exhausted"
        );
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.items.size_hint();
        (0, upper)
    }
}

impl<I, S> FusedIterator for Filtered<I, S>
where
    I: FusedIterator,
    S: Specification<I::Item>,
{
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::attr::{Color, Size};
    use crate::item::Product;
    use crate::spec::Spec;

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new("Apple", Color::Red, Size::Small),
            Product::new("Tree", Color::Green, Size::Medium),
            Product::new("Car", Color::Blue, Size::Large),
            Product::new("Cherry", Color::Red, Size::Small),
            Product::new("Lake", Color::Blue, Size::Large),
        ]
    }

    fn names<'a>(items: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
        items.into_iter().map(Product::name).collect()
    }

    #[test]
    fn filter_preserves_order() {
        let products = sample_products();
        let red = Spec::color(Color::Red);

        assert_eq!(names(Filter.filter(&products, &red)), ["Apple", "Cherry"]);
    }

    #[test]
    fn filter_owned_items() {
        let large = Spec::size(Size::Large);
        let owned: Vec<Product> = Filter.filter(sample_products(), &large).collect();

        assert_eq!(owned.len(), 2);
        assert_eq!(owned[0].name(), "Car");
    }

    #[test]
    fn filter_empty_input() {
        let products: Vec<Product> = Vec::new();
        let mut results = Filter.filter(&products, Spec::color(Color::Red));

        assert!(results.next().is_none());
        assert_eq!(results.examined(), 0);
    }

    #[test]
    fn always_returns_everything() {
        let products = sample_products();
        let all: Vec<&Product> = Filter.filter(&products, Spec::always()).collect();

        assert_eq!(all.len(), products.len());
    }

    #[test]
    fn filter_is_lazy() {
        struct Counting<'a>(&'a Cell<usize>);

        impl Specification<u64> for Counting<'_> {
            fn is_satisfied(&self, item: &u64) -> bool {
                self.0.set(self.0.get() + 1);
                item % 7 == 0
            }
        }

        let calls = Cell::new(0);
        let mut results = Filter.filter(1u64.., Counting(&calls));
        assert_eq!(calls.get(), 0);

        assert_eq!(results.next(), Some(7));
        assert_eq!(calls.get(), 7);
        assert_eq!(results.examined(), 7);

        assert_eq!(results.next(), Some(14));
        assert_eq!(calls.get(), 14);
        assert_eq!(results.matched(), 2);
    }

    #[test]
    fn size_hint_upper_bound() {
        let products = sample_products();
        let results = Filter.filter(&products, Spec::always());

        assert_eq!(results.size_hint(), (0, Some(5)));
    }

    #[test]
    fn filter_cloned() {
        let products = sample_products();
        let blue: Vec<Product> = Filter.filter_cloned(&products, Spec::color(Color::Blue));

        assert_eq!(blue.len(), 2);
        assert!(blue.iter().all(|p| p.color() == Color::Blue));
    }

    #[test]
    fn retain_in_place() {
        let mut products = sample_products();
        Filter.retain(&mut products, Spec::not_equals(Size::Small));

        assert_eq!(products.len(), 3);
        assert!(products.iter().all(|p| p.size() != Size::Small));
    }

    #[test]
    fn count_any_all() {
        let products = sample_products();

        assert_eq!(Filter.count(&products, Spec::color(Color::Red)), 2);
        assert!(Filter.any(&products, Spec::size(Size::Medium)));
        assert!(!Filter.all(&products, Spec::size(Size::Medium)));
        assert!(Filter.all(&products, Spec::always()));
        assert!(!Filter.any(&products, Spec::never()));
    }

    #[test]
    fn find_and_position() {
        let products = sample_products();
        let large = Spec::size(Size::Large);

        assert_eq!(Filter.find(&products, &large).map(Product::name), Some("Car"));
        assert_eq!(Filter.position(&products, &large), Some(2));
        assert_eq!(Filter.position(&products, Spec::never()), None);
    }

    #[test]
    fn empty_collection_helpers() {
        let products: Vec<Product> = Vec::new();
        let red = Spec::color(Color::Red);

        assert_eq!(Filter.count(&products, &red), 0);
        assert!(!Filter.any(&products, &red));
        assert!(Filter.all(&products, &red)); // vacuously true
        assert!(Filter.find(&products, &red).is_none());
    }
}
