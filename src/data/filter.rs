use std::collections::BTreeSet;

use super::model::{Book, BookTable, Bounds};

// ---------------------------------------------------------------------------
// Filter predicate: selected categories plus price and rating ranges
// ---------------------------------------------------------------------------

/// Active constraints chosen in the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Categories to keep. Empty means nothing is shown.
    pub categories: BTreeSet<String>,
    /// Inclusive price range.
    pub price: Bounds<f64>,
    /// Inclusive star-rating range.
    pub stars: Bounds<u8>,
}

/// Initialise a [`FilterState`] with everything selected (i.e., show all).
pub fn init_filter_state(table: &BookTable) -> FilterState {
    FilterState {
        categories: table.categories.clone(),
        price: table.price_bounds,
        stars: table.star_bounds,
    }
}

/// A book passes when its category is selected, and its price and rating
/// both lie inside the (inclusive) ranges.
pub fn matches(book: &Book, filters: &FilterState) -> bool {
    filters.categories.contains(&book.category)
        && filters.price.contains(book.price)
        && filters.stars.contains(book.stars)
}

/// Return indices of books that pass all active filters, in table order.
pub fn filtered_indices(table: &BookTable, filters: &FilterState) -> Vec<usize> {
    if filters.categories.is_empty() {
        return Vec::new();
    }
    table
        .books
        .iter()
        .enumerate()
        .filter(|(_, book)| matches(book, filters))
        .map(|(i, _)| i)
        .collect()
}

/// Apply `filters` to `table`.
pub fn apply<'a>(table: &'a BookTable, filters: &FilterState) -> FilteredView<'a> {
    FilteredView {
        table,
        indices: filtered_indices(table, filters),
    }
}

// ---------------------------------------------------------------------------
// FilteredView – borrowed subset of the table
// ---------------------------------------------------------------------------

/// The rows of a [`BookTable`] that satisfy a [`FilterState`]. Records are
/// borrowed, never copied, and keep their table order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    table: &'a BookTable,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Book> + '_ {
        let table = self.table;
        self.indices.iter().map(move |&i| &table.books[i])
    }

    /// Row `i` of the view (zero-based, not the table index).
    pub fn get(&self, i: usize) -> Option<&'a Book> {
        let table = self.table;
        self.indices.get(i).map(|&idx| &table.books[idx])
    }

    /// Positions of the rows in the source table.
    #[cfg(test)]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{book, three_books};
    use proptest::prelude::*;

    fn titles(view: &FilteredView<'_>) -> Vec<String> {
        view.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let table = three_books();
        let filters = init_filter_state(&table);
        assert_eq!(apply(&table, &filters).len(), 3);
    }

    #[test]
    fn test_fiction_scenario() {
        let table = three_books();
        let filters = FilterState {
            categories: BTreeSet::from(["fiction".to_string()]),
            price: Bounds::new(0.0, 25.0),
            stars: Bounds::new(1, 5),
        };
        let view = apply(&table, &filters);
        assert_eq!(titles(&view), vec!["A", "B"]);
        assert_eq!(view.indices(), &[0, 1]);
    }

    #[test]
    fn test_empty_category_selection() {
        let table = three_books();
        let filters = FilterState {
            categories: BTreeSet::new(),
            price: Bounds::new(0.0, 1000.0),
            stars: Bounds::new(0, 5),
        };
        let view = apply(&table, &filters);
        assert!(view.is_empty());
        assert!(view.get(0).is_none());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let table = three_books();
        let mut filters = init_filter_state(&table);
        filters.price = Bounds::new(15.0, 20.0);
        filters.stars = Bounds::new(3, 3);
        assert_eq!(titles(&apply(&table, &filters)), vec!["B"]);
    }

    #[test]
    fn test_range_excluding_all_rows() {
        let table = three_books();
        let mut filters = init_filter_state(&table);
        filters.price = Bounds::new(100.0, 200.0);
        assert!(apply(&table, &filters).is_empty());
    }

    #[test]
    fn test_view_preserves_records() {
        let table = three_books();
        let filters = init_filter_state(&table);
        let view = apply(&table, &filters);
        for (row, &idx) in view.indices().iter().enumerate() {
            assert_eq!(view.get(row), Some(&table.books[idx]));
        }
    }

    const CATEGORIES: [&str; 4] = ["Poetry", "Travel", "Mystery", "Fiction"];

    fn arb_table() -> impl Strategy<Value = BookTable> {
        prop::collection::vec((0usize..4, 0.0f64..100.0, 1u8..=5), 0..60).prop_map(|rows| {
            let books = rows
                .into_iter()
                .enumerate()
                .map(|(i, (cat, price, stars))| {
                    book(&format!("book{i}"), CATEGORIES[cat], price, stars)
                })
                .collect();
            BookTable::from_books(books)
        })
    }

    fn arb_filters() -> impl Strategy<Value = FilterState> {
        (
            prop::collection::vec(any::<bool>(), CATEGORIES.len()),
            0.0f64..100.0,
            0.0f64..100.0,
            1u8..=5,
            1u8..=5,
        )
            .prop_map(|(mask, p1, p2, s1, s2)| FilterState {
                categories: CATEGORIES
                    .iter()
                    .zip(mask)
                    .filter(|(_, keep)| *keep)
                    .map(|(c, _)| c.to_string())
                    .collect(),
                price: Bounds::new(p1.min(p2), p1.max(p2)),
                stars: Bounds::new(s1.min(s2), s1.max(s2)),
            })
    }

    proptest! {
        #[test]
        fn test_view_is_exactly_the_matching_rows(
            table in arb_table(),
            filters in arb_filters(),
        ) {
            let view = apply(&table, &filters);

            // Property: every row in the view satisfies all constraints
            for b in view.iter() {
                prop_assert!(filters.categories.contains(&b.category));
                prop_assert!(filters.price.lo <= b.price && b.price <= filters.price.hi);
                prop_assert!(filters.stars.lo <= b.stars && b.stars <= filters.stars.hi);
            }

            // Property: no satisfying row is left out
            let expected = table.books.iter().filter(|b| matches(b, &filters)).count();
            prop_assert_eq!(view.len(), expected);
        }

        #[test]
        fn test_filtering_is_idempotent(
            table in arb_table(),
            filters in arb_filters(),
        ) {
            let first = filtered_indices(&table, &filters);
            let second = filtered_indices(&table, &filters);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_no_categories_means_no_rows(
            table in arb_table(),
            filters in arb_filters(),
        ) {
            let mut filters = filters;
            filters.categories.clear();
            prop_assert!(apply(&table, &filters).is_empty());
        }
    }
}
