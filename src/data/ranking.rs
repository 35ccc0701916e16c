use std::cmp::Ordering;

use super::filter::FilteredView;
use super::model::Book;

/// Best rated first; cheaper first among equal ratings.
pub fn rank_order(a: &Book, b: &Book) -> Ordering {
    b.stars
        .cmp(&a.stars)
        .then_with(|| a.price.total_cmp(&b.price))
}

/// The `n` highest-rated books of the view, or fewer if the view is smaller.
pub fn top_rated<'a>(view: &FilteredView<'a>, n: usize) -> Vec<&'a Book> {
    let mut books: Vec<&'a Book> = view.iter().collect();
    books.sort_by(|a, b| rank_order(a, b));
    books.truncate(n);
    books
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, init_filter_state};
    use crate::data::fixtures::{book, three_books};
    use crate::data::model::BookTable;

    #[test]
    fn test_rank_fiction() {
        let table = three_books();
        let mut filters = init_filter_state(&table);
        filters.categories.remove("drama");

        let view = apply(&table, &filters);
        let titles: Vec<&str> = top_rated(&view, 10).iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_price_breaks_ties() {
        let table = three_books();
        let view = apply(&table, &init_filter_state(&table));
        let titles: Vec<&str> = top_rated(&view, 10).iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_truncates_to_n() {
        let books = (0..25)
            .map(|i| book(&format!("b{i}"), "Travel", f64::from(i), (i % 5 + 1) as u8))
            .collect();
        let table = BookTable::from_books(books);
        let view = apply(&table, &init_filter_state(&table));

        let top = top_rated(&view, 10);
        assert_eq!(top.len(), 10);
        for pair in top.windows(2) {
            assert!(pair[0].stars >= pair[1].stars);
            if pair[0].stars == pair[1].stars {
                assert!(pair[0].price <= pair[1].price);
            }
        }
        assert_eq!(top[0].stars, 5);
        assert_eq!(top[0].price, 4.0);
    }

    #[test]
    fn test_empty_view() {
        let table = three_books();
        let mut filters = init_filter_state(&table);
        filters.stars.set_lo(5);
        filters.price.set_hi(5.0);
        assert!(top_rated(&apply(&table, &filters), 10).is_empty());
    }
}
