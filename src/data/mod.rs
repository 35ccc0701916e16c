/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  Books.json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → BookTable   (memoised by cache)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ BookTable  │  Vec<Book>, category index, value bounds
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterState → FilteredView
///   └──────────┘
///        │
///        ▼
///   summary / distribution / ranking
/// ```

pub mod cache;
pub mod distribution;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod ranking;
pub mod summary;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::model::{Book, BookTable};

    pub fn book(title: &str, category: &str, price: f64, stars: u8) -> Book {
        Book {
            title: title.to_string(),
            category: category.to_string(),
            price,
            stars,
            availability: "3".to_string(),
            url: format!("https://books.example/{}", title.to_lowercase()),
        }
    }

    /// (A, fiction, 10, 5), (B, fiction, 20, 3), (C, drama, 15, 5)
    pub fn three_books() -> BookTable {
        BookTable::from_books(vec![
            book("A", "fiction", 10.0, 5),
            book("B", "fiction", 20.0, 3),
            book("C", "drama", 15.0, 5),
        ])
    }
}
