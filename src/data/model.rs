use std::collections::BTreeSet;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::config::MAX_STARS;

// ---------------------------------------------------------------------------
// Bounds – an inclusive interval
// ---------------------------------------------------------------------------

/// Inclusive `[lo, hi]` interval used for value ranges and range filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub lo: T,
    pub hi: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(lo: T, hi: T) -> Self {
        Bounds { lo, hi }
    }

    /// Inclusive on both ends. NaN never matches.
    pub fn contains(&self, value: T) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Move the lower end, dragging the upper end along if they cross.
    pub fn set_lo(&mut self, lo: T) {
        self.lo = lo;
        if self.hi < lo {
            self.hi = lo;
        }
    }

    /// Move the upper end, dragging the lower end along if they cross.
    pub fn set_hi(&mut self, hi: T) {
        self.hi = hi;
        if self.lo > hi {
            self.lo = hi;
        }
    }
}

// ---------------------------------------------------------------------------
// Book – one row of the catalogue
// ---------------------------------------------------------------------------

/// A single book record. Validated on deserialization: price is finite and
/// non-negative, stars is an integer in `1..=MAX_STARS`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawBook")]
pub struct Book {
    pub title: String,
    pub category: String,
    pub price: f64,
    pub stars: u8,
    /// Stock description as scraped, e.g. `"22"`.
    pub availability: String,
    pub url: String,
}

/// Wire shape before validation. Numbers are accepted as floats so that
/// `4.0` and `4` are both valid ratings.
#[derive(Deserialize)]
struct RawBook {
    #[serde(deserialize_with = "deserialize_text")]
    title: String,
    category: String,
    price: f64,
    stars: f64,
    #[serde(deserialize_with = "deserialize_text")]
    availability: String,
    url: String,
}

impl TryFrom<RawBook> for Book {
    type Error = String;

    fn try_from(raw: RawBook) -> Result<Self, Self::Error> {
        if !raw.price.is_finite() || raw.price < 0.0 {
            return Err(format!("price {} is not a non-negative number", raw.price));
        }
        if raw.stars.fract() != 0.0 || raw.stars < 1.0 || raw.stars > f64::from(MAX_STARS) {
            return Err(format!(
                "stars {} is not an integer rating between 1 and {MAX_STARS}",
                raw.stars
            ));
        }
        Ok(Book {
            title: raw.title,
            category: raw.category,
            price: raw.price,
            stars: raw.stars as u8,
            availability: raw.availability,
            url: raw.url,
        })
    }
}

/// One CSV row. Every cell arrives as text, so text fields are taken
/// verbatim rather than guessed at (`007` stays `007`, not `7`).
#[derive(Deserialize)]
pub(crate) struct CsvBook {
    title: String,
    category: String,
    price: f64,
    stars: f64,
    availability: String,
    url: String,
}

impl TryFrom<CsvBook> for Book {
    type Error = String;

    fn try_from(row: CsvBook) -> Result<Self, Self::Error> {
        Book::try_from(RawBook {
            title: row.title,
            category: row.category,
            price: row.price,
            stars: row.stars,
            availability: row.availability,
            url: row.url,
        })
    }
}

/// JSON only: accept a string, or a number rendered as text. Scraped titles such as
/// `1984` and stock counts often arrive as bare numbers.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

// ---------------------------------------------------------------------------
// BookTable – the complete loaded catalogue
// ---------------------------------------------------------------------------

/// The full parsed catalogue with pre-computed column indices.
#[derive(Debug, Clone)]
pub struct BookTable {
    /// All records (rows), in file order.
    pub books: Vec<Book>,
    /// Sorted set of distinct categories.
    pub categories: BTreeSet<String>,
    /// Integer price bounds: floor of the minimum, ceil of the maximum.
    pub price_bounds: Bounds<f64>,
    /// Lowest and highest star rating observed.
    pub star_bounds: Bounds<u8>,
}

impl BookTable {
    /// Build column indices from the loaded records.
    pub fn from_books(books: Vec<Book>) -> Self {
        let categories: BTreeSet<String> = books.iter().map(|b| b.category.clone()).collect();

        let price_bounds = if books.is_empty() {
            Bounds::new(0.0, 0.0)
        } else {
            let min = books.iter().map(|b| b.price).fold(f64::INFINITY, f64::min);
            let max = books.iter().map(|b| b.price).fold(f64::NEG_INFINITY, f64::max);
            Bounds::new(min.floor(), max.ceil())
        };

        let star_bounds = Bounds::new(
            books.iter().map(|b| b.stars).min().unwrap_or(0),
            books.iter().map(|b| b.stars).max().unwrap_or(0),
        );

        BookTable {
            books,
            categories,
            price_bounds,
            star_bounds,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
