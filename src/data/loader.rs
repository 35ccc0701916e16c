use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::error::ParseError;
use super::model::{Book, BookTable, CsvBook};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a book catalogue from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "title": ..., "category": ..., "price": ..., ... }, ...]`
/// * `.csv`  – header row `title,category,price,stars,availability,url`
pub fn load_file(path: &Path) -> Result<BookTable, ParseError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let books = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => return Err(ParseError::UnsupportedExtension(other.to_string())),
    };

    let table = BookTable::from_books(books);
    if table.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(table)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ParseError + '_ {
    move |source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "title": "A Light in the Attic",
///     "category": "Poetry",
///     "price": 51.77,
///     "stars": 3,
///     "availability": "22",
///     "url": "https://books.toscrape.com/..."
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<Book>, ParseError> {
    let text = std::fs::read_to_string(path).map_err(io_error(path))?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root.as_array().ok_or(ParseError::NotAnArray)?;

    records
        .iter()
        .enumerate()
        .map(|(row, rec)| {
            if !rec.is_object() {
                return Err(ParseError::NotAnObject { row });
            }
            Book::deserialize(rec).map_err(|e| ParseError::InvalidRecord {
                row,
                reason: e.to_string(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the six record fields in any order.
fn load_csv(path: &Path) -> Result<Vec<Book>, ParseError> {
    let file = File::open(path).map_err(io_error(path))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut books = Vec::new();
    for (row, result) in reader.deserialize::<CsvBook>().enumerate() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) => {
                return Err(ParseError::InvalidRecord {
                    row,
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        let book =
            Book::try_from(raw).map_err(|reason| ParseError::InvalidRecord { row, reason })?;
        books.push(book);
    }
    Ok(books)
}
