use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use super::error::ParseError;
use super::loader::load_file;
use super::model::BookTable;

// ---------------------------------------------------------------------------
// File identity
// ---------------------------------------------------------------------------

/// Identity of a file on disk. Two keys are equal when the file has not been
/// replaced or rewritten in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKey {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
    pub len: u64,
}

impl FileKey {
    pub fn of(path: &Path) -> Result<Self, ParseError> {
        let io_err = |source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        };
        let canonical = path.canonicalize().map_err(io_err)?;
        let meta = std::fs::metadata(&canonical).map_err(io_err)?;
        Ok(FileKey {
            path: canonical,
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

// ---------------------------------------------------------------------------
// Memoised loader
// ---------------------------------------------------------------------------

/// Holds the most recently loaded table and the identity of the file it came
/// from. Populated on first access; read-only until the file changes.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(FileKey, Arc<BookTable>)>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `path`, parsing the file only when it is
    /// not cached yet or has changed since it was parsed.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<BookTable>, ParseError> {
        let key = match FileKey::of(path) {
            Ok(key) => key,
            Err(e) => {
                self.entry = None;
                return Err(e);
            }
        };

        if let Some((cached_key, table)) = &self.entry {
            if *cached_key == key {
                return Ok(Arc::clone(table));
            }
            log::debug!("{} changed on disk, reloading", key.path.display());
        }

        match load_file(&key.path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} books in {} categories from {}",
                    table.len(),
                    table.categories.len(),
                    key.path.display()
                );
                let table = Arc::new(table);
                self.entry = Some((key, Arc::clone(&table)));
                Ok(table)
            }
            Err(e) => {
                self.entry = None;
                Err(e)
            }
        }
    }

    /// Key of the cached file, if any.
    #[cfg(test)]
    pub fn key(&self) -> Option<&FileKey> {
        self.entry.as_ref().map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const ONE_BOOK: &str = r#"[{"title": "A", "category": "fiction", "price": 10,
        "stars": 5, "availability": "1", "url": "u"}]"#;
    const TWO_BOOKS: &str = r#"[{"title": "A", "category": "fiction", "price": 10,
        "stars": 5, "availability": "1", "url": "u"},
        {"title": "B", "category": "drama", "price": 20,
        "stars": 3, "availability": "4", "url": "v"}]"#;

    #[test]
    fn test_cache_hit_reuses_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Books.json");
        fs::write(&path, ONE_BOOK).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.get_or_load(&path).unwrap();
        let second = cache.get_or_load(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.key().map(|k| k.len), Some(ONE_BOOK.len() as u64));
    }

    #[test]
    fn test_changed_file_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Books.json");
        fs::write(&path, ONE_BOOK).unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.get_or_load(&path).unwrap();
        assert_eq!(first.len(), 1);

        fs::write(&path, TWO_BOOKS).unwrap();
        let second = cache.get_or_load(&path).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_failed_load_clears_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Books.json");
        fs::write(&path, ONE_BOOK).unwrap();

        let mut cache = DatasetCache::new();
        cache.get_or_load(&path).unwrap();

        fs::write(&path, "not json at all").unwrap();
        assert!(cache.get_or_load(&path).is_err());
        assert!(cache.key().is_none());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let mut cache = DatasetCache::new();
        let err = cache.get_or_load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
