use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::DashboardConfig;
use crate::data::cache::DatasetCache;
use crate::data::filter::{init_filter_state, FilterState};
use crate::data::model::BookTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// File the catalogue is read from.
    pub data_path: PathBuf,

    /// Memoised loader output.
    cache: DatasetCache,

    /// Table currently shown (None until a load succeeds).
    pub table: Option<Arc<BookTable>>,

    /// Sidebar selections. Reset whenever a different table is loaded.
    pub filters: Option<FilterState>,

    /// Fatal load error; while set, the dashboard is not rendered.
    pub load_error: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            data_path: config.data_path.clone(),
            config,
            cache: DatasetCache::new(),
            table: None,
            filters: None,
            load_error: None,
        }
    }

    /// Bring the table up to date with the file on disk. Cheap when the file
    /// is unchanged: the cached table is returned without re-parsing.
    pub fn sync(&mut self) {
        match self.load() {
            Ok(table) => {
                let changed = self
                    .table
                    .as_ref()
                    .map_or(true, |current| !Arc::ptr_eq(current, &table));
                if changed {
                    self.filters = Some(init_filter_state(&table));
                    self.table = Some(table);
                }
                self.load_error = None;
            }
            Err(e) => {
                if self.load_error.is_none() {
                    log::warn!("Failed to load data: {e:#}");
                }
                self.table = None;
                self.filters = None;
                self.load_error = Some(format!("{e:#}"));
            }
        }
    }

    fn load(&mut self) -> Result<Arc<BookTable>> {
        let path = self.data_path.clone();
        self.cache
            .get_or_load(&path)
            .with_context(|| format!("loading {}", path.display()))
    }

    /// Switch to another data file and load it.
    pub fn open(&mut self, path: &Path) {
        log::debug!("Opening {}", path.display());
        self.data_path = path.to_path_buf();
        self.load_error = None;
        self.sync();
    }

    /// Replace the selections with "everything selected".
    pub fn reset_filters(&mut self) {
        if let Some(table) = &self.table {
            self.filters = Some(init_filter_state(table));
        }
    }

    /// Select every category.
    pub fn select_all(&mut self) {
        if let (Some(table), Some(filters)) = (&self.table, &mut self.filters) {
            filters.categories = table.categories.clone();
        }
    }

    /// Deselect every category.
    pub fn select_none(&mut self) {
        if let Some(filters) = &mut self.filters {
            filters.categories.clear();
        }
    }

    /// Toggle a single category in the selection.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(filters) = &mut self.filters {
            if !filters.categories.remove(category) {
                filters.categories.insert(category.to_string());
            }
        }
    }
}
