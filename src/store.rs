//! In-memory translation tables and the loaded-file registry.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::time::SystemTime;

/// Locale code -> (full translation key -> text).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStore {
    tables: HashMap<String, HashMap<String, String>>,
}

impl TableStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entries` into `locale`, each key prefixed with
    /// `namespace` + `separator`. Existing keys are overwritten.
    ///
    /// A locale with no entries is left untouched, so it does not become
    /// known through an empty merge.
    pub fn merge<I>(&mut self, locale: &str, namespace: &str, separator: &str, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            return;
        }

        let table = self.tables.entry(locale.to_string()).or_default();
        for (key, value) in entries {
            table.insert(format!("{namespace}{separator}{key}"), value);
        }
    }

    /// Add an empty table for `locale` unless one exists.
    pub fn register_locale(&mut self, locale: &str) {
        self.tables.entry(locale.to_string()).or_default();
    }

    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.tables.get(locale).and_then(|table| table.get(key)).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, locale: &str, key: &str) -> bool {
        self.tables.get(locale).is_some_and(|table| table.contains_key(key))
    }

    #[must_use]
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.tables.contains_key(locale)
    }

    /// Locale codes with their key counts.
    pub fn locales(&self) -> impl Iterator<Item = (&str, usize)> {
        self.tables.iter().map(|(locale, table)| (locale.as_str(), table.len()))
    }

    /// Drop every locale and key.
    pub fn clear(&mut self) {
        self.tables.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Files loaded so far and their last observed modification times.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    /// Distinct paths in first-load order.
    files: Vec<PathBuf>,
    timestamps: HashMap<PathBuf, SystemTime>,
}

impl FileRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful load of `path`.
    pub fn record(&mut self, path: &Path, modified: SystemTime) {
        if !self.files.iter().any(|known| known == path) {
            self.files.push(path.to_path_buf());
        }
        self.timestamps.insert(path.to_path_buf(), modified);
    }

    pub fn set_timestamp(&mut self, path: &Path, modified: SystemTime) {
        self.timestamps.insert(path.to_path_buf(), modified);
    }

    #[must_use]
    pub fn timestamp(&self, path: &Path) -> Option<SystemTime> {
        self.timestamps.get(path).copied()
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Snapshot of every tracked path with its stored timestamp, in
    /// first-load order.
    #[must_use]
    pub fn tracked(&self) -> Vec<(PathBuf, SystemTime)> {
        self.files
            .iter()
            .filter_map(|path| self.timestamps.get(path).map(|time| (path.clone(), *time)))
            .collect()
    }
}
