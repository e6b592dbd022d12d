//! The translation table manager.
//!
//! A [`Localizer`] owns every piece of mutable localization state behind a
//! single readers-writer lock:
//!
//! - the table store (locale -> key -> text)
//! - the loaded-file registry and its modification times
//! - the active locale
//! - debug rendering options
//! - the error sink
//!
//! Lookups take the shared lock, ingestion and setters take the exclusive
//! lock, and every guard lives only for the duration of one call. Failure
//! reports are delivered after the guard is dropped.

mod ingest;
mod resolve;
mod watch;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::{
    ConfigError,
    DebugOptions,
    LocalizerConfig,
};
use crate::error::{
    ErrorSink,
    LocalizerError,
    ReportKind,
    TracingSink,
};
use crate::store::{
    FileRegistry,
    TableStore,
};

pub use resolve::LocaleStats;

/// Runtime translation table manager.
///
/// Build one per process (or per test) and share it by reference or `Arc`.
pub struct Localizer {
    /// Immutable settings fixed at construction.
    config: LocalizerConfig,
    state: RwLock<State>,
}

/// Everything guarded by the lock.
struct State {
    store: TableStore,
    registry: FileRegistry,
    active_locale: String,
    debug: DebugOptions,
    sink: Arc<dyn ErrorSink>,
}

/// Failures collected under the lock, delivered once it is released.
struct PendingReports {
    sink: Arc<dyn ErrorSink>,
    kind: ReportKind,
    errors: Vec<LocalizerError>,
}

impl PendingReports {
    fn new(sink: &Arc<dyn ErrorSink>, kind: ReportKind) -> Self {
        Self { sink: Arc::clone(sink), kind, errors: Vec::new() }
    }

    fn push(&mut self, error: LocalizerError) {
        self.errors.push(error);
    }

    fn deliver(self) {
        for error in &self.errors {
            self.sink.report(error, self.kind);
        }
    }
}

impl Localizer {
    /// Create a localizer from a validated configuration.
    ///
    /// The active locale starts as `config.default_locale` and the debug
    /// options as `config.debug`.
    ///
    /// # Errors
    /// `ConfigError::ValidationErrors` if the configuration is invalid.
    pub fn new(config: LocalizerConfig) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: LocalizerConfig) -> Self {
        let state = State {
            store: TableStore::new(),
            registry: FileRegistry::new(),
            active_locale: config.default_locale.clone(),
            debug: config.debug.clone(),
            sink: Arc::new(TracingSink),
        };
        Self { config, state: RwLock::new(state) }
    }

    #[must_use]
    pub const fn config(&self) -> &LocalizerConfig {
        &self.config
    }

    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.config.default_locale
    }

    /// Replace the error sink. Takes effect for calls started afterwards.
    pub fn set_error_sink<S>(&self, sink: S)
    where
        S: ErrorSink + 'static,
    {
        self.state.write().sink = Arc::new(sink);
    }

    /// Restore the default [`TracingSink`].
    pub fn reset_error_sink(&self) {
        self.state.write().sink = Arc::new(TracingSink);
    }

    /// Paths of every file loaded so far, in first-load order.
    #[must_use]
    pub fn loaded_files(&self) -> Vec<PathBuf> {
        self.state.read().registry.files().to_vec()
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::from_config(LocalizerConfig::default())
    }
}

impl fmt::Debug for Localizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Localizer")
            .field("config", &self.config)
            .field("active_locale", &state.active_locale)
            .field("store", &state.store)
            .field("registry", &state.registry)
            .field("debug", &state.debug)
            .field("sink", &"<dyn ErrorSink>")
            .finish()
    }
}
