//! Localizer errors and the error-reporting channel.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while ingesting translation files.
#[derive(Error, Debug)]
pub enum LocalizerError {
    /// The directory passed to `load_from_directory` does not exist.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The translation file could not be opened or read.
    #[error("Cannot open language file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The translation file is not valid JSON.
    #[error("Failed to parse {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top level of the file is not an object keyed by locale code.
    #[error("Top level of {} must be an object keyed by locale code", path.display())]
    InvalidLayout { path: PathBuf },

    /// A configured file pattern is not a valid glob.
    #[error("Invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build file pattern set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

impl LocalizerError {
    /// Path of the file the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::DirectoryNotFound(path)
            | Self::FileOpen { path, .. }
            | Self::Decode { path, .. }
            | Self::InvalidLayout { path } => Some(path),
            Self::Pattern { .. } | Self::GlobSetBuild(_) => None,
        }
    }
}

/// Which operation a reported failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// A direct `load_from_file` call failed.
    FileLoad,
    /// A file failed during `load_from_directory`.
    DirectoryScan,
    /// A file failed during `reload_all` or `check_for_changes`.
    Reload,
}

impl ReportKind {
    /// Stable numeric code for the kind (0, 1, 2).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::FileLoad => 0,
            Self::DirectoryScan => 1,
            Self::Reload => 2,
        }
    }
}

/// Receives non-fatal ingestion failures.
///
/// Reports are delivered after the localizer's lock is released, so a sink
/// may call back into the `Localizer`.
pub trait ErrorSink: Send + Sync {
    fn report(&self, error: &LocalizerError, kind: ReportKind);
}

impl<F> ErrorSink for F
where
    F: Fn(&LocalizerError, ReportKind) + Send + Sync,
{
    fn report(&self, error: &LocalizerError, kind: ReportKind) {
        self(error, kind);
    }
}

/// Default sink: logs each failure at `warn` level.
///
/// Without an installed `tracing` subscriber the reports go nowhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, error: &LocalizerError, kind: ReportKind) {
        tracing::warn!(code = kind.code(), ?kind, %error, "Failed to load translation file");
    }
}
