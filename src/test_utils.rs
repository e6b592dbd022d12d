//! Test helpers shared by the unit test modules.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;
use std::time::{
    Duration,
    SystemTime,
};

use parking_lot::Mutex;

use crate::error::{
    ErrorSink,
    LocalizerError,
    ReportKind,
};

/// Write `content` to `dir/name` and return the path.
pub(crate) fn write_json(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Push the modification time of `path` `secs` seconds into the future so
/// change detection does not depend on filesystem timestamp resolution.
pub(crate) fn bump_mtime(path: &Path, secs: u64) {
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() + Duration::from_secs(secs)).unwrap();
}

/// Error sink that keeps every report.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSink {
    reports: Arc<Mutex<Vec<(String, ReportKind)>>>,
}

impl RecordingSink {
    pub(crate) fn codes(&self) -> Vec<u8> {
        self.reports.lock().iter().map(|(_, kind)| kind.code()).collect()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.reports.lock().iter().map(|(message, _)| message.clone()).collect()
    }
}

impl ErrorSink for RecordingSink {
    fn report(&self, error: &LocalizerError, kind: ReportKind) {
        self.reports.lock().push((error.to_string(), kind));
    }
}
