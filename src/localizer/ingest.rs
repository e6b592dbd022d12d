//! File and directory ingestion.

use std::path::Path;

use super::{
    Localizer,
    PendingReports,
    State,
};
use crate::error::{
    LocalizerError,
    ReportKind,
};
use crate::input::translation::TranslationFile;
use crate::scan::{
    FileMatcher,
    find_translation_files,
};

impl Localizer {
    /// Load one translation file and merge it into the tables.
    ///
    /// Every key is stored as `<file stem><separator><nested path>` under the
    /// locale named by its top-level object key; existing keys are
    /// overwritten. A failure is reported to the error sink with
    /// [`ReportKind::FileLoad`] and also returned.
    ///
    /// # Errors
    /// `FileOpen`, `Decode` or `InvalidLayout`.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<(), LocalizerError> {
        let path = path.as_ref();

        let (result, sink) = {
            let mut state = self.state.write();
            (self.load_locked(&mut state, path), std::sync::Arc::clone(&state.sink))
        };

        if let Err(error) = &result {
            sink.report(error, ReportKind::FileLoad);
        }
        result
    }

    /// Load every matching file in `dir`, descending into subdirectories if
    /// `recursive`.
    ///
    /// Files that fail are reported with [`ReportKind::DirectoryScan`] and
    /// skipped. Returns the number of files loaded.
    ///
    /// # Errors
    /// `DirectoryNotFound` if `dir` is missing; `Pattern` if the configured
    /// file patterns do not compile.
    pub fn load_from_directory(
        &self,
        dir: impl AsRef<Path>,
        recursive: bool,
    ) -> Result<usize, LocalizerError> {
        let dir = dir.as_ref();
        let matcher = FileMatcher::new(&self.config.file_patterns)?;
        let files = find_translation_files(dir, recursive, &matcher)?;

        let mut loaded = 0;
        let reports = {
            let mut state = self.state.write();
            let mut reports = PendingReports::new(&state.sink, ReportKind::DirectoryScan);
            for file in &files {
                match self.load_locked(&mut state, file) {
                    Ok(()) => loaded += 1,
                    Err(error) => reports.push(error),
                }
            }
            reports
        };

        tracing::info!(
            dir = %dir.display(),
            loaded,
            failed = reports.errors.len(),
            "Loaded translation directory"
        );
        reports.deliver();

        Ok(loaded)
    }

    /// Re-load every file loaded so far.
    ///
    /// With `clear_before` all locales and keys are dropped first, so keys
    /// removed from the files disappear. Failures are reported with
    /// [`ReportKind::Reload`]. Returns the number of files reloaded.
    pub fn reload_all(&self, clear_before: bool) -> usize {
        let mut reloaded = 0;
        let reports = {
            let mut state = self.state.write();
            if clear_before {
                state.store.clear();
            }

            let mut reports = PendingReports::new(&state.sink, ReportKind::Reload);
            let files = state.registry.files().to_vec();
            for file in &files {
                match self.load_locked(&mut state, file) {
                    Ok(()) => reloaded += 1,
                    Err(error) => reports.push(error),
                }
            }
            reports
        };

        tracing::info!(
            reloaded,
            failed = reports.errors.len(),
            clear_before,
            "Reloaded translations"
        );
        reports.deliver();

        reloaded
    }

    /// Read `path` and merge it into `state`. The caller holds the write lock.
    pub(super) fn load_locked(&self, state: &mut State, path: &Path) -> Result<(), LocalizerError> {
        let separator = self.config.key_separator.as_str();
        let file = TranslationFile::read(path, separator)?;

        state.registry.record(path, file.modified);

        let locale_count = file.locales.len();
        for (locale, keys) in file.locales {
            state.store.merge(&locale, &file.namespace, separator, keys);
        }

        tracing::debug!(
            path = %path.display(),
            namespace = %file.namespace,
            locales = locale_count,
            "Loaded translation file"
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use googletest::prelude::*;
    use parking_lot::Mutex;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::{
        RecordingSink,
        write_json,
    };

    #[fixture]
    fn langs() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_json(
            dir.path(),
            "ui.json",
            r#"{
                "en": { "button": { "play": "Play" }, "menu": { "exit": "Exit" } },
                "fr": { "button": { "play": "Jouer" } }
            }"#,
        );
        write_json(dir.path(), "messages.json", r#"{ "en": { "welcome": "Hi {username}" } }"#);
        dir
    }

    /// `load_from_file`: keys get the file stem
    #[rstest]
    fn load_from_file_namespaces_keys(langs: TempDir) {
        let localizer = Localizer::default();

        localizer.load_from_file(langs.path().join("ui.json")).unwrap();

        assert_that!(localizer.translate("ui.button.play"), eq("Play"));
        assert_that!(localizer.translate("ui.menu.exit"), eq("Exit"));
        assert_that!(localizer.has_key("button.play"), eq(false));
        assert_that!(localizer.loaded_files().len(), eq(1));
    }

    /// `load_from_file`: configured separator
    #[rstest]
    fn load_from_file_uses_configured_separator(langs: TempDir) {
        let localizer = Localizer::new(crate::config::LocalizerConfig {
            key_separator: "/".to_string(),
            ..crate::config::LocalizerConfig::default()
        })
        .unwrap();

        localizer.load_from_file(langs.path().join("ui.json")).unwrap();

        assert_that!(localizer.translate("ui/button/play"), eq("Play"));
    }

    /// `load_from_file`: failure is returned and reported
    #[rstest]
    fn load_from_file_reports_failures(langs: TempDir) {
        let localizer = Localizer::default();
        let sink = RecordingSink::default();
        localizer.set_error_sink(sink.clone());

        let result = localizer.load_from_file(langs.path().join("absent.json"));

        assert!(matches!(result, Err(LocalizerError::FileOpen { .. })));
        assert_eq!(sink.codes(), vec![0]);
        assert_that!(localizer.loaded_files().is_empty(), eq(true));
    }

    /// `load_from_file`: last load wins per key
    #[rstest]
    fn later_load_wins_per_key(langs: TempDir) {
        let localizer = Localizer::default();
        let other = TempDir::new().unwrap();
        write_json(other.path(), "ui.json", r#"{ "en": { "button": { "play": "Start" } } }"#);

        localizer.load_from_file(langs.path().join("ui.json")).unwrap();
        localizer.load_from_file(other.path().join("ui.json")).unwrap();

        assert_that!(localizer.translate("ui.button.play"), eq("Start"));
        assert_that!(localizer.translate("ui.menu.exit"), eq("Exit"));
        assert_that!(localizer.loaded_files().len(), eq(2));
    }

    /// `load_from_directory`: bad file is skipped
    #[rstest]
    fn load_from_directory_continues_after_bad_file(langs: TempDir) {
        write_json(langs.path(), "broken.json", "{ not json");
        let localizer = Localizer::default();
        let sink = RecordingSink::default();
        localizer.set_error_sink(sink.clone());

        let loaded = localizer.load_from_directory(langs.path(), false).unwrap();

        assert_that!(loaded, eq(2));
        assert_eq!(sink.codes(), vec![1]);
        assert_that!(sink.messages().iter().any(|m| m.contains("broken.json")), eq(true));
        assert_that!(localizer.translate("messages.welcome"), eq("Hi {username}"));
        assert_that!(localizer.translate("ui.button.play"), eq("Play"));
    }

    /// `load_from_directory`: missing directory
    #[rstest]
    fn load_from_directory_missing_dir(langs: TempDir) {
        let localizer = Localizer::default();

        let result = localizer.load_from_directory(langs.path().join("nope"), false);

        assert!(matches!(result, Err(LocalizerError::DirectoryNotFound(_))));
    }

    /// `reload_all(false)`
    #[rstest]
    fn reload_all_without_clear_keeps_removed_keys(langs: TempDir) {
        let localizer = Localizer::default();
        localizer.load_from_directory(langs.path(), false).unwrap();
        write_json(langs.path(), "ui.json", r#"{ "en": { "button": { "play": "Go" } } }"#);

        let reloaded = localizer.reload_all(false);

        assert_that!(reloaded, eq(2));
        assert_that!(localizer.translate("ui.button.play"), eq("Go"));
        assert_that!(localizer.translate("ui.menu.exit"), eq("Exit"));
    }

    /// `reload_all(true)`
    #[rstest]
    fn reload_all_with_clear_drops_removed_keys(langs: TempDir) {
        let localizer = Localizer::default();
        localizer.load_from_directory(langs.path(), false).unwrap();
        write_json(langs.path(), "ui.json", r#"{ "en": { "button": { "play": "Go" } } }"#);

        localizer.reload_all(true);

        assert_that!(localizer.translate("ui.button.play"), eq("Go"));
        assert_that!(localizer.has_key("ui.menu.exit"), eq(false));
        assert_that!(localizer.set_locale("fr"), eq(false));
    }

    /// `reload_all`: one report per failed file
    #[rstest]
    fn reload_all_reports_each_failure(langs: TempDir) {
        let localizer = Localizer::default();
        localizer.load_from_directory(langs.path(), false).unwrap();
        fs::remove_file(langs.path().join("ui.json")).unwrap();
        write_json(langs.path(), "messages.json", "[]");
        let sink = RecordingSink::default();
        localizer.set_error_sink(sink.clone());

        let reloaded = localizer.reload_all(false);

        assert_that!(reloaded, eq(0));
        assert_eq!(sink.codes(), vec![2, 2]);
    }

    /// Error sink re-entering the localizer
    #[rstest]
    fn sink_may_call_back_into_localizer(langs: TempDir) {
        let localizer = Arc::new(Localizer::default());
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let weak = Arc::downgrade(&localizer);
            let seen = Arc::clone(&seen);
            localizer.set_error_sink(move |_: &LocalizerError, _: ReportKind| {
                if let Some(localizer) = weak.upgrade() {
                    seen.lock().push(localizer.locale());
                }
            });
        }

        let result = localizer.load_from_file(langs.path().join("absent.json"));

        assert!(result.is_err());
        assert_eq!(*seen.lock(), vec!["en".to_string()]);
    }

    /// `reset_error_sink`
    #[rstest]
    fn reset_error_sink_stops_delivery(langs: TempDir) {
        let localizer = Localizer::default();
        let sink = RecordingSink::default();
        localizer.set_error_sink(sink.clone());
        localizer.reset_error_sink();

        let _ = localizer.load_from_file(langs.path().join("absent.json"));

        assert_that!(sink.codes().is_empty(), eq(true));
    }
}
