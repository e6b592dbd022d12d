//! Polling change detection for loaded files.

use super::{
    Localizer,
    PendingReports,
};
use crate::error::{
    LocalizerError,
    ReportKind,
};

impl Localizer {
    /// Re-load every tracked file whose modification time changed.
    ///
    /// Files that no longer exist are skipped. The stored timestamp is
    /// updated before the reload, so a file that fails to load is retried
    /// only after it changes again. Failures are reported with
    /// [`ReportKind::Reload`]. Returns the number of files reloaded.
    ///
    /// This only polls; call it periodically.
    pub fn check_for_changes(&self) -> usize {
        let mut reloaded = 0;
        let reports = {
            let mut state = self.state.write();
            let mut reports = PendingReports::new(&state.sink, ReportKind::Reload);

            let tracked = state.registry.tracked();
            for (path, stored) in tracked {
                if !path.exists() {
                    continue;
                }

                let current = match std::fs::metadata(&path).and_then(|m| m.modified()) {
                    Ok(time) => time,
                    Err(source) => {
                        reports.push(LocalizerError::FileOpen { path, source });
                        continue;
                    }
                };
                if current == stored {
                    continue;
                }

                tracing::info!(path = %path.display(), "Detected change in translation file");
                state.registry.set_timestamp(&path, current);

                match self.load_locked(&mut state, &path) {
                    Ok(()) => reloaded += 1,
                    Err(error) => reports.push(error),
                }
            }
            reports
        };

        reports.deliver();
        reloaded
    }
}
