//! Translation file discovery.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use crate::config::CONFIG_FILE_NAME;
use crate::error::LocalizerError;

/// Matches translation file names against the configured glob patterns.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    patterns: GlobSet,
}

impl FileMatcher {
    /// # Errors
    /// `Pattern` for an invalid glob, `GlobSetBuild` if the set cannot be built.
    pub fn new(patterns: &[String]) -> Result<Self, LocalizerError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| LocalizerError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        Ok(Self { patterns: builder.build()? })
    }

    /// Returns true if the file name of `path` matches a pattern.
    ///
    /// The localizer's own config file never matches.
    #[must_use]
    pub fn is_translation_file(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };
        // A bare `.json` has no stem to namespace its keys with.
        let stemless = file_name.to_string_lossy().starts_with('.') && path.extension().is_none();
        !stemless && file_name != CONFIG_FILE_NAME && self.patterns.is_match(file_name)
    }
}

/// Collect the translation files in `dir`.
///
/// Only immediate children are considered unless `recursive`. Symlinked
/// files are followed, symlinked subdirectories are not. Entries that cannot
/// be read (e.g. permission denied) are skipped. The result is sorted by path
/// so later files deterministically win on merge.
///
/// # Errors
/// `DirectoryNotFound` if `dir` does not exist or is not a directory.
pub fn find_translation_files(
    dir: &Path,
    recursive: bool,
    matcher: &FileMatcher,
) -> Result<Vec<PathBuf>, LocalizerError> {
    if !dir.is_dir() {
        return Err(LocalizerError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut found_files = Vec::new();

    for result in WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(if recursive { None } else { Some(1) })
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Skipping unreadable directory entry");
                continue;
            }
        };

        let path = entry.path();
        // `is_file` resolves symlinks; the walk itself does not follow them.
        if matcher.is_translation_file(path) && path.is_file() {
            found_files.push(path.to_path_buf());
        }
    }

    found_files.sort();
    tracing::debug!(dir = %dir.display(), count = found_files.len(), "Found translation files");

    Ok(found_files)
}
