//! Translation file input definitions

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::time::SystemTime;

use serde_json::Value;

use crate::error::LocalizerError;

/// A decoded translation file, flattened per locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    pub path: PathBuf,

    /// File stem, prepended to every key of the file.
    pub namespace: String,

    /// Modification time observed when the file was read.
    pub modified: SystemTime,

    /// Locale code -> flattened key map (without namespace).
    pub locales: HashMap<String, HashMap<String, String>>,
}

impl TranslationFile {
    /// Read, decode and flatten the file at `path`.
    ///
    /// # Errors
    /// `FileOpen` when the file or its metadata cannot be read, `Decode` for
    /// invalid JSON, `InvalidLayout` when the top level is not an object.
    pub fn read(path: &Path, separator: &str) -> Result<Self, LocalizerError> {
        let open_error = |source| LocalizerError::FileOpen { path: path.to_path_buf(), source };

        let content = std::fs::read_to_string(path).map_err(open_error)?;
        let modified = std::fs::metadata(path).and_then(|m| m.modified()).map_err(open_error)?;

        let json: Value = serde_json::from_str(&content)
            .map_err(|source| LocalizerError::Decode { path: path.to_path_buf(), source })?;

        let Value::Object(root) = json else {
            return Err(LocalizerError::InvalidLayout { path: path.to_path_buf() });
        };

        let locales = root
            .iter()
            .map(|(locale, subtree)| (locale.clone(), flatten_json(subtree, separator, None)))
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            namespace: namespace_from_path(path),
            modified,
            locales,
        })
    }
}

/// Namespace of a translation file: its base name without extension.
///
/// # Examples
/// - `langs/ui.json` -> `ui`
/// - `langs/en/messages.json` -> `messages`
/// - `langs/menu.v2.json` -> `menu.v2`
#[must_use]
pub fn namespace_from_path(path: &Path) -> String {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Flatten nested JSON object into separator-joined key map.
///
/// Only string leaves are kept. Numbers, booleans, arrays and null are
/// dropped: translation values must be strings. Uses an explicit work list
/// so deeply nested input cannot overflow the stack.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use json_localizer::input::translation::flatten_json;
///
/// let json = json!({
///     "button": {
///         "play": "Play",
///         "size": 3
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("button.play"), Some(&"Play".to_string()));
/// assert_eq!(flattened.get("button.size"), None);
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    let mut stack = vec![(json, prefix.filter(|p| !p.is_empty()).map(str::to_string))];

    while let Some((node, prefix)) = stack.pop() {
        let Value::Object(map) = node else {
            continue;
        };

        for (key, value) in map {
            let full_key =
                prefix.as_ref().map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
            match value {
                Value::Object(_) => stack.push((value, Some(full_key))),
                Value::String(s) => {
                    result.insert(full_key, s.clone());
                }
                _ => {}
            }
        }
    }

    result
}
