use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// ANSI escape used to highlight keys in debug output.
pub const DEFAULT_KEY_COLOR: &str = "\x1b[32m";
/// ANSI escape that resets the highlight.
pub const DEFAULT_RESET_COLOR: &str = "\x1b[0m";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "filePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizerConfig {
    /// Locale used as fallback and as the initial active locale.
    pub default_locale: String,

    /// Joins the namespace and nested path segments of a key.
    pub key_separator: String,

    /// File name globs a directory scan picks up.
    pub file_patterns: Vec<String>,

    pub debug: DebugOptions,
}

/// How `translate` annotates its output when debugging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebugOptions {
    pub enabled: bool,
    pub colored_output: bool,
    pub key_color: String,
    pub reset_color: String,
    /// Prepended to every found translation while enabled.
    pub prefix: String,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            colored_output: true,
            key_color: DEFAULT_KEY_COLOR.to_string(),
            reset_color: DEFAULT_RESET_COLOR.to_string(),
            prefix: String::new(),
        }
    }
}

impl LocalizerConfig {
    /// # Errors
    /// - Default locale is empty
    /// - Separator is empty
    /// - No file pattern, or an invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.default_locale.is_empty() {
            errors.push(ValidationError::new(
                "defaultLocale",
                "The default locale cannot be empty. Example: \"en\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.file_patterns.is_empty() {
            errors.push(ValidationError::new(
                "filePatterns",
                "At least one pattern is required. Example: [\"*.json\"]",
            ));
        }

        for (index, pattern) in self.file_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("filePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            key_separator: ".".to_string(),
            file_patterns: vec!["*.json".to_string()],
            debug: DebugOptions::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    /// `validate`: default settings pass
    #[rstest]
    fn validate_valid_settings() {
        let config = LocalizerConfig::default();

        assert_that!(config.validate(), ok(anything()));
    }

    /// Deserialize: missing fields take defaults
    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"defaultLocale": "fr", "debug": {"prefix": "[DBG] "}}"#;

        let config: LocalizerConfig = serde_json::from_str(json).unwrap();

        assert_that!(config.default_locale, eq("fr"));
        assert_that!(config.key_separator, eq("."));
        assert_that!(config.debug.prefix, eq("[DBG] "));
        assert_that!(config.debug.colored_output, eq(true));
        assert_that!(config.debug.key_color, eq(DEFAULT_KEY_COLOR));
    }

    /// Deserialize: `{}` equals the defaults
    #[rstest]
    fn deserialize_empty_settings() {
        let config: LocalizerConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, LocalizerConfig::default());
        assert_that!(config.file_patterns, elements_are![eq("*.json")]);
        assert_that!(config.debug.enabled, eq(false));
    }

    /// `validate`: empty key separator
    #[rstest]
    fn validate_invalid_key_separator_empty() {
        let config = LocalizerConfig { key_separator: String::new(), ..LocalizerConfig::default() };
        let result = config.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("keySeparator")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    /// `validate`: empty default locale
    #[rstest]
    fn validate_invalid_default_locale_empty() {
        let config =
            LocalizerConfig { default_locale: String::new(), ..LocalizerConfig::default() };
        let result = config.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("defaultLocale")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    /// `validate`: invalid glob names its index
    #[rstest]
    fn validate_invalid_file_pattern_invalid_glob() {
        let config = LocalizerConfig {
            file_patterns: vec!["*.json".to_string(), "*.{json".to_string()],
            ..LocalizerConfig::default()
        };

        let result = config.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("filePatterns[1]")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern")),
                field!(ValidationError.message, contains_substring("*.{json"))
            ]])
        );
    }

    /// `ConfigError::ValidationErrors`: numbered list
    #[rstest]
    fn config_error_validation_errors_format() {
        let config = LocalizerConfig {
            key_separator: String::new(),
            file_patterns: vec![],
            ..LocalizerConfig::default()
        };

        let errors = config.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. keySeparator"));
        assert_that!(error_message, contains_substring("2. filePatterns"));
        assert_that!(error_message, contains_substring("At least one pattern"));
    }
}
