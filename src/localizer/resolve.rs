//! Key lookup with locale fallback, locale selection and debug rendering.

use std::collections::HashMap;
use std::hash::BuildHasher;

use super::Localizer;
use crate::config::DebugOptions;
use crate::placeholder::{
    LocalizedString,
    substitute,
};

/// Number of keys loaded for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStats {
    pub locale: String,
    pub keys: usize,
}

impl Localizer {
    /// Switch the active locale.
    ///
    /// Succeeds only for a locale already present in the tables (loaded from
    /// a file or added with [`Localizer::register_locale`]); otherwise the
    /// active locale is left unchanged.
    #[must_use]
    pub fn set_locale(&self, locale: &str) -> bool {
        let mut state = self.state.write();
        if !state.store.contains_locale(locale) {
            tracing::debug!(locale, "Refusing to switch to unknown locale");
            return false;
        }
        state.active_locale = locale.to_string();
        true
    }

    /// Make `locale` known without loading any key for it.
    pub fn register_locale(&self, locale: &str) {
        self.state.write().store.register_locale(locale);
    }

    #[must_use]
    pub fn locale(&self) -> String {
        self.state.read().active_locale.clone()
    }

    /// Resolve `key` to display text.
    ///
    /// Lookup order: active locale, default locale, then the placeholder
    /// `[Missing:<key>]`. With debug mode on, found text is preceded by the
    /// debug prefix and the bracketed key. Missing text never gets the
    /// prefix; it is only wrapped in the key color when colored output is on.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        let state = self.state.read();
        let found = state
            .store
            .get(&state.active_locale, key)
            .or_else(|| state.store.get(&self.config.default_locale, key));

        match found {
            Some(text) if state.debug.enabled => {
                let mut rendered = debug_prefix(&state.debug, key);
                rendered.push_str(text);
                rendered
            }
            Some(text) => text.to_string(),
            None => missing(&state.debug, key),
        }
    }

    /// [`Localizer::translate`] followed by placeholder substitution.
    #[must_use]
    pub fn translate_with<S: BuildHasher>(
        &self,
        key: &str,
        params: &HashMap<String, String, S>,
    ) -> String {
        substitute(&self.translate(key), params)
    }

    /// Bundle `key` with placeholder values for later display.
    #[must_use]
    pub fn text(&self, key: impl Into<String>) -> LocalizedString<'_> {
        LocalizedString::new(self, key)
    }

    /// True if `key` exists in the active or the default locale.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        let state = self.state.read();
        state.store.contains_key(&state.active_locale, key)
            || state.store.contains_key(&self.config.default_locale, key)
    }

    pub fn set_debug_mode(&self, enabled: bool) {
        self.state.write().debug.enabled = enabled;
    }

    #[must_use]
    pub fn is_debug_mode_on(&self) -> bool {
        self.state.read().debug.enabled
    }

    pub fn set_debug_options(&self, options: DebugOptions) {
        self.state.write().debug = options;
    }

    #[must_use]
    pub fn debug_options(&self) -> DebugOptions {
        self.state.read().debug.clone()
    }

    /// Key counts per locale, sorted by locale code.
    #[must_use]
    pub fn stats(&self) -> Vec<LocaleStats> {
        let state = self.state.read();
        let mut stats: Vec<_> = state
            .store
            .locales()
            .map(|(locale, keys)| LocaleStats { locale: locale.to_string(), keys })
            .collect();
        stats.sort_by(|a, b| a.locale.cmp(&b.locale));
        stats
    }

    /// Known locale codes, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<String> {
        self.stats().into_iter().map(|stat| stat.locale).collect()
    }
}

/// `<prefix><color>[key]<reset> ` or `<prefix>[key] `.
fn debug_prefix(debug: &DebugOptions, key: &str) -> String {
    if debug.colored_output {
        format!("{}{}[{key}]{} ", debug.prefix, debug.key_color, debug.reset_color)
    } else {
        format!("{}[{key}] ", debug.prefix)
    }
}

fn missing(debug: &DebugOptions, key: &str) -> String {
    if debug.enabled && debug.colored_output {
        format!("{}[Missing:{key}]{}", debug.key_color, debug.reset_color)
    } else {
        format!("[Missing:{key}]")
    }
}
