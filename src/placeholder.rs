//! `{name}` placeholder substitution.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use crate::localizer::Localizer;

/// Replace `{name}` tokens in `text` with values from `params`.
///
/// Single left-to-right pass, case-sensitive, no nesting and no escaping.
/// A token whose name is not in `params` is kept as written, and an
/// unterminated `{` keeps the rest of the text verbatim.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use json_localizer::placeholder::substitute;
///
/// let params = HashMap::from([("name".to_string(), "Oksi".to_string())]);
/// assert_eq!(substitute("Hi {name}!", &params), "Hi Oksi!");
/// assert_eq!(substitute("Hi {other}!", &params), "Hi {other}!");
/// ```
#[must_use]
pub fn substitute<S: BuildHasher>(text: &str, params: &HashMap<String, String, S>) -> String {
    let mut result = String::with_capacity(text.len() + 32);
    let mut rest = text;

    while let Some((before, after_open)) = rest.split_once('{') {
        result.push_str(before);

        let Some((name, after_close)) = after_open.split_once('}') else {
            result.push('{');
            result.push_str(after_open);
            return result;
        };

        match params.get(name) {
            Some(value) => result.push_str(value),
            None => {
                result.push('{');
                result.push_str(name);
                result.push('}');
            }
        }
        rest = after_close;
    }

    result.push_str(rest);
    result
}

/// A translation key with its placeholder values, resolved on display.
///
/// ```
/// use json_localizer::Localizer;
///
/// let localizer = Localizer::default();
/// let text = localizer.text("messages.welcome").arg("username", "Oksi");
/// assert_eq!(text.to_string(), "[Missing:messages.welcome]");
/// ```
#[derive(Debug, Clone)]
pub struct LocalizedString<'a> {
    localizer: &'a Localizer,
    key: String,
    params: HashMap<String, String>,
}

impl<'a> LocalizedString<'a> {
    #[must_use]
    pub fn new(localizer: &'a Localizer, key: impl Into<String>) -> Self {
        Self { localizer, key: key.into(), params: HashMap::new() }
    }

    /// Add one placeholder value.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Add several placeholder values.
    #[must_use]
    pub fn args<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params.extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolve against the current locale and apply the placeholders.
    #[must_use]
    pub fn resolve(&self) -> String {
        let base = self.localizer.translate(&self.key);
        if self.params.is_empty() { base } else { substitute(&base, &self.params) }
    }
}

impl fmt::Display for LocalizedString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve())
    }
}

impl From<LocalizedString<'_>> for String {
    fn from(value: LocalizedString<'_>) -> Self {
        value.resolve()
    }
}
