//! json-localizer
//!
//! Runtime translation table manager: loads locale-keyed JSON files into
//! flattened `namespace.path` tables and resolves keys with locale fallback,
//! `{name}` placeholders, polling hot reload and debug annotation.
//!
//! ```no_run
//! use json_localizer::Localizer;
//!
//! let localizer = Localizer::default();
//! localizer.load_from_directory("langs", false)?;
//! if !localizer.set_locale("fr") {
//!     // stays on the default locale
//! }
//! let text = localizer.text("messages.welcome").arg("username", "Oksi");
//! println!("{text}");
//! # Ok::<(), json_localizer::LocalizerError>(())
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod localizer;
pub mod placeholder;
pub mod scan;
pub mod store;

mod test_utils;

pub use config::{
    DebugOptions,
    LocalizerConfig,
};
pub use error::{
    ErrorSink,
    LocalizerError,
    ReportKind,
    TracingSink,
};
pub use localizer::{
    LocaleStats,
    Localizer,
};
pub use placeholder::{
    LocalizedString,
    substitute,
};
