//! Localizer configuration.
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_dir,
};
pub use types::{
    ConfigError,
    DEFAULT_KEY_COLOR,
    DEFAULT_RESET_COLOR,
    DebugOptions,
    LocalizerConfig,
    ValidationError,
};
