//! Shared configuration loader for blockkit renderers.
//!
//! `defaults/blockkit.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`BlockkitConfig`], then hand the relevant section to the renderer as
//! [`FormatOptions`].

use blockkit_babel::FormatOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/blockkit.default.toml");

/// Top-level configuration consumed by blockkit applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockkitConfig {
    pub mrkdwn: MrkdwnConfig,
}

/// Mirrors the knobs exposed by the mrkdwn converter.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MrkdwnConfig {
    pub exact_mode: bool,
}

impl From<MrkdwnConfig> for FormatOptions {
    fn from(config: MrkdwnConfig) -> Self {
        FormatOptions {
            exact_mode: config.exact_mode,
        }
    }
}

impl From<&BlockkitConfig> for FormatOptions {
    fn from(config: &BlockkitConfig) -> Self {
        config.mrkdwn.into()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BlockkitConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BlockkitConfig, ConfigError> {
    Loader::new().build()
}
