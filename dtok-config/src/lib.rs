//! Shared configuration loader for the dtok toolchain.
//!
//! `defaults/dtok.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`DtokConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/dtok.default.toml");

/// Top-level configuration consumed by the dtok build.
#[derive(Debug, Clone, Deserialize)]
pub struct DtokConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub build: BuildConfig,
}

/// Where the token document lives.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub tokens: String,
}

/// Where the generated stylesheet goes.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub stylesheet: String,
}

/// Mirrors the knobs exposed by the stylesheet build.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    pub mobile_set: String,
    pub desktop_set: String,
    pub desktop_min_width: u32,
    pub collisions: CollisionMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionMode {
    Warn,
    Error,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DtokConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DtokConfig, ConfigError> {
    Loader::new().build()
}
