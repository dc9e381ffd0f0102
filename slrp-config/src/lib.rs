//! Configuration loader for the slrp command-line tool.
//!
//! `defaults/slrp.default.toml` is embedded into the binary so that documented defaults
//! and runtime behavior stay in sync. Callers layer user files and overrides on top of
//! those defaults via [`Loader`] before deserializing into [`SlrpConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError as Error;

const DEFAULT_TOML: &str = include_str!("../defaults/slrp.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SlrpConfig {
    pub parse: ParseConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    /// Reject matches that leave input unconsumed.
    pub exact: bool,
    pub mode: Mode,
}

/// Which grammar the tool runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Eval,
    Tokens,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
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

    /// Apply a single key/value override, e.g. `("parse.exact", false)`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SlrpConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SlrpConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.parse.exact);
        assert_eq!(config.parse.mode, Mode::Eval);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parse.exact", false)
            .expect("override to apply")
            .set_override("output.format", "json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.parse.exact);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn layers_user_file() {
        let dir = std::env::temp_dir().join(format!("slrp-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("slrp.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[parse]\nmode = \"tokens\"").unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.parse.mode, Mode::Tokens);
        assert!(config.parse.exact, "unset keys keep their defaults");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("definitely-not-here/slrp.toml")
            .build()
            .expect("missing optional file is ignored");
        assert_eq!(config.parse.mode, Mode::Eval);
    }

    #[test]
    fn required_file_must_exist() {
        assert!(Loader::new()
            .with_file("definitely-not-here/slrp.toml")
            .build()
            .is_err());
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Loader::new()
            .set_override("output.format", "xml")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
