//! Configuration loading for tinymarkup
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. `defaults/tinymarkup.default.toml`, compiled into the crate
//! 2. a TOML file: `--config <file>`, or `tinymarkup.toml` in the working directory
//! 3. single-key overrides such as `--strict` (`parser.strict`) and `--indent`
//!    (`serializer.indent_width`)
//!
//! [`Loader`] stacks the layers and deserializes the result into [`TinyMarkupConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/tinymarkup.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TinyMarkupConfig {
    pub parser: ParserConfig,
    pub serializer: SerializerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Report malformed input as an error rather than recovering
    pub strict: bool,
    /// Nesting levels the parser descends into, counting the root
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: 256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SerializerConfig {
    pub indent_width: usize,
    /// Registry name of the default output format
    pub format: String,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            format: "markup".to_string(),
        }
    }
}

/// Stacks configuration layers on top of the compiled-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only the compiled-in `tinymarkup.default.toml`
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file the user named explicitly; `build` fails if it does not exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Add a TOML file that may be absent, such as `tinymarkup.toml` in the working directory
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        log::debug!("config layer {} (required: {required})", path.display());
        let layer = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(layer);
        self
    }

    /// Set one dotted key, e.g. `parser.strict`, above every file layer
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers into a [`TinyMarkupConfig`]
    pub fn build(self) -> Result<TinyMarkupConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the embedded defaults without any overrides.
pub fn load_defaults() -> Result<TinyMarkupConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parser, ParserConfig::default());
        assert_eq!(config.serializer, SerializerConfig::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parser.strict", true)
            .expect("override to apply")
            .set_override("serializer.indent_width", 4i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.parser.strict);
        assert_eq!(config.serializer.indent_width, 4);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[serializer]\nformat = \"json\"\n[parser]\nmax_depth = 16")
            .expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.serializer.format, "json");
        assert_eq!(config.serializer.indent_width, 2);
        assert_eq!(config.parser.max_depth, 16);
        assert!(!config.parser.strict);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/tinymarkup.toml")
            .build()
            .expect("config to build");
        assert!(!config.parser.strict);
    }
}
