//! Layered settings for the command line tool.
//!
//! `defaults/typogr.default.toml` is embedded into the binary. A user file
//! and single-key overrides are layered on top of it through [`Loader`]
//! before deserializing into [`TypogrConfig`].

use crate::typogr::pipeline::config::{ConfigRegistry, PipelineConfig};
use crate::typogr::transforms::{Rule, UnknownRule};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/typogr.default.toml");

/// Top-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct TypogrConfig {
    pub cli: CliConfig,
    #[serde(default)]
    pub pipelines: HashMap<String, PipelineSettings>,
}

/// Defaults for command line flags
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub pipeline: String,
    pub force: bool,
}

/// A user-defined pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    #[serde(default)]
    pub description: Option<String>,
    pub rules: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("pipeline '{pipeline}': {source}")]
    Rule {
        pipeline: String,
        #[source]
        source: UnknownRule,
    },
}

impl TypogrConfig {
    /// The built-in registry with the user pipelines registered on top.
    pub fn registry(&self) -> Result<ConfigRegistry, SettingsError> {
        let mut registry = ConfigRegistry::with_defaults();

        let mut names: Vec<_> = self.pipelines.keys().collect();
        names.sort();
        for name in names {
            let settings = &self.pipelines[name];
            let rules = settings
                .rules
                .iter()
                .map(|rule| rule.parse::<Rule>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| SettingsError::Rule {
                    pipeline: name.clone(),
                    source,
                })?;
            let description = settings
                .description
                .clone()
                .unwrap_or_else(|| format!("User pipeline: {}", settings.rules.join(", ")));
            registry.register(PipelineConfig::html(name.as_str(), description, rules));
        }

        Ok(registry)
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

    /// Layer a settings file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `cli.force` from a flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, SettingsError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<TypogrConfig, SettingsError> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write settings");
        file
    }

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.cli.pipeline, "typogrify");
        assert!(!config.cli.force);
        assert!(config.pipelines.is_empty());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("cli.force", true)
            .expect("override to apply")
            .set_override("cli.pipeline", "smartypants")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.cli.force);
        assert_eq!(config.cli.pipeline, "smartypants");
    }

    #[test]
    fn user_file_adds_pipelines() {
        let file = settings_file(
            "[cli]\npipeline = \"quotes\"\n\n[pipelines.quotes]\nrules = [\"smartypants\", \"init_quotes\"]\n",
        );
        let config = Loader::new().with_file(file.path()).build().expect("config to build");
        assert_eq!(config.cli.pipeline, "quotes");
        assert!(!config.cli.force);

        let registry = config.registry().expect("registry");
        let quotes = registry.get("quotes").expect("user pipeline");
        assert_eq!(quotes.rules, vec![Rule::Smartypants, Rule::InitQuotes]);
        assert_eq!(quotes.description, "User pipeline: smartypants, init_quotes");
        assert!(registry.has("typogrify"));
    }

    #[test]
    fn user_pipeline_replaces_builtin() {
        let file = settings_file(
            "[pipelines.amp]\ndescription = \"Caps instead\"\nrules = [\"caps\"]\n",
        );
        let registry = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build")
            .registry()
            .expect("registry");
        let amp = registry.get("amp").unwrap();
        assert_eq!(amp.rules, vec![Rule::Caps]);
        assert_eq!(amp.description, "Caps instead");
    }

    #[test]
    fn unknown_rule_is_reported() {
        let file = settings_file("[pipelines.broken]\nrules = [\"amp\", \"kerning\"]\n");
        let config = Loader::new().with_file(file.path()).build().expect("config to build");
        let err = config.registry().unwrap_err();
        assert_eq!(err.to_string(), "pipeline 'broken': unknown rule 'kerning'");
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("/nonexistent/typogr.toml").build();
        assert!(matches!(result, Err(SettingsError::Config(_))));
    }
}
