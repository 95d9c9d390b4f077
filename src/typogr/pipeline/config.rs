//! Named processing configurations
//!
//! A configuration names an ordered list of rules and says whether the result
//! is HTML or the token stream of that HTML.

use crate::typogr::transforms::standard::TYPOGRIFY_RULES;
use crate::typogr::transforms::Rule;
use std::collections::HashMap;

/// A named configuration: rules to run and what to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub rules: Vec<Rule>,
    pub target: TargetSpec,
}

/// What to produce from the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSpec {
    /// The rewritten HTML
    Html,

    /// The tag/text token stream of the rewritten HTML
    Tokens,
}

impl PipelineConfig {
    pub fn html(name: impl Into<String>, description: impl Into<String>, rules: Vec<Rule>) -> Self {
        PipelineConfig {
            name: name.into(),
            description: description.into(),
            rules,
            target: TargetSpec::Html,
        }
    }
}

/// Registry of processing configurations
#[derive(Debug)]
pub struct ConfigRegistry {
    configs: HashMap<String, PipelineConfig>,
}

impl ConfigRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConfigRegistry {
            configs: HashMap::new(),
        }
    }

    /// Register a configuration, replacing any with the same name
    pub fn register(&mut self, config: PipelineConfig) {
        self.configs.insert(config.name.clone(), config);
    }

    pub fn get(&self, name: &str) -> Option<&PipelineConfig> {
        self.configs.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// List all configurations (sorted by name)
    pub fn list_all(&self) -> Vec<&PipelineConfig> {
        let mut configs: Vec<_> = self.configs.values().collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }

    /// Create registry with standard configurations
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(PipelineConfig::html(
            "typogrify",
            "All rules: amp, widont, smartypants, caps, init-quotes, ord",
            TYPOGRIFY_RULES.to_vec(),
        ));

        // One pipeline per rule, named after it
        for rule in Rule::ALL {
            registry.register(PipelineConfig::html(
                rule.name(),
                rule.description(),
                vec![rule],
            ));
        }

        // Token-only configuration (for debugging)
        registry.register(PipelineConfig {
            name: "tokens".into(),
            description: "Tag/text token stream as JSON".into(),
            rules: Vec::new(),
            target: TargetSpec::Tokens,
        });

        registry
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
