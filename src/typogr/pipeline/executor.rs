//! Pipeline executor that runs processing configurations

use crate::typogr::pipeline::config::{ConfigRegistry, PipelineConfig, TargetSpec};
use crate::typogr::token::Token;
use crate::typogr::transforms::standard::TOKENIZATION;
use crate::typogr::transforms::{pipe, Rule, UnknownRule};

/// Errors during pipeline execution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    #[error("pipeline '{0}' not found")]
    PipelineNotFound(String),

    #[error(transparent)]
    UnknownRule(#[from] UnknownRule),
}

/// Output from pipeline execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutput {
    Html(String),
    Tokens(Vec<Token>),
}

/// Executes processing configurations
pub struct PipelineExecutor {
    registry: ConfigRegistry,
}

impl PipelineExecutor {
    /// Create executor with default configurations
    pub fn new() -> Self {
        Self {
            registry: ConfigRegistry::with_defaults(),
        }
    }

    /// Create executor with custom registry
    pub fn with_registry(registry: ConfigRegistry) -> Self {
        Self { registry }
    }

    /// Execute a named configuration
    pub fn execute(&self, config_name: &str, source: &str) -> Result<ExecutionOutput, ExecutionError> {
        let config = self
            .registry
            .get(config_name)
            .ok_or_else(|| ExecutionError::PipelineNotFound(config_name.to_string()))?;

        tracing::debug!(
            pipeline = %config.name,
            rules = config.rules.len(),
            bytes = source.len(),
            "running pipeline"
        );

        let html = self.execute_rules(&config.rules, source);
        Ok(match config.target {
            TargetSpec::Html => ExecutionOutput::Html(html),
            TargetSpec::Tokens => ExecutionOutput::Tokens(TOKENIZATION.run(html)),
        })
    }

    /// Run an ad-hoc chain of rules
    pub fn execute_rules(&self, rules: &[Rule], source: &str) -> String {
        if rules.is_empty() {
            return source.to_string();
        }
        pipe(rules.iter().copied()).run(source.to_string())
    }

    /// Run a comma separated list of rule names, e.g. `amp,caps`
    pub fn execute_rule_list(&self, list: &str, source: &str) -> Result<String, ExecutionError> {
        let rules = Rule::parse_list(list)?;
        tracing::debug!(rules = %list, "running ad-hoc rule chain");
        Ok(self.execute_rules(&rules, source))
    }

    /// List all available configurations
    pub fn list_configs(&self) -> Vec<&PipelineConfig> {
        self.registry.list_all()
    }

    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }
}

impl Default for PipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_creation() {
        let executor = PipelineExecutor::new();
        assert!(!executor.list_configs().is_empty());
    }

    #[test]
    fn test_execute_typogrify() {
        let executor = PipelineExecutor::default();
        let output = executor.execute("typogrify", "One & two").unwrap();
        assert_eq!(
            output,
            ExecutionOutput::Html("One <span class=\"amp\">&amp;</span> two".to_string())
        );
    }

    #[test]
    fn test_execute_single_rule() {
        let executor = PipelineExecutor::new();
        let output = executor.execute("ord", "3rd").unwrap();
        assert_eq!(
            output,
            ExecutionOutput::Html("3<span class=\"ord\">rd</span>".to_string())
        );
    }

    #[test]
    fn test_execute_tokens() {
        let executor = PipelineExecutor::new();
        match executor.execute("tokens", "<p>x</p>").unwrap() {
            ExecutionOutput::Tokens(tokens) => assert_eq!(tokens.len(), 3),
            other => panic!("Expected tokens, got {:?}", other),
        }
    }

    #[test]
    fn test_tokens_target_runs_tokenization_stage() {
        let executor = PipelineExecutor::new();
        let source = "<b>x</b> end.";
        let expected = crate::typogr::lexing::tokenize(source);
        assert_eq!(
            executor.execute("tokens", source).unwrap(),
            ExecutionOutput::Tokens(expected)
        );
    }

    #[test]
    fn test_unknown_pipeline() {
        let executor = PipelineExecutor::new();
        let err = executor.execute("nonexistent", "x").unwrap_err();
        assert_eq!(err, ExecutionError::PipelineNotFound("nonexistent".to_string()));
        assert_eq!(err.to_string(), "pipeline 'nonexistent' not found");
    }

    #[test]
    fn test_rule_list() {
        let executor = PipelineExecutor::new();
        assert_eq!(
            executor.execute_rule_list("smart-dashes, smart-ellipses", "a -- b...").unwrap(),
            "a &#8211; b&#8230;"
        );
        assert!(matches!(
            executor.execute_rule_list("amp,bogus", "x"),
            Err(ExecutionError::UnknownRule(_))
        ));
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = ConfigRegistry::new();
        registry.register(PipelineConfig::html("loud", "caps only", vec![Rule::Caps]));
        let executor = PipelineExecutor::with_registry(registry);
        assert!(executor.execute("typogrify", "x").is_err());
        assert_eq!(
            executor.execute("loud", "NASA").unwrap(),
            ExecutionOutput::Html("<span class=\"caps\">NASA</span>".to_string())
        );
    }
}
