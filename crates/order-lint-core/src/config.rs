//! Configuration types for order-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::Severity;

/// Contents of an `order-lint.toml` file. Every table is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Named rule set enabling rules without a table of their own.
    pub preset: Option<String>,

    /// File discovery settings.
    pub analyzer: AnalyzerConfig,

    /// `[rules.<name>]` tables, keyed by rule name.
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a field has the wrong type.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// False only when the rule's table sets `enabled = false`.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rule(rule_name)
            .and_then(|c| c.enabled)
            .unwrap_or(true)
    }

    /// Severity configured for a rule, overriding its default.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rule(rule_name).and_then(|c| c.severity)
    }

    /// The `[rules.<name>]` table, if present.
    #[must_use]
    pub fn rule(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }
}

/// `[analyzer]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Directory to analyze when none is given.
    pub root: PathBuf,

    /// Glob patterns to skip.
    pub exclude: Vec<String>,

    /// Glob patterns to restrict analysis to (empty: every file an extractor handles).
    pub include: Vec<String>,

    /// Honour `.gitignore` and friends.
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude: ["**/node_modules/**", "**/dist/**", "**/build/**"]
                .into_iter()
                .map(String::from)
                .collect(),
            include: Vec::new(),
            respect_gitignore: true,
        }
    }
}

/// A `[rules.<name>]` table: the common keys plus rule-specific options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Explicitly enables or disables the rule.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Everything else in the table.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Boolean option, or `default` when absent or not a boolean.
    #[must_use]
    pub fn option_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// String list option. A bare string counts as a one-element list and
    /// non-string entries are ignored.
    #[must_use]
    pub fn option_strings(&self, key: &str) -> Vec<String> {
        let Some(value) = self.options.get(key) else {
            return Vec::new();
        };
        let values = match value {
            toml::Value::Array(items) => items.as_slice(),
            single => std::slice::from_ref(single),
        };
        values
            .iter()
            .filter_map(toml::Value::as_str)
            .map(String::from)
            .collect()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the expected shape.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.rules.is_empty());
        assert!(config
            .analyzer
            .exclude
            .contains(&"**/node_modules/**".to_string()));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "imports"

[analyzer]
root = "./src"
exclude = ["**/generated/**"]

[rules.inline-import-sort]
severity = "warning"
ignore_case = true

[rules.multiline-import-sort]
head = ["^react"]
tail = "^\\."

[rules.tailwind-sort]
enabled = false
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.preset.as_deref(), Some("imports"));
        assert_eq!(config.analyzer.root, PathBuf::from("./src"));
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**"]);

        assert!(config.is_rule_enabled("inline-import-sort"));
        assert!(!config.is_rule_enabled("tailwind-sort"));
        assert!(config.is_rule_enabled("styled-component-sort"));
        assert_eq!(
            config.rule_severity("inline-import-sort"),
            Some(Severity::Warning)
        );

        let inline = config.rule("inline-import-sort").unwrap();
        assert!(inline.option_bool("ignore_case", false));

        let multiline = config.rule("multiline-import-sort").unwrap();
        assert_eq!(multiline.option_strings("head"), vec!["^react"]);
        assert_eq!(multiline.option_strings("tail"), vec!["^\\."]);
        assert!(multiline.option_strings("missing").is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("preset = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = Config::parse("[rules.tailwind-sort]\nseverity = \"fatal\"\n").unwrap_err();
        assert!(err.to_string().contains("fatal"), "{err}");
    }
}
