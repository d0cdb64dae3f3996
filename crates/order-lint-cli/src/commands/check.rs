//! Check command implementation.

use anyhow::{Context, Result};
use order_lint_core::{Analyzer, Config, RuleBox};
use order_lint_js::JsExtractor;
use order_lint_rules::{build_rules, build_selected};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Flags of the `check` subcommand.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// How to print the result.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes to run instead of the configured set.
    pub rules: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Rewrite files with fixes applied.
    pub fix: bool,
}

/// Runs the check command. Returns true if error-severity violations remain.
pub fn run(path: &Path, options: &CheckOptions, source: &ConfigSource) -> Result<bool> {
    let config = source.load()?;
    let rules = select_rules(&config, options.rules.as_deref())?;

    let analyzer = JsExtractor::all()
        .into_iter()
        .fold(Analyzer::builder().root(path), |b, e| b.extractor_box(e))
        .excludes(options.exclude.iter().cloned())
        .rules(rules)
        .config(config)
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = if options.fix {
        analyzer.analyze_and_fix().context("Fixing failed")?
    } else {
        analyzer.analyze().context("Analysis failed")?
    };

    super::output::print(&result, options.format, analyzer.root())?;

    Ok(result.has_errors())
}

fn select_rules(config: &Config, filter: Option<&str>) -> Result<Vec<RuleBox>> {
    let Some(filter) = filter else {
        return build_rules(config).context("Invalid rule configuration");
    };
    let names: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    build_selected(config, names.as_slice()).context("Invalid --rules selection")
}
