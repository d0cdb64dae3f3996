//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::FileContext;
use crate::fix::apply_fixes;
use crate::regions::{ExtractError, ExtractorBox, SourceExtractor};
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};
use crate::utils::allowance::check_allow_with_reason;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking the source tree.
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),

    /// Region extraction failed for a file.
    #[error("Extraction failed in {path}: {source}")]
    Extract {
        /// Path to the file that failed.
        path: PathBuf,
        /// Extractor error.
        source: ExtractError,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    extractors: Vec<ExtractorBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_extract_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds a host-language extractor.
    #[must_use]
    pub fn extractor<E: SourceExtractor + 'static>(mut self, extractor: E) -> Self {
        self.extractors.push(Box::new(extractor));
        self
    }

    /// Adds a boxed host-language extractor.
    #[must_use]
    pub fn extractor_box(mut self, extractor: ExtractorBox) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds an include glob pattern.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on extraction errors (default: false).
    #[must_use]
    pub fn fail_on_extract_error(mut self, fail: bool) -> Self {
        self.fail_on_extract_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved or a
    /// glob pattern is invalid.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());
        let mut include_patterns = self.include_patterns;
        include_patterns.extend(config.analyzer.include.iter().cloned());

        let exclude = compile_globs(&exclude_patterns)?;
        let include = compile_globs(&include_patterns)?;

        Ok(Analyzer {
            root,
            rules: self.rules,
            extractors: self.extractors,
            exclude_patterns,
            exclude,
            include,
            respect_gitignore: config.analyzer.respect_gitignore,
            config,
            fail_on_extract_error: self.fail_on_extract_error,
        })
    }
}

fn compile_globs(patterns: &[String]) -> Result<Vec<glob::Pattern>, AnalyzerError> {
    patterns
        .iter()
        .map(|p| glob::Pattern::new(p).map_err(AnalyzerError::from))
        .collect()
}

fn is_allowed(rule: &dyn Rule, content: &str, violation: &Violation) -> bool {
    let check =
        check_allow_with_reason(content, violation.location.line, rule.name(), rule.code());
    if let Some(reason) = check.reason() {
        debug!(
            "Allowed {} at line {}: {}",
            rule.name(),
            violation.location.line,
            reason
        );
    }
    check.is_allowed()
}

/// Upper bound on fixing passes over one file.
pub const MAX_FIX_PASSES: usize = 10;

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    extractors: Vec<ExtractorBox>,
    exclude_patterns: Vec<String>,
    exclude: Vec<glob::Pattern>,
    include: Vec<glob::Pattern>,
    respect_gitignore: bool,
    config: Config,
    fail_on_extract_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all files and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails, or if extraction
    /// fails while `fail_on_extract_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        for path in &files {
            let content = std::fs::read_to_string(path)?;
            if let Some(violations) = self.check_file(path, &content)? {
                result.violations.extend(violations);
                result.files_checked += 1;
            }
        }

        result.sort();
        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );
        Ok(result)
    }

    /// Analyzes all files, rewrites those with fixable violations and
    /// returns what remains.
    ///
    /// Overlapping fixes are applied over successive passes, at most
    /// [`MAX_FIX_PASSES`] per file.
    ///
    /// # Errors
    ///
    /// Same as [`Analyzer::analyze`], plus write failures.
    pub fn analyze_and_fix(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting fixing run at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        for path in &files {
            let content = std::fs::read_to_string(path)?;
            let Some(mut violations) = self.check_file(path, &content)? else {
                continue;
            };
            result.files_checked += 1;

            let mut text = content.clone();
            for pass in 1..=MAX_FIX_PASSES {
                let outcome = apply_fixes(&text, violations.iter().filter_map(Violation::patch));
                if !outcome.changed() {
                    break;
                }
                debug!(
                    "Fixed {} (pass {}): {} applied, {} skipped",
                    path.display(),
                    pass,
                    outcome.applied,
                    outcome.skipped
                );
                result.fixes_applied += outcome.applied;
                text = outcome.text;
                violations = self.check_file(path, &text)?.unwrap_or_default();
            }

            if text != content {
                std::fs::write(path, &text)?;
            }
            result.violations.extend(violations);
        }

        result.sort();
        info!(
            "Fixing complete: {} fixes applied, {} violations remain",
            result.fixes_applied,
            result.violations.len()
        );
        Ok(result)
    }

    /// Checks in-memory source text as if it lived at `path`.
    ///
    /// Returns an empty list when no extractor handles the file.
    ///
    /// # Errors
    ///
    /// Returns an error if extraction fails.
    pub fn analyze_source(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<Vec<Violation>, AnalyzerError> {
        let Some(extractor) = self.extractor_for(path) else {
            return Ok(Vec::new());
        };
        let regions = extractor
            .extract(content)
            .map_err(|source| AnalyzerError::Extract {
                path: path.to_path_buf(),
                source,
            })?;

        let ctx = FileContext::new(path, content, &self.root);
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let rule_violations = rule
                .check(&ctx, &regions)
                .into_iter()
                .filter(|v| !is_allowed(rule.as_ref(), content, v))
                .collect();
            violations.extend(self.apply_severity_override(rule.name(), rule_violations));
        }

        Ok(violations)
    }

    /// Runs the rules over one file, downgrading extraction failures to a
    /// warning unless configured otherwise. `None` means the file was skipped.
    fn check_file(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<Option<Vec<Violation>>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());
        match self.analyze_source(path, content) {
            Ok(violations) => Ok(Some(violations)),
            Err(AnalyzerError::Extract { path, source }) if !self.fail_on_extract_error => {
                warn!("Failed to extract {}: {}", path.display(), source);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    fn extractor_for(&self, path: &Path) -> Option<&dyn SourceExtractor> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))?;
        self.extractors
            .iter()
            .find(|e| e.extensions().contains(&ext.as_str()))
            .map(Box::as_ref)
    }

    /// Discovers all files some extractor can handle.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .parents(self.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || self.extractor_for(path).is_none() {
                continue;
            }
            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }
            if !self.should_include(path) {
                continue;
            }
            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        if self
            .exclude
            .iter()
            .any(|p| p.matches_path(path) || p.matches_path(relative))
        {
            return true;
        }

        // Directory-style patterns like "**/dist/**" also match as a path segment.
        let relative = relative.to_string_lossy();
        self.exclude_patterns.iter().any(|pattern| {
            let clean = pattern.replace("**/", "").replace("/**", "");
            !clean.is_empty()
                && !clean.contains('*')
                && relative
                    .split(['/', '\\'])
                    .any(|segment| segment == clean)
        })
    }

    fn should_include(&self, path: &Path) -> bool {
        if self.include.is_empty() {
            return true;
        }
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.include.iter().any(|p| p.matches_path(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::{ImportDecl, SourceRegions};
    use crate::sequence::Span;
    use crate::types::Severity;

    struct LineExtractor;

    impl SourceExtractor for LineExtractor {
        fn language_id(&self) -> &'static str {
            "lines"
        }
        fn extensions(&self) -> &'static [&'static str] {
            &[".txt"]
        }
        fn extract(&self, source: &str) -> Result<SourceRegions, ExtractError> {
            let mut regions = SourceRegions::new();
            let mut offset = 0;
            for line in source.split_inclusive('\n') {
                let text = line.trim_end();
                regions
                    .imports
                    .push(ImportDecl::new(Span::new(offset, offset + text.len()), text));
                offset += line.len();
            }
            Ok(regions)
        }
    }

    struct EveryLine;

    impl Rule for EveryLine {
        fn name(&self) -> &'static str {
            "every-line"
        }
        fn code(&self) -> &'static str {
            "T001"
        }
        fn check(&self, ctx: &FileContext, regions: &SourceRegions) -> Vec<Violation> {
            regions
                .imports
                .iter()
                .map(|d| {
                    Violation::new(
                        self.code(),
                        self.name(),
                        self.default_severity(),
                        ctx.location(d.span),
                        d.source.clone(),
                    )
                })
                .collect()
        }
    }

    fn analyzer() -> Analyzer {
        Analyzer::builder()
            .root("/project")
            .extractor(LineExtractor)
            .rule(EveryLine)
            .exclude("**/node_modules/**")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder() {
        let analyzer = Analyzer::builder().root(".").build().unwrap();
        assert!(analyzer.root().exists());
        assert_eq!(analyzer.rule_count(), 0);
    }

    #[test]
    fn test_invalid_glob() {
        let err = Analyzer::builder().exclude("[").build().err().unwrap();
        assert!(matches!(err, AnalyzerError::Glob(_)));
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = analyzer();
        assert!(analyzer.should_exclude(Path::new("/project/node_modules/x/a.txt")));
        assert!(analyzer.should_exclude(Path::new("/project/dist/a.txt")));
        assert!(!analyzer.should_exclude(Path::new("/project/src/a.txt")));
        assert!(!analyzer.should_exclude(Path::new("/project/src/distance.txt")));
    }

    #[test]
    fn test_unknown_extension_is_skipped() {
        let violations = analyzer()
            .analyze_source(Path::new("/project/a.rs"), "x\n")
            .unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_allow_directive_suppresses() {
        let content = "one\n// order-lint: allow(every-line)\nthree\n";
        let violations = analyzer()
            .analyze_source(Path::new("/project/a.txt"), content)
            .unwrap();
        let lines: Vec<usize> = violations.iter().map(|v| v.location.line).collect();
        assert_eq!(lines, vec![1]);
    }

    #[test]
    fn test_severity_override_and_disable() {
        let config = Config::parse("[rules.every-line]\nseverity = \"warning\"\n").unwrap();
        let analyzer = Analyzer::builder()
            .root("/project")
            .extractor(LineExtractor)
            .rule(EveryLine)
            .config(config)
            .build()
            .unwrap();
        let violations = analyzer
            .analyze_source(Path::new("/project/a.txt"), "a\n")
            .unwrap();
        assert_eq!(violations[0].severity, Severity::Warning);

        let config = Config::parse("[rules.every-line]\nenabled = false\n").unwrap();
        let analyzer = Analyzer::builder()
            .root("/project")
            .extractor(LineExtractor)
            .rule(EveryLine)
            .config(config)
            .build()
            .unwrap();
        assert!(analyzer
            .analyze_source(Path::new("/project/a.txt"), "a\n")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_discovery_and_include() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        std::fs::write(dir.path().join("src/a.txt"), "a\n").unwrap();
        std::fs::write(dir.path().join("src/b.md"), "b\n").unwrap();
        std::fs::write(dir.path().join("node_modules/pkg/c.txt"), "c\n").unwrap();
        std::fs::write(dir.path().join("top.txt"), "t\n").unwrap();

        let analyzer = Analyzer::builder()
            .root(dir.path())
            .extractor(LineExtractor)
            .rule(EveryLine)
            .exclude("**/node_modules/**")
            .build()
            .unwrap();
        let result = analyzer.analyze().unwrap();
        assert_eq!(result.files_checked, 2);

        let analyzer = Analyzer::builder()
            .root(dir.path())
            .extractor(LineExtractor)
            .rule(EveryLine)
            .include("src/**")
            .build()
            .unwrap();
        let result = analyzer.analyze().unwrap();
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.violations[0].location.file, PathBuf::from("src/a.txt"));
    }
}
