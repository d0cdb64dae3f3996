//! # order-lint-core
//!
//! Core framework for ordering lints over source text.
//!
//! This crate provides the foundational traits and types for building
//! ordering rules. It includes:
//!
//! - [`sequence`], the host-neutral ordering engine: extract items, classify
//!   and compare them, compute the canonical order, build a patch
//! - [`SourceExtractor`] for host-language adapters and the
//!   [`SourceRegions`] they produce
//! - [`Rule`] trait for per-file rules over those regions
//! - [`Analyzer`] for orchestrating lint and fix runs
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use order_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .extractor(JsExtractor::new())
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod fix;
mod regions;
mod rule;
mod types;

pub mod sequence;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, MAX_FIX_PASSES};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use fix::{apply_fixes, FixOutcome};
pub use regions::{
    ClassAttribute, ExtractError, ExtractorBox, ImportDecl, ImportSpecifier, SourceExtractor,
    SourceRegions, SpecifierKind, TaggedTemplate, TemplateTag,
};
pub use rule::{Rule, RuleBox};
pub use types::{
    LintResult, Location, Severity, SeverityCounts, Suggestion, Violation, ViolationDiagnostic,
};
pub use utils::allowance::AllowCheck;
