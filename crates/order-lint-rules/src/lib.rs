//! # order-lint-rules
//!
//! Built-in ordering rules for order-lint.
//!
//! Each rule picks one kind of region out of a file's
//! [`SourceRegions`](order_lint_core::SourceRegions), runs it through the
//! [`sequence`](order_lint_core::sequence) engine and reports the first
//! out-of-order entry with a fix attached when reordering is safe.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | OL001 | `inline-import-sort` | Named members of an import sorted alphabetically |
//! | OL002 | `multiline-import-sort` | Import declarations grouped by `head`/`tail` patterns and sorted |
//! | OL003 | `styled-component-sort` | Styled-component CSS properties sorted alphabetically |
//! | OL004 | `tailwind-sort` | Tailwind class names in priority order without duplicates |
//!
//! ## Usage
//!
//! ```ignore
//! use order_lint_core::Analyzer;
//! use order_lint_js::JsExtractor;
//! use order_lint_rules::{InlineImportSort, TailwindSort};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .extractor(JsExtractor::tsx())
//!     .rule(InlineImportSort::new().ignore_case(true))
//!     .rule(TailwindSort::new())
//!     .build()?;
//! ```
//!
//! Or from an `order-lint.toml`:
//!
//! ```ignore
//! let config = order_lint_core::Config::from_file("order-lint.toml".as_ref())?;
//! let rules = order_lint_rules::build_rules(&config)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod inline_import_sort;
mod multiline_import_sort;
mod presets;
mod registry;
mod report;
mod styled_component_sort;
pub mod tailwind_order;
mod tailwind_sort;

pub use inline_import_sort::InlineImportSort;
pub use multiline_import_sort::MultilineImportSort;
pub use presets::{all_rules, import_rules, recommended_rules, style_rules, Preset};
pub use registry::{
    build_rule, build_rules, build_selected, find_rule, RuleConfigError, RuleInfo, RULES,
};
pub use styled_component_sort::StyledComponentSort;
pub use tailwind_sort::TailwindSort;

/// Re-export core types for convenience.
pub use order_lint_core::{Rule, Severity, Violation};
