//! # order-lint-js
//!
//! Tree-sitter based region extraction for JavaScript, JSX, TypeScript and
//! TSX.
//!
//! [`JsExtractor`] implements [`order_lint_core::SourceExtractor`]: it parses
//! a file once and reports
//!
//! - top-level import declarations with their specifiers and attached comments
//! - tagged template literals with the shape of their tag
//! - `class` / `className` JSX attributes
//!
//! Rules never see Tree-sitter nodes, only the resulting
//! [`SourceRegions`](order_lint_core::SourceRegions).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attributes;
mod extractor;
mod imports;
mod templates;

pub use extractor::{Dialect, JsExtractor};
