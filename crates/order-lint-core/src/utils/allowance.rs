//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! // order-lint: allow(tailwind-sort) reason="generated markup"
//! /* order-lint: allow(OL002) */
//! {/* order-lint: allow(all) */}
//! ```
//!
//! A directive applies to its own line and to the line after it.

use std::collections::HashSet;

/// Result of checking for allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
pub struct AllowDirective {
    /// Rule names or codes that are allowed.
    pub rules: HashSet<String>,
    /// Optional reason for the allowance.
    pub reason: Option<String>,
}

impl AllowDirective {
    /// Returns true if the directive covers a rule given by name or code.
    #[must_use]
    pub fn covers(&self, name: &str, code: &str) -> bool {
        self.rules.contains("all") || self.rules.contains(name) || self.rules.contains(code)
    }
}

/// Checks source code for an allowance covering `line`.
///
/// # Arguments
///
/// * `content` - Source code content
/// * `line` - Line number to check (1-indexed)
/// * `rule_name` - Kebab-case name of the rule
/// * `rule_code` - Code of the rule (e.g., "OL004")
#[must_use]
pub fn check_allow_with_reason(
    content: &str,
    line: usize,
    rule_name: &str,
    rule_code: &str,
) -> AllowCheck {
    let lines: Vec<&str> = content.lines().collect();

    for check_line in [line.saturating_sub(1), line] {
        if check_line == 0 || check_line > lines.len() {
            continue;
        }

        if let Some(directive) = parse_allow_directive(lines[check_line - 1]) {
            if directive.covers(rule_name, rule_code) {
                return AllowCheck::Allowed {
                    reason: directive.reason,
                };
            }
        }
    }

    AllowCheck::Denied
}

/// Parses an allowance directive from a line containing a comment.
///
/// The directive may follow code on the same line.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    let comment_start = ["//", "/*"]
        .iter()
        .filter_map(|marker| line.find(marker))
        .min()?;
    let comment_content = line[comment_start + 2..].trim_start();

    let directive = comment_content.strip_prefix("order-lint:")?.trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules: HashSet<String> = allow_content[..paren_end]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = allow_content[paren_end + 1..].trim();
    let reason = rest
        .strip_prefix("reason=")
        .and_then(|r| r.trim().strip_prefix('"'))
        .and_then(|r| r.find('"').map(|end| r[..end].to_string()));

    Some(AllowDirective { rules, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allow_directive() {
        let directive = parse_allow_directive("// order-lint: allow(tailwind-sort)").unwrap();
        assert!(directive.rules.contains("tailwind-sort"));
        assert!(directive.reason.is_none());
    }

    #[test]
    fn test_parse_allow_directive_with_reason() {
        let directive =
            parse_allow_directive("// order-lint: allow(OL002) reason=\"polyfill first\"")
                .unwrap();
        assert!(directive.covers("multiline-import-sort", "OL002"));
        assert_eq!(directive.reason.as_deref(), Some("polyfill first"));
    }

    #[test]
    fn test_parse_block_and_jsx_comments() {
        assert!(parse_allow_directive("/* order-lint: allow(all) */").is_some());
        assert!(
            parse_allow_directive("  {/* order-lint: allow(tailwind-sort) */}").is_some()
        );
        assert!(parse_allow_directive("import a from 'a'; // order-lint: allow(OL002)").is_some());
    }

    #[test]
    fn test_parse_multiple_rules() {
        let directive =
            parse_allow_directive("// order-lint: allow(inline-import-sort, OL003)").unwrap();
        assert!(directive.covers("inline-import-sort", "OL001"));
        assert!(directive.covers("styled-component-sort", "OL003"));
        assert!(!directive.covers("tailwind-sort", "OL004"));
    }

    #[test]
    fn test_not_a_directive() {
        assert!(parse_allow_directive("// just a comment").is_none());
        assert!(parse_allow_directive("// order-lint: allow()").is_none());
        assert!(parse_allow_directive("const x = 'order-lint: allow(all)';").is_none());
    }

    #[test]
    fn test_check_allow_previous_line() {
        let content = "// order-lint: allow(multiline-import-sort) reason=\"legacy\"\nimport b from 'b';\nimport a from 'a';\n";

        let result = check_allow_with_reason(content, 2, "multiline-import-sort", "OL002");
        assert!(result.is_allowed());
        assert_eq!(result.reason(), Some("legacy"));

        assert!(!check_allow_with_reason(content, 3, "multiline-import-sort", "OL002").is_allowed());
        assert!(!check_allow_with_reason(content, 2, "tailwind-sort", "OL004").is_allowed());
    }

    #[test]
    fn test_check_allow_same_line() {
        let content = "import { b, a } from 'x'; // order-lint: allow(OL001)\n";
        assert!(check_allow_with_reason(content, 1, "inline-import-sort", "OL001").is_allowed());
    }

    #[test]
    fn test_check_allow_denied() {
        let content = "import { b, a } from 'x';\n";
        let result = check_allow_with_reason(content, 1, "inline-import-sort", "OL001");
        assert!(!result.is_allowed());
        assert_eq!(result.reason(), None);
    }
}
