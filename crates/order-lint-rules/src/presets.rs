//! Rule presets for common configurations.

use std::fmt;
use std::str::FromStr;

use order_lint_core::RuleBox;

use crate::registry::RuleConfigError;
use crate::{
    inline_import_sort, multiline_import_sort, styled_component_sort, tailwind_sort,
    InlineImportSort, MultilineImportSort, StyledComponentSort, TailwindSort,
};

/// Preset configurations for order-lint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Every rule.
    #[default]
    Recommended,
    /// Import ordering only.
    Imports,
    /// Style ordering only (CSS properties and class names).
    Styles,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Self; 3] = [Self::Recommended, Self::Imports, Self::Styles];

    /// Preset name as written in configuration.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Imports => "imports",
            Self::Styles => "styles",
        }
    }

    /// Names of the rules this preset enables.
    #[must_use]
    pub fn rule_names(self) -> &'static [&'static str] {
        match self {
            Self::Recommended => &[
                inline_import_sort::NAME,
                multiline_import_sort::NAME,
                styled_component_sort::NAME,
                tailwind_sort::NAME,
            ],
            Self::Imports => &[inline_import_sort::NAME, multiline_import_sort::NAME],
            Self::Styles => &[styled_component_sort::NAME, tailwind_sort::NAME],
        }
    }

    /// Returns true if the preset enables the named rule.
    #[must_use]
    pub fn includes(self, rule_name: &str) -> bool {
        self.rule_names().contains(&rule_name)
    }

    /// Returns the rules for this preset, with default settings.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Imports => import_rules(),
            Self::Styles => style_rules(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = RuleConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| RuleConfigError::UnknownPreset(s.to_string()))
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `inline-import-sort` (OL001)
/// - `multiline-import-sort` (OL002)
/// - `styled-component-sort` (OL003)
/// - `tailwind-sort` (OL004)
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(InlineImportSort::new()),
        Box::new(MultilineImportSort::new()),
        Box::new(StyledComponentSort::new()),
        Box::new(TailwindSort::new()),
    ]
}

/// Returns the import ordering rules.
#[must_use]
pub fn import_rules() -> Vec<RuleBox> {
    vec![
        Box::new(InlineImportSort::new()),
        Box::new(MultilineImportSort::new()),
    ]
}

/// Returns the style ordering rules.
#[must_use]
pub fn style_rules() -> Vec<RuleBox> {
    vec![Box::new(StyledComponentSort::new()), Box::new(TailwindSort::new())]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    recommended_rules()
}
