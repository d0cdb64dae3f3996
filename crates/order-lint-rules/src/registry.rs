//! Building rule sets from configuration.

use order_lint_core::sequence::PatternError;
use order_lint_core::{Config, RuleBox, RuleConfig};
use tracing::{debug, warn};

use crate::presets::Preset;
use crate::{
    inline_import_sort, multiline_import_sort, styled_component_sort, tailwind_sort,
    InlineImportSort, MultilineImportSort, StyledComponentSort, TailwindSort,
};

/// Errors building rules from configuration.
#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    /// A rule option holds an invalid regex.
    #[error("rule '{rule}': {source}")]
    InvalidPattern {
        /// Rule name.
        rule: &'static str,
        /// Underlying pattern error.
        #[source]
        source: PatternError,
    },

    /// The configured preset does not exist.
    #[error("unknown preset '{0}' (expected recommended, imports or styles)")]
    UnknownPreset(String),

    /// A requested rule does not exist.
    #[error("unknown rule '{0}'")]
    UnknownRule(String),
}

/// Static description of a built-in rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    /// Rule code.
    pub code: &'static str,
    /// Rule name.
    pub name: &'static str,
    /// What the rule checks.
    pub description: &'static str,
    /// Recognised option keys.
    pub options: &'static [&'static str],
}

/// Every built-in rule, in code order.
pub const RULES: &[RuleInfo] = &[
    RuleInfo {
        code: inline_import_sort::CODE,
        name: inline_import_sort::NAME,
        description: "Named import members sorted alphabetically",
        options: &["ignore_case"],
    },
    RuleInfo {
        code: multiline_import_sort::CODE,
        name: multiline_import_sort::NAME,
        description: "Import declarations grouped by head/tail patterns and sorted",
        options: &["head", "tail"],
    },
    RuleInfo {
        code: styled_component_sort::CODE,
        name: styled_component_sort::NAME,
        description: "Styled-component CSS properties sorted alphabetically",
        options: &[],
    },
    RuleInfo {
        code: tailwind_sort::CODE,
        name: tailwind_sort::NAME,
        description: "Tailwind class names in priority order without duplicates",
        options: &[],
    },
];

/// Looks up a rule by name or code.
#[must_use]
pub fn find_rule(name_or_code: &str) -> Option<&'static RuleInfo> {
    RULES
        .iter()
        .find(|r| r.name == name_or_code || r.code.eq_ignore_ascii_case(name_or_code))
}

/// Builds one rule from its configuration table.
///
/// # Errors
///
/// Returns an error if the name is unknown or an option is invalid.
pub fn build_rule(name: &str, config: &RuleConfig) -> Result<RuleBox, RuleConfigError> {
    let info = find_rule(name).ok_or_else(|| RuleConfigError::UnknownRule(name.to_string()))?;
    let rule: RuleBox = match info.name {
        inline_import_sort::NAME => Box::new(InlineImportSort::from_config(config)),
        multiline_import_sort::NAME => Box::new(
            MultilineImportSort::from_config(config).map_err(|source| {
                RuleConfigError::InvalidPattern {
                    rule: multiline_import_sort::NAME,
                    source,
                }
            })?,
        ),
        styled_component_sort::NAME => Box::new(StyledComponentSort::from_config(config)),
        tailwind_sort::NAME => Box::new(TailwindSort::from_config(config)),
        other => return Err(RuleConfigError::UnknownRule(other.to_string())),
    };
    Ok(rule)
}

/// Builds the enabled rules of a configuration.
///
/// A rule runs when its `[rules.<name>]` table says `enabled = true`, or
/// when the table leaves `enabled` unset and the preset includes it.
///
/// # Errors
///
/// Returns an error for an unknown preset or an invalid rule option.
pub fn build_rules(config: &Config) -> Result<Vec<RuleBox>, RuleConfigError> {
    let preset = config
        .preset
        .as_deref()
        .map_or(Ok(Preset::default()), |name| name.parse::<Preset>())?;

    for name in config.rules.keys() {
        if find_rule(name).is_none() {
            warn!(rule = %name, "ignoring configuration for unknown rule");
        }
    }

    let defaults = RuleConfig::default();
    let mut rules = Vec::new();
    for info in RULES {
        let rule_config = config.rule(info.name).unwrap_or(&defaults);
        if !rule_config.enabled.unwrap_or_else(|| preset.includes(info.name)) {
            debug!(rule = info.name, "rule disabled");
            continue;
        }
        rules.push(build_rule(info.name, rule_config)?);
    }
    Ok(rules)
}

/// Builds the rules named (by name or code) in `selection`, regardless of
/// the preset, with options taken from their configuration tables.
///
/// # Errors
///
/// Returns an error if a name matches no built-in rule or an option is
/// invalid.
pub fn build_selected<S: AsRef<str>>(
    config: &Config,
    selection: &[S],
) -> Result<Vec<RuleBox>, RuleConfigError> {
    let defaults = RuleConfig::default();
    let mut names: Vec<&'static str> = Vec::new();
    for wanted in selection {
        let info = find_rule(wanted.as_ref())
            .ok_or_else(|| RuleConfigError::UnknownRule(wanted.as_ref().to_string()))?;
        if !names.contains(&info.name) {
            names.push(info.name);
        }
    }
    names
        .into_iter()
        .map(|name| build_rule(name, config.rule(name).unwrap_or(&defaults)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rules: &[RuleBox]) -> Vec<&'static str> {
        rules.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn registry_matches_rule_impls() {
        let built = crate::all_rules();
        assert_eq!(built.len(), RULES.len());
        for (info, rule) in RULES.iter().zip(&built) {
            assert_eq!(info.name, rule.name());
            assert_eq!(info.code, rule.code());
        }
    }

    #[test]
    fn default_config_builds_recommended() {
        let rules = build_rules(&Config::default()).unwrap();
        assert_eq!(names(&rules), Preset::Recommended.rule_names());
    }

    #[test]
    fn preset_and_overrides_combine() {
        let config = Config::parse(
            r#"
preset = "imports"

[rules.inline-import-sort]
enabled = false

[rules.tailwind-sort]
enabled = true
severity = "warning"
"#,
        )
        .unwrap();
        let rules = build_rules(&config).unwrap();
        assert_eq!(names(&rules), ["multiline-import-sort", "tailwind-sort"]);
        assert_eq!(rules[1].default_severity(), order_lint_core::Severity::Warning);
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        let config = Config::parse("[rules.multiline-import-sort]\ntail = [\"[\"]\n").unwrap();
        let err = build_rules(&config).err().unwrap();
        assert!(matches!(
            err,
            RuleConfigError::InvalidPattern {
                rule: "multiline-import-sort",
                ..
            }
        ));
        assert!(err.to_string().contains("tail"));
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let config = Config::parse("preset = \"everything\"\n").unwrap();
        assert!(matches!(
            build_rules(&config),
            Err(RuleConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn selection_by_name_or_code() {
        let config = Config::parse("preset = \"imports\"\n").unwrap();
        let rules = build_selected(&config, &["OL004", "inline-import-sort", "tailwind-sort"]).unwrap();
        assert_eq!(names(&rules), ["tailwind-sort", "inline-import-sort"]);

        let err = build_selected(&config, &["OL999"]).err().unwrap();
        assert!(matches!(err, RuleConfigError::UnknownRule(name) if name == "OL999"));
    }

    #[test]
    fn selection_keeps_rule_options() {
        let config = Config::parse("[rules.multiline-import-sort]\nhead = [\"(\"]\n").unwrap();
        assert!(matches!(
            build_selected(&config, &["OL002"]),
            Err(RuleConfigError::InvalidPattern { .. })
        ));
        assert!(build_selected(&config, &["OL001"]).is_ok());
    }

    #[test]
    fn find_rule_is_case_insensitive_on_codes() {
        assert_eq!(find_rule("ol002").map(|r| r.name), Some("multiline-import-sort"));
        assert!(find_rule("OL001x").is_none());
    }
}
