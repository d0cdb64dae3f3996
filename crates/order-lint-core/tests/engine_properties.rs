//! Whole-pipeline properties of the ordering engine.
//!
//! Each case goes extract -> reorder -> patch -> apply, then re-extracts the
//! patched text and checks it is compliant and holds the same items.

use order_lint_core::sequence::{
    check_sequence, property_records, reorder, token_records, Item, ItemKind, KeyOrder,
    PatchOutcome, PatternClassifier, Policy, PriorityTable, Reordering, SeparatorPolicy,
    SequenceCheck, Span, Unclassified,
};

/// Applies the engine once and returns the rewritten text.
fn fix_once(
    source: &str,
    items: &[Item],
    policy: &Policy<'_>,
    separators: SeparatorPolicy<'_>,
) -> Option<String> {
    match check_sequence(source, items, policy, separators) {
        SequenceCheck::Compliant => None,
        SequenceCheck::Violation {
            patch: PatchOutcome::Patch(patch),
            ..
        } => patch.apply(source),
        SequenceCheck::Violation {
            patch: PatchOutcome::Unsafe(reason),
            ..
        } => panic!("unexpected unsafe patch: {reason:?}"),
    }
}

fn sorted_keys(items: &[Item]) -> Vec<String> {
    let mut keys: Vec<String> = items.iter().map(|i| i.key.clone()).collect();
    keys.sort();
    keys
}

/// Comma-separated identifiers, as in an import specifier list.
fn comma_items(source: &str) -> Vec<Item> {
    let mut items = Vec::new();
    let mut offset = 0;
    for part in source.split(',') {
        let trimmed = part.trim();
        if !trimmed.is_empty() {
            let start = offset + part.find(trimmed).unwrap_or(0);
            items.push(Item::new(
                Span::new(start, start + trimmed.len()),
                trimmed,
                ItemKind::Named,
            ));
        }
        offset += part.len() + 1;
    }
    items
}

const SPECIFIER_CASES: &[&str] = &[
    "foo, bar",
    "c, b, a",
    "Zed, alpha, Beta",
    "a,\n  d,\n  c,\n  b",
    "x as y, a as b, m",
    "b, a, b, a",
];

#[test]
fn specifier_fix_is_idempotent_and_preserves_items() {
    let policy = Policy::new(&Unclassified, KeyOrder::Ordinal);
    for source in SPECIFIER_CASES {
        let before = comma_items(source);
        let fixed = fix_once(source, &before, &policy, SeparatorPolicy::Positional)
            .unwrap_or_else(|| (*source).to_string());
        let after = comma_items(&fixed);

        assert_eq!(sorted_keys(&before), sorted_keys(&after), "case {source:?}");
        assert_eq!(
            reorder(&after, &policy),
            Reordering::Compliant,
            "not idempotent for {source:?}: {fixed:?}"
        );
    }
}

#[test]
fn positional_separators_keep_layout() {
    let source = "a,\n  d,\n  c,\n  b";
    let items = comma_items(source);
    let policy = Policy::new(&Unclassified, KeyOrder::Ordinal);
    let fixed = fix_once(source, &items, &policy, SeparatorPolicy::Positional).unwrap();
    assert_eq!(fixed, "a,\n  b,\n  c,\n  d");
}

#[test]
fn compliant_input_produces_no_patch() {
    let source = "bar, baz, foo";
    let items = comma_items(source);
    let policy = Policy::new(&Unclassified, KeyOrder::Ordinal);
    assert_eq!(
        check_sequence(source, &items, &policy, SeparatorPolicy::Positional),
        SequenceCheck::Compliant
    );
}

#[test]
fn equal_keys_are_stable() {
    let source = "b, a, b, a";
    let items = comma_items(source);
    let policy = Policy::new(&Unclassified, KeyOrder::Ordinal);
    let Reordering::Violation { target, .. } = reorder(&items, &policy) else {
        panic!("expected a violation");
    };
    assert_eq!(target.indices(), [1, 3, 0, 2]);
}

const CSS_CASES: &[&str] = &[
    "\n  color: red;\n  align-items: center;\n",
    "\n  z-index: 1;\n  margin: 0 auto;\n  display: flex;\n  border: 1px solid;\n",
    "\n  /* padding: 4px; */\n  width: 10px;\n  height: 2px;\n",
    "color: red; background: blue;",
    "\n  border: 1px solid #ccc;\n  align-items: center;\n",
    "\n  width: calc(100% - 2px);\n  color: red;\n",
    "\n  transition: opacity 0.2s ease-in-out, transform 0.2s;\n  background: url('img/a;b.png') no-repeat;\n  box-shadow: 0 0 0 1px rgba(0, 0, 0, 0.1) !important;\n",
    "\n  margin: 0;\n  color: red\n",
];

/// Property records of `source`; every CSS case is fully delimitable.
fn css_records(source: &str) -> Vec<Item> {
    property_records(source)
        .into_items()
        .unwrap_or_else(|| panic!("unsupported css: {source:?}"))
}

#[test]
fn css_fix_is_idempotent_and_preserves_records() {
    let policy = Policy::new(&Unclassified, KeyOrder::Collated);
    for source in CSS_CASES {
        let before = css_records(source);
        let fixed = fix_once(source, &before, &policy, SeparatorPolicy::Positional)
            .unwrap_or_else(|| (*source).to_string());
        let after = css_records(&fixed);

        assert_eq!(sorted_keys(&before), sorted_keys(&after), "case {source:?}");
        assert!(
            !reorder(&after, &policy).is_violation(),
            "not idempotent for {source:?}: {fixed:?}"
        );
    }
}

#[test]
fn commented_css_record_stays_put() {
    let source = "\n  /* padding: 4px; */\n  width: 10px;\n  height: 2px;\n";
    let items = css_records(source);
    let policy = Policy::new(&Unclassified, KeyOrder::Collated);
    let fixed = fix_once(source, &items, &policy, SeparatorPolicy::Positional).unwrap();
    assert_eq!(
        fixed,
        "\n  /* padding: 4px; */\n  height: 2px;\n  width: 10px;\n"
    );
}

#[test]
fn css_values_move_whole() {
    let policy = Policy::new(&Unclassified, KeyOrder::Collated);
    let source = "\n  width: calc(100% - 2px);\n  color: red\n";
    let fixed = fix_once(source, &css_records(source), &policy, SeparatorPolicy::Positional);
    assert_eq!(
        fixed.as_deref(),
        Some("\n  color: red;\n  width: calc(100% - 2px)\n")
    );
}

#[test]
fn commented_css_is_reported_without_patch() {
    let policy = Policy::new(&Unclassified, KeyOrder::Collated);
    for source in [
        "\n  color: red; /* brand */\n  align-items: center;\n",
        "\n  color: red;\n  /* layout */\n  align-items: center;\n",
    ] {
        let items = css_records(source);
        assert!(
            matches!(
                check_sequence(source, &items, &policy, SeparatorPolicy::Positional),
                SequenceCheck::Violation {
                    patch: PatchOutcome::Unsafe(_),
                    ..
                }
            ),
            "{source:?}"
        );
    }
}

const TOKEN_CASES: &[&str] = &[
    "mt-4 mt-2 flex",
    "flex fixed",
    "custom-a flex custom-b fixed",
    "flex  flex mt-2",
    "  mt-2   flex  ",
];

#[test]
fn token_fix_is_idempotent_and_dedups() {
    let table = PriorityTable::new(["fixed", "flex", "mt-2", "mt-4"]);
    let policy = Policy::new(&table, KeyOrder::Preserve).dedup(true);
    for source in TOKEN_CASES {
        let before = token_records(source);
        let fixed = fix_once(source, &before, &policy, SeparatorPolicy::Canonical(" "))
            .unwrap_or_else(|| (*source).to_string());
        let after = token_records(&fixed);

        let mut unique = sorted_keys(&before);
        unique.dedup();
        assert_eq!(unique, sorted_keys(&after), "case {source:?}");
        assert!(
            !reorder(&after, &policy).is_violation(),
            "not idempotent for {source:?}: {fixed:?}"
        );
    }
}

#[test]
fn tokens_follow_table_then_original_order() {
    let table = PriorityTable::new(["fixed", "flex", "mt-2", "mt-4"]);
    let policy = Policy::new(&table, KeyOrder::Preserve).dedup(true);

    let source = "mt-4 mt-2 flex";
    let fixed = fix_once(
        source,
        &token_records(source),
        &policy,
        SeparatorPolicy::Canonical(" "),
    );
    assert_eq!(fixed.as_deref(), Some("flex mt-2 mt-4"));

    let source = "custom-a flex custom-b fixed";
    let fixed = fix_once(
        source,
        &token_records(source),
        &policy,
        SeparatorPolicy::Canonical(" "),
    );
    assert_eq!(fixed.as_deref(), Some("fixed flex custom-a custom-b"));
}

#[test]
fn surrounding_whitespace_is_outside_the_patch() {
    let table = PriorityTable::new(["flex", "mt-2"]);
    let policy = Policy::new(&table, KeyOrder::Preserve).dedup(true);
    let source = "  mt-2   flex  ";
    let fixed = fix_once(
        source,
        &token_records(source),
        &policy,
        SeparatorPolicy::Canonical(" "),
    );
    assert_eq!(fixed.as_deref(), Some("  flex mt-2  "));
}

fn decl(key: &str, kind: ItemKind) -> Item {
    Item::new(Span::default(), key, kind)
}

#[test]
fn head_and_tail_buckets_bracket_the_default_bucket() {
    let classifier = PatternClassifier::from_patterns(["^react"], ["^\\."]).unwrap();
    let policy = Policy::new(&classifier, KeyOrder::Collated);

    let items = vec![
        decl("./local", ItemKind::Default),
        decl("lodash", ItemKind::Named),
        decl("react-dom", ItemKind::Default),
        decl("axios", ItemKind::Default),
        decl("react", ItemKind::Default),
        decl("polyfill", ItemKind::SideEffect),
    ];
    let Reordering::Violation { target, .. } = reorder(&items, &policy) else {
        panic!("expected a violation");
    };
    let keys: Vec<&str> = target.apply(&items).map(|i| i.key.as_str()).collect();
    assert_eq!(
        keys,
        ["react", "react-dom", "polyfill", "axios", "lodash", "./local"]
    );
}

#[test]
fn first_matching_pattern_wins() {
    let classifier = PatternClassifier::from_patterns(["^@app", "^@app/ui"], Vec::new()).unwrap();
    let policy = Policy::new(&classifier, KeyOrder::Collated);
    let items = vec![
        decl("@app/ui", ItemKind::Named),
        decl("@app/core", ItemKind::Named),
    ];
    let Reordering::Violation { target, .. } = reorder(&items, &policy) else {
        panic!("expected a violation");
    };
    assert_eq!(target.indices(), [1, 0]);
}
