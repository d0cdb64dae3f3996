//! List rules command implementation.

use order_lint_rules::{Preset, RULES};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<24} {:<16} Description", "Code", "Name", "Options");
    println!("{}", "-".repeat(96));

    for rule in RULES {
        let options = if rule.options.is_empty() {
            "-".to_string()
        } else {
            rule.options.join(", ")
        };
        println!(
            "{:<8} {:<24} {:<16} {}",
            rule.code, rule.name, options, rule.description
        );
    }

    println!("\nPresets:");
    for preset in Preset::ALL {
        let default = if preset == Preset::default() {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<12} - {}{default}",
            preset.name(),
            preset.rule_names().join(", ")
        );
    }

    println!("\nUse --rules to run specific rules, e.g.:");
    println!("  order-lint check --rules inline-import-sort,tailwind-sort");
    println!("  order-lint check --rules OL001,OL004 --fix");
}
