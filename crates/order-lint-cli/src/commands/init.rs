//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "order-lint.toml";

const DEFAULT_CONFIG: &str = r#"# order-lint configuration

# Rule set to start from: "recommended" (all rules), "imports" or "styles".
preset = "recommended"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
]

# Respect .gitignore files
respect_gitignore = true

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden.
# Suppress a single report with `// order-lint: allow(<rule-name>)` on the
# reported line or the line above it.

[rules.inline-import-sort]
# severity = "warning"
ignore_case = false

[rules.multiline-import-sort]
# Modules matching a head pattern come first, tail patterns last.
head = ["^react"]
tail = []

# [rules.styled-component-sort]
# enabled = false

# [rules.tailwind-sort]
# severity = "warning"
"#;

/// Runs the init command in the current directory.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("."), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: order-lint check");
    println!("  3. Apply fixes: order-lint check --fix");

    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}
