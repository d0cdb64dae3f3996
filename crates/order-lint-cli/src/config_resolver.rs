//! Locating and loading `order-lint.toml`.
//!
//! Lookup order:
//!
//! 1. `--config` flag or `ORDER_LINT_CONFIG` (explicit path)
//! 2. `order-lint.toml` or `.order-lint.toml` in the checked directory, then
//!    in each ancestor up to the filesystem root
//! 3. `config.toml` in `$ORDER_LINT_CONFIG_DIR`, else `~/.order-lint/`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use order_lint_core::Config;

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found next to (or above) the checked path.
    Project(PathBuf),
    /// Found in the user's global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// The config file, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads the configuration, or returns defaults for [`ConfigSource::Default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        } else {
            tracing::debug!("Using config: {}", path.display());
        }
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// File names recognised in a project directory, in preference order.
const PROJECT_CONFIG_NAMES: &[&str] = &["order-lint.toml", ".order-lint.toml"];

/// File name inside the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration for a checked path using the environment.
#[must_use]
pub fn resolve(start: &Path, explicit: Option<&Path>) -> ConfigSource {
    Resolver {
        global_dir: global_config_dir(),
    }
    .resolve(start, explicit)
}

/// Config lookup with an injectable global directory.
#[derive(Debug, Clone, Default)]
struct Resolver {
    global_dir: Option<PathBuf>,
}

impl Resolver {
    fn resolve(&self, start: &Path, explicit: Option<&Path>) -> ConfigSource {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }
        if let Some(path) = project_config(start) {
            return ConfigSource::Project(path);
        }
        self.global_dir
            .as_deref()
            .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
            .filter(|path| path.is_file())
            .map_or(ConfigSource::Default, ConfigSource::Global)
    }
}

/// Nearest project config at or above `start`.
fn project_config(start: &Path) -> Option<PathBuf> {
    let start = start
        .canonicalize()
        .unwrap_or_else(|_| start.to_path_buf());
    let dir = if start.is_file() {
        start.parent()?.to_path_buf()
    } else {
        start
    };

    dir.ancestors().find_map(|ancestor| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| ancestor.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// `$ORDER_LINT_CONFIG_DIR`, else `~/.order-lint`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os("ORDER_LINT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".order-lint")))
}
