use crate::todo::TaskFilter;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Settings for the interactive shell
///
/// Loaded from an optional TOML file. Every field has a default, so an empty
/// file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Filter used when the filter prompt is left blank
    pub default_filter: TaskFilter,
    /// Maximum number of undo snapshots to keep (unbounded when absent)
    ///
    /// Zero is rejected when the file is parsed.
    pub history_limit: Option<NonZeroUsize>,
    /// Print the menu before every prompt
    pub show_menu: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_filter: TaskFilter::all,
            history_limit: None,
            show_menu: true,
        }
    }
}

impl ShellConfig {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ShellConfig = toml::from_str(content)?;
        Ok(config)
    }
}

/// Reads the shell config file
pub struct ConfigLoader {
    file_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader; `None` means "use defaults"
    pub fn new(file_path: Option<impl AsRef<Path>>) -> Self {
        Self {
            file_path: file_path.map(|p| p.as_ref().to_path_buf()),
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Load the config
    ///
    /// A path given explicitly must exist and parse.
    pub fn load(&self) -> Result<ShellConfig> {
        let Some(path) = &self.file_path else {
            return Ok(ShellConfig::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = ShellConfig::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded shell config");
        Ok(config)
    }
}
