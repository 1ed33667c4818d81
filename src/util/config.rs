//! Configuration file support.
//!
//! An optional `inventory.toml` at the inventory root overrides the default
//! directory layout and report policies:
//!
//! ```toml
//! [paths]
//! runtimes = "runtimes"
//! clients = "clients"
//! output = "public/extension_support.html"
//!
//! [report]
//! drop_unsupported = false
//! include_empty_form_factors = false
//! extra_extensions = ["XR_KHR_loader_init"]
//! ```
//!
//! Relative paths are resolved against the inventory root. Command-line flags
//! take precedence over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the configuration file looked up in the inventory root.
pub const CONFIG_FILE_NAME: &str = "inventory.toml";

/// Inventory configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output locations
    pub paths: PathsConfig,

    /// Report policies
    pub report: ReportConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory of runtime inventory files
    pub runtimes: Option<PathBuf>,

    /// Directory of client inventory files
    pub clients: Option<PathBuf>,

    /// Rendered report location
    pub output: Option<PathBuf>,
}

/// Report policies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Leave extensions nobody supports out of the support table
    pub drop_unsupported: bool,

    /// Give runtimes and clients without form factors an empty row
    pub include_empty_form_factors: bool,

    /// Extension names to list even if no inventory file mentions them
    pub extra_extensions: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }
}
