//! Global context for inventory operations.
//!
//! Provides centralized access to the inventory root, its configuration,
//! and the input/output locations derived from them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::InventoryKind;
use crate::ops::report::DEFAULT_OUTPUT;
use crate::util::config::{Config, CONFIG_FILE_NAME};
use crate::util::fs::{normalize_path, relative_path};

/// Paths and configuration for one run.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Inventory root; holds `runtimes/`, `clients/` and `inventory.toml`
    root: PathBuf,

    /// Loaded configuration
    config: Config,
}

impl GlobalContext {
    /// Create a context rooted at the current directory, loading its `inventory.toml`.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_root(cwd))
    }

    /// Create a context rooted at `root`, loading `root/inventory.toml` if present.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = normalize_path(&root.into());
        let config = Config::load_or_default(&root.join(CONFIG_FILE_NAME));
        GlobalContext { root, config }
    }

    /// Replace the configuration with one loaded from an explicit file.
    ///
    /// `path` is taken as given, like every path on the command line. Unlike
    /// the implicit `inventory.toml`, an explicit file must exist and parse.
    pub fn with_config_file(mut self, path: &Path) -> Result<Self> {
        self.config = Config::load(path)?;
        Ok(self)
    }

    /// Get the inventory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory holding the inventory files of the given kind.
    pub fn inventory_dir(&self, kind: InventoryKind) -> PathBuf {
        let configured = match kind {
            InventoryKind::Runtime => self.config.paths.runtimes.as_deref(),
            InventoryKind::Client => self.config.paths.clients.as_deref(),
        };
        configured
            .map(|p| self.resolve(p))
            .unwrap_or_else(|| self.root.join(kind.dir_name()))
    }

    /// Directory of runtime inventory files.
    pub fn runtimes_dir(&self) -> PathBuf {
        self.inventory_dir(InventoryKind::Runtime)
    }

    /// Directory of client inventory files.
    pub fn clients_dir(&self) -> PathBuf {
        self.inventory_dir(InventoryKind::Client)
    }

    /// Where the rendered report is written.
    pub fn output_path(&self) -> PathBuf {
        self.config
            .paths
            .output
            .as_deref()
            .map(|p| self.resolve(p))
            .unwrap_or_else(|| self.root.join(DEFAULT_OUTPUT))
    }

    /// Resolve a path from `inventory.toml` against the inventory root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Shorten a path for display, relative to the inventory root.
    pub fn display_path(&self, path: &Path) -> PathBuf {
        relative_path(&self.root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_layout() {
        let tmp = TempDir::new().unwrap();
        let ctx = GlobalContext::with_root(tmp.path());

        assert_eq!(ctx.runtimes_dir(), ctx.root().join("runtimes"));
        assert_eq!(ctx.clients_dir(), ctx.root().join("clients"));
        assert_eq!(
            ctx.output_path(),
            ctx.root().join("public").join("extension_support.html")
        );
    }

    #[test]
    fn test_config_overrides_layout() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
[paths]
runtimes = "data/rt"
output = "out.html"
"#,
        )
        .unwrap();

        let ctx = GlobalContext::with_root(tmp.path());
        assert_eq!(ctx.runtimes_dir(), ctx.root().join("data/rt"));
        assert_eq!(ctx.clients_dir(), ctx.root().join("clients"));
        assert_eq!(ctx.output_path(), ctx.root().join("out.html"));
    }

    #[test]
    fn test_explicit_config_file_must_exist() {
        let tmp = TempDir::new().unwrap();
        let ctx = GlobalContext::with_root(tmp.path());
        assert!(ctx.with_config_file(&tmp.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_explicit_config_file_outside_root() {
        let root = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let config = elsewhere.path().join("ci.toml");
        std::fs::write(&config, "[paths]\nruntimes = \"rt\"\n").unwrap();

        let ctx = GlobalContext::with_root(root.path())
            .with_config_file(&config)
            .unwrap();
        assert_eq!(ctx.runtimes_dir(), ctx.root().join("rt"));
    }

    #[test]
    fn test_display_path() {
        let tmp = TempDir::new().unwrap();
        let ctx = GlobalContext::with_root(tmp.path());
        let path = ctx.runtimes_dir().join("monado.json");
        assert_eq!(ctx.display_path(&path), PathBuf::from("runtimes/monado.json"));
    }
}
