//! Loading inventory directories.
//!
//! Every `*.json` file in an inventory directory is parsed into one record,
//! using the file stem as the record's stub. A file that fails to load is
//! logged and recorded, and loading carries on with the next file; the batch
//! as a whole fails afterwards, naming every file that could not be loaded.
//! A directory that does not exist holds no files.

use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::core::{ClientData, EntryError, InventoryKind, InventoryRecord, RuntimeData};
use crate::util::diagnostic::{hints, Diagnostic};
use crate::util::fs::glob_files;

/// Why a single inventory file could not be loaded.
#[derive(Debug, Error)]
pub enum FileLoadError {
    #[error("failed to read file: {0}")]
    Read(#[source] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Entry(#[from] EntryError),
}

/// A file that failed to load.
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: FileLoadError,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.path.file_name().unwrap_or(self.path.as_os_str());
        write!(f, "{}: {}", name.to_string_lossy(), self.error)
    }
}

/// Error loading an inventory directory.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid inventory directory {}: {source}", .path.display())]
    Pattern {
        path: PathBuf,
        #[source]
        source: glob::PatternError,
    },

    #[error(
        "could not parse {} {kind} file(s), probably missing required properties: {}",
        .failures.len(),
        join_paths(.failures)
    )]
    Batch {
        kind: InventoryKind,
        failures: Vec<LoadFailure>,
    },
}

fn join_paths(failures: &[LoadFailure]) -> String {
    failures
        .iter()
        .map(|f| f.path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl LoadError {
    /// Paths of every file that failed to load.
    pub fn failed_paths(&self) -> Vec<&Path> {
        match self {
            LoadError::Batch { failures, .. } => {
                failures.iter().map(|f| f.path.as_path()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LoadError::Pattern { path, source } => {
                Diagnostic::error(format!("cannot list inventory files: {}", source))
                    .with_location(path)
            }

            LoadError::Batch { kind, failures } => {
                let diag = Diagnostic::error(format!(
                    "could not load {} {} file(s)",
                    failures.len(),
                    kind
                ));
                // Every failure comes from the same directory.
                let diag = match failures.first().and_then(|f| f.path.parent()) {
                    Some(dir) => diag.with_location(dir),
                    None => diag,
                };

                diag.with_notes(failures)
                    .with_hint(hints::FIX_INVENTORY)
                    .with_hint(hints::RUN_VERBOSE)
            }
        }
    }
}

/// Result of loading a directory: every record that parsed, and every file that didn't.
#[derive(Debug)]
pub struct LoadOutcome<R> {
    /// Successfully loaded records, sorted by stub
    pub records: Vec<R>,

    /// Files that failed to load
    pub failures: Vec<LoadFailure>,
}

impl<R: InventoryRecord> LoadOutcome<R> {
    /// Check if every file loaded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// All records, or a batch error naming every file that failed.
    pub fn into_result(self) -> Result<Vec<R>, LoadError> {
        if self.failures.is_empty() {
            Ok(self.records)
        } else {
            Err(LoadError::Batch {
                kind: R::KIND,
                failures: self.failures,
            })
        }
    }
}

/// Load a single inventory file; the file stem becomes the stub.
pub fn load_file<R: InventoryRecord>(path: &Path) -> Result<R, FileLoadError> {
    let contents = std::fs::read_to_string(path).map_err(FileLoadError::Read)?;
    let value: Value = serde_json::from_str(&contents)?;
    let stub = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(R::from_json(&stub, &value)?)
}

/// Load every `*.json` file in `dir`, collecting failures instead of stopping at the first.
pub fn load_dir<R: InventoryRecord>(dir: &Path) -> Result<LoadOutcome<R>, LoadError> {
    if !dir.is_dir() {
        tracing::warn!(
            "{} inventory directory {} does not exist, loading nothing",
            R::KIND,
            dir.display()
        );
        return Ok(LoadOutcome {
            records: Vec::new(),
            failures: Vec::new(),
        });
    }

    let files = glob_files(dir, "*.json").map_err(|source| LoadError::Pattern {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!("found {} {} file(s) in {}", files.len(), R::KIND, dir.display());

    let mut records: Vec<R> = Vec::new();
    let mut failures = Vec::new();
    let mut stubs = HashSet::new();

    for path in files {
        match load_file::<R>(&path) {
            Ok(record) => {
                tracing::info!("Loaded {}", record.stub());
                if !stubs.insert(record.stub().to_string()) {
                    tracing::warn!(
                        "duplicate {} stub `{}` from {}",
                        R::KIND,
                        record.stub(),
                        path.display()
                    );
                }
                records.push(record);
            }
            Err(error) => {
                tracing::error!(
                    "Error loading {} (probably missing required property), skipping: {}",
                    path.display(),
                    error
                );
                failures.push(LoadFailure { path, error });
            }
        }
    }

    records.sort_by(|a, b| a.stub().cmp(b.stub()));

    Ok(LoadOutcome { records, failures })
}

/// Load every record in `dir`, failing if any file could not be loaded.
pub fn load_all<R: InventoryRecord>(dir: &Path) -> Result<Vec<R>, LoadError> {
    load_dir(dir)?.into_result()
}

/// Load all runtime inventory files (default directory: `runtimes`).
pub fn load_all_runtimes(dir: Option<&Path>) -> Result<Vec<RuntimeData>, LoadError> {
    let dir = dir.unwrap_or_else(|| Path::new(InventoryKind::Runtime.dir_name()));
    load_all(dir)
}

/// Load all client inventory files (default directory: `clients`).
pub fn load_all_clients(dir: Option<&Path>) -> Result<Vec<ClientData>, LoadError> {
    let dir = dir.unwrap_or_else(|| Path::new(InventoryKind::Client.dir_name()));
    load_all(dir)
}
