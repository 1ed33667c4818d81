//! Command implementations

pub mod check;
pub mod completions;
pub mod list;
pub mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::cli::InventoryArgs;
use openxr_inventory::core::{ClientData, InventoryKind, InventoryRecord, RuntimeData};
use openxr_inventory::ops::load::{load_dir, LoadError, LoadOutcome};
use openxr_inventory::ops::{AggregateOptions, EmptyFormFactors, UnsupportedExtensions};
use openxr_inventory::util::diagnostic::emit;
use openxr_inventory::util::GlobalContext;

/// Build the context from the global `--root` and `--config` flags.
pub fn context(root: Option<&Path>, config: Option<&Path>) -> Result<GlobalContext> {
    let ctx = match root {
        Some(root) => GlobalContext::with_root(root),
        None => GlobalContext::new()?,
    };

    match config {
        Some(path) => ctx.with_config_file(path),
        None => Ok(ctx),
    }
}

/// Both inventories, each with whatever loaded and whatever failed.
pub struct Inventory {
    pub runtimes: LoadOutcome<RuntimeData>,
    pub clients: LoadOutcome<ClientData>,
}

impl Inventory {
    /// Load runtimes and clients; both directories are attempted before anything fails.
    pub fn load(ctx: &GlobalContext, args: &InventoryArgs) -> Result<Self, LoadError> {
        Ok(Inventory {
            runtimes: load_dir(&inventory_dir(ctx, args, InventoryKind::Runtime))?,
            clients: load_dir(&inventory_dir(ctx, args, InventoryKind::Client))?,
        })
    }

    pub fn failure_count(&self) -> usize {
        self.runtimes.failures.len() + self.clients.failures.len()
    }

    /// All records, or an error after printing a diagnostic for every failed file.
    pub fn into_complete(self, color: bool) -> Result<(Vec<RuntimeData>, Vec<ClientData>)> {
        let failed = self.failure_count();
        let runtimes = report_failures(self.runtimes.into_result(), color);
        let clients = report_failures(self.clients.into_result(), color);

        match (runtimes, clients) {
            (Some(runtimes), Some(clients)) => Ok((runtimes, clients)),
            _ => bail!(
                "could not parse {} inventory file(s), probably missing required properties",
                failed
            ),
        }
    }
}

/// Directory for `kind`: the command-line override, else the context's.
pub fn inventory_dir(ctx: &GlobalContext, args: &InventoryArgs, kind: InventoryKind) -> PathBuf {
    let overridden = match kind {
        InventoryKind::Runtime => args.runtimes.as_ref(),
        InventoryKind::Client => args.clients.as_ref(),
    };
    overridden
        .cloned()
        .unwrap_or_else(|| ctx.inventory_dir(kind))
}

fn report_failures<R: InventoryRecord>(
    result: Result<Vec<R>, LoadError>,
    color: bool,
) -> Option<Vec<R>> {
    match result {
        Ok(records) => Some(records),
        Err(e) => {
            emit(&e.to_diagnostic(), color);
            None
        }
    }
}

/// Load both inventories, failing if any file could not be loaded.
pub fn load_inventories(
    ctx: &GlobalContext,
    args: &InventoryArgs,
    color: bool,
) -> Result<(Vec<RuntimeData>, Vec<ClientData>)> {
    match Inventory::load(ctx, args) {
        Ok(inventory) => inventory.into_complete(color),
        Err(e) => {
            emit(&e.to_diagnostic(), color);
            Err(e.into())
        }
    }
}

/// Aggregation policies: command-line flags first, then `inventory.toml`.
pub fn aggregate_options(
    ctx: &GlobalContext,
    drop_unsupported: bool,
    include_empty_form_factors: bool,
) -> AggregateOptions {
    let config = &ctx.config().report;

    let unsupported = if drop_unsupported || config.drop_unsupported {
        UnsupportedExtensions::Drop
    } else {
        UnsupportedExtensions::Retain
    };

    let empty_form_factors = if include_empty_form_factors || config.include_empty_form_factors {
        EmptyFormFactors::Include
    } else {
        EmptyFormFactors::Omit
    };

    AggregateOptions {
        extra_extensions: config.extra_extensions.clone(),
        unsupported,
        empty_form_factors,
    }
}
