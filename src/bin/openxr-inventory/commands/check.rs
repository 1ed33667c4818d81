//! `openxr-inventory check` command

use anyhow::Result;

use crate::cli::CheckArgs;
use openxr_inventory::core::InventoryKind;
use openxr_inventory::ops::compute_known_extensions;
use openxr_inventory::util::diagnostic::{emit, Diagnostic};
use openxr_inventory::util::GlobalContext;

use super::Inventory;

pub fn execute(args: CheckArgs, ctx: &GlobalContext, color: bool) -> Result<()> {
    let inventory = match Inventory::load(ctx, &args.inventory) {
        Ok(inventory) => inventory,
        Err(e) => {
            emit(&e.to_diagnostic(), color);
            return Err(e.into());
        }
    };

    for (kind, loaded, failed) in [
        (
            InventoryKind::Runtime,
            inventory.runtimes.records.len(),
            inventory.runtimes.failures.len(),
        ),
        (
            InventoryKind::Client,
            inventory.clients.records.len(),
            inventory.clients.failures.len(),
        ),
    ] {
        if loaded + failed == 0 {
            let dir = super::inventory_dir(ctx, &args.inventory, kind);
            let diag = Diagnostic::warning(format!("no {} inventory files found", kind))
                .with_location(ctx.display_path(&dir));
            emit(&diag, color);
        }
    }

    let (runtimes, clients) = inventory.into_complete(color)?;
    let known = compute_known_extensions(&runtimes, &clients);

    eprintln!(
        "    Checked {} runtime(s), {} client(s), {} extension(s)",
        runtimes.len(),
        clients.len(),
        known.len()
    );

    Ok(())
}
