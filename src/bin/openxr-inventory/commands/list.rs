//! `openxr-inventory list` command

use anyhow::{Context, Result};

use crate::cli::ListArgs;
use openxr_inventory::ops::aggregate::{group_by_category, Aggregates};
use openxr_inventory::util::GlobalContext;

pub fn execute(args: ListArgs, ctx: &GlobalContext, color: bool) -> Result<()> {
    let (runtimes, clients) = super::load_inventories(ctx, &args.inventory, color)?;

    let options = super::aggregate_options(ctx, args.drop_unsupported, false);
    let aggregates = Aggregates::compute(&runtimes, &clients, &options);

    if args.json {
        let json = serde_json::to_string_pretty(&aggregates)
            .context("failed to serialize extension support")?;
        println!("{}", json);
        return Ok(());
    }

    let listed = aggregates.listed_extensions();
    for (category, names) in group_by_category(&listed) {
        println!("{} ({})", category.caption(), names.len());
        for name in names {
            let support = aggregates.extension_support[name];
            println!(
                "  {:<56} {:>3} runtime(s) {:>3} client(s)",
                name, support.runtime_count, support.client_count
            );
        }
    }

    Ok(())
}
