//! `openxr-inventory report` command

use anyhow::Result;

use crate::cli::ReportArgs;
use openxr_inventory::ops::report::{generate_report, ReportOptions};
use openxr_inventory::ops::template::EXTENSION_SUPPORT;
use openxr_inventory::util::GlobalContext;

pub fn execute(args: ReportArgs, ctx: &GlobalContext, color: bool) -> Result<()> {
    let (runtimes, clients) = super::load_inventories(ctx, &args.inventory, color)?;

    let options = ReportOptions {
        template: EXTENSION_SUPPORT.to_string(),
        output: args.output.unwrap_or_else(|| ctx.output_path()),
        aggregate: super::aggregate_options(
            ctx,
            args.drop_unsupported,
            args.include_empty_form_factors,
        ),
    };

    match generate_report(&runtimes, &clients, &options)? {
        Some(path) => eprintln!(
            "    Finished {} runtime(s), {} client(s) -> {}",
            runtimes.len(),
            clients.len(),
            ctx.display_path(&path).display()
        ),
        None => eprintln!("    Finished (nothing to write)"),
    }

    Ok(())
}
