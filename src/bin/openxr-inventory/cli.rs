//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// OpenXR Inventory - extension support across OpenXR runtimes and clients
///
/// Relative paths given on the command line are relative to the current
/// directory. Relative paths inside `inventory.toml` are relative to the root.
#[derive(Parser)]
#[command(name = "openxr-inventory")]
#[command(author, version, about)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Inventory root holding `runtimes/`, `clients/` and `inventory.toml`
    #[arg(long, global = true, env = "OPENXR_INVENTORY_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file, relative to the current directory
    /// (defaults to `inventory.toml` in the root)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run (defaults to `report`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the extension support report
    Report(ReportArgs),

    /// Load every inventory file and report problems without rendering
    Check(CheckArgs),

    /// List known extensions by category with support counts
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where to find the inventory files.
#[derive(Args, Default)]
pub struct InventoryArgs {
    /// Directory of runtime inventory files, relative to the current directory
    #[arg(long)]
    pub runtimes: Option<PathBuf>,

    /// Directory of client inventory files, relative to the current directory
    #[arg(long)]
    pub clients: Option<PathBuf>,
}

#[derive(Args, Default)]
pub struct ReportArgs {
    #[command(flatten)]
    pub inventory: InventoryArgs,

    /// Output file, relative to the current directory
    /// (defaults to `public/extension_support.html` in the root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave extensions nobody supports out of the support table
    #[arg(long)]
    pub drop_unsupported: bool,

    /// Give runtimes and clients without form factors an empty row
    #[arg(long)]
    pub include_empty_form_factors: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inventory: InventoryArgs,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub inventory: InventoryArgs,

    /// Print the aggregated tables as JSON
    #[arg(long)]
    pub json: bool,

    /// Leave extensions nobody supports out of the listing
    #[arg(long)]
    pub drop_unsupported: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
