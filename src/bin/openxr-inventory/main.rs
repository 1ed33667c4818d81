//! OpenXR Inventory CLI - renders the extension support report

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, ReportArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("openxr_inventory=debug")
    } else {
        EnvFilter::new("openxr_inventory=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let color = !cli.no_color && std::io::stderr().is_terminal();

    let command = match cli.command {
        // Shell completions don't need an inventory
        Some(Commands::Completions(args)) => return commands::completions::execute(args),
        Some(command) => command,
        None => Commands::Report(ReportArgs::default()),
    };

    let ctx = commands::context(cli.root.as_deref(), cli.config.as_deref())?;

    // Execute command
    match command {
        Commands::Report(args) => commands::report::execute(args, &ctx, color),
        Commands::Check(args) => commands::check::execute(args, &ctx, color),
        Commands::List(args) => commands::list::execute(args, &ctx, color),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
