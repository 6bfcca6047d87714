//! ccsync CLI - chaincode deployment reconciliation for Hyperledger Fabric
//!
//! Usage: ccsync <COMMAND>
//!
//! Commands:
//!   reconcile   Bring peers in line with the chaincode manifest
//!   clean       Remove containers and images of old chaincode versions
//!   merge-deps  Copy one package.json's dependencies into another

mod commands;
mod ui;

use clap::Parser;

use ccsync::presentation::{Cli, Commands};
use commands::reconcile::ReconcileArgs;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Reconcile {
            dry_run,
            repository,
            base_path,
            force_npm_install,
            build,
            concurrency,
        } => commands::reconcile::cmd_reconcile(
            ReconcileArgs {
                dry_run,
                repository,
                base_path,
                force_npm_install,
                build,
                concurrency,
            },
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Clean { dry_run } => commands::clean::cmd_clean(dry_run, cli.json, cli.color),
        Commands::MergeDeps { first, second } => {
            commands::merge_deps::cmd_merge_deps(&first, &second, cli.json)
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let fallback_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
