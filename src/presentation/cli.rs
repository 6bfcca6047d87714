//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ccsync - keeps Hyperledger Fabric peers in line with a chaincode manifest
#[derive(Parser, Debug)]
#[command(name = "ccsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of human-readable progress
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile, install and instantiate (or upgrade) chaincodes so peers match the manifest
    Reconcile {
        /// Print the commands that would run without running them
        #[arg(long)]
        dry_run: bool,

        /// Repository to fetch chaincode sources from before reconciling
        #[arg(short, long)]
        repository: Option<String>,

        /// Chaincode base path, relative to $GOPATH/src
        #[arg(short = 'p', long, default_value = ".")]
        base_path: PathBuf,

        /// Run `npm install` for node chaincodes even when node_modules exists
        #[arg(short, long)]
        force_npm_install: bool,

        /// Run `npm run build` after fetching and read chaincodes from build/
        #[arg(short, long)]
        build: bool,

        /// Maximum number of concurrent peer operations
        #[arg(long, value_name = "N")]
        concurrency: Option<usize>,
    },

    /// Remove containers and images of superseded chaincode versions
    Clean {
        /// Print the removal commands without running them
        #[arg(long)]
        dry_run: bool,
    },

    /// Copy the dependencies of one package.json into another
    MergeDeps {
        /// package.json to update
        first: PathBuf,

        /// package.json whose dependencies are copied
        second: PathBuf,
    },
}
