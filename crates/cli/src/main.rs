// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! comms - replay listener/dispatch scenarios and inspect the dispatch log

mod commands;
mod output;
mod scenario;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{normalise, replay};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "comms",
    version,
    about = "Component comms - in-process event dispatch"
)]
struct Cli {
    /// Show dispatch diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of an event name or listener ID
    Normalise(normalise::NormaliseArgs),
    /// Run a scenario file and print the dispatch log
    Replay(replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Normalise(args) => normalise::handle(args),
        Commands::Replay(args) => replay::handle(args),
    }
}

/// Dispatch diagnostics are `info` events from `comms_core`, shown whenever
/// logging mode is on.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "debug"
    } else {
        "warn,comms_core=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
