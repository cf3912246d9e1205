// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pitstop - job phase tools for the service garage

mod commands;
mod completions;
mod context;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{nav, progress, route, statuses, visible};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::context::Context;
use crate::error::PitstopError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "pitstop",
    version,
    about = "Pitstop - job phase tracking for the service garage"
)]
struct Cli {
    /// Shop root directory (holds .pitstop/)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Shop profile file (default: <root>/.pitstop/profile.toml)
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a job's phases for a role
    Progress(progress::ProgressArgs),
    /// List the phases a role may see
    Visible(visible::VisibleArgs),
    /// Step to the next or previous phase
    Nav(nav::NavArgs),
    /// Build the route for a phase
    Route(route::RouteArgs),
    /// List job statuses in lifecycle order
    Statuses,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    setup_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PitstopError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let load = || Context::load(cli.root.clone(), cli.profile.clone(), cli.format);
    match cli.command {
        Commands::Progress(args) => progress::handle(&load()?, args)?,
        Commands::Visible(args) => visible::handle(&load()?, args)?,
        Commands::Nav(args) => nav::handle(&load()?, args)?,
        Commands::Route(args) => route::handle(&load()?, args)?,
        // No shop context needed
        Commands::Statuses => statuses::handle(cli.format),
        Commands::Completions(args) => completions::generate::<Cli>(args.shell),
    }
    Ok(())
}

/// Log to stderr, filtered by PITSTOP_LOG (default: warn)
fn setup_logging() {
    let filter = EnvFilter::try_from_env("PITSTOP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
