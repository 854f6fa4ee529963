//! Command implementations for the stock reconciler CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. Each command is implemented in its own module.

pub mod check;
pub mod reconcile;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `reconcile`: full two-export reconciliation with report output
/// - `check`: single-export validation for diagnosing wrong report variants
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Reconcile(reconcile_args)) => reconcile::run_reconcile(reconcile_args).await,
        Some(Commands::Check(check_args)) => check::run_check(check_args).await,
        None => unreachable!("main prints help when no subcommand is given"),
    }
}
