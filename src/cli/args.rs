//! Command-line argument definitions for the stock reconciler
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the stock reconciler
///
/// Reconciles an ERP ("1C") inventory export against a warehouse-management
/// ("СОЛВО") export and writes a report of every quantity discrepancy.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stock-reconciler",
    version,
    about = "Reconcile ERP and WMS inventory exports and report quantity discrepancies",
    long_about = "Reconciles two independently produced inventory reports, an ERP (1C) export \
                  and a warehouse-management (СОЛВО) export, and reports every product whose \
                  recorded quantity differs between the two sources, including products known \
                  to only one side."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Reconcile an ERP export against a WMS export (main command)
    Reconcile(ReconcileArgs),
    /// Validate a single ERP export without reconciling
    Check(CheckArgs),
}

/// Arguments for the reconcile command
#[derive(Debug, Clone, Parser)]
pub struct ReconcileArgs {
    /// Path to the ERP (1C) export, uploaded first in the chat workflow
    #[arg(short = 'e', long = "erp", value_name = "FILE")]
    pub erp_path: PathBuf,

    /// Path to the WMS (СОЛВО) export
    #[arg(short = 'w', long = "wms", value_name = "FILE")]
    pub wms_path: PathBuf,

    /// Where to write the discrepancy report
    ///
    /// Defaults to "Сравнение остатков.csv" in the current directory.
    /// Nothing is written when the two sides agree everywhere.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Suppress everything except errors and the final summary
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Path to the ERP (1C) export to validate
    #[arg(short = 'e', long = "erp", value_name = "FILE")]
    pub erp_path: PathBuf,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl ReconcileArgs {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

impl CheckArgs {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_args_parse() {
        let args = Args::parse_from([
            "stock-reconciler",
            "reconcile",
            "--erp",
            "erp.csv",
            "--wms",
            "wms.csv",
        ]);
        match args.command {
            Some(Commands::Reconcile(reconcile)) => {
                assert_eq!(reconcile.erp_path, PathBuf::from("erp.csv"));
                assert_eq!(reconcile.wms_path, PathBuf::from("wms.csv"));
                assert!(reconcile.output_path.is_none());
            }
            other => panic!("expected reconcile command, got {:?}", other),
        }
    }

    #[test]
    fn test_log_level_from_flags() {
        let args = Args::parse_from([
            "stock-reconciler",
            "reconcile",
            "-e",
            "a.csv",
            "-w",
            "b.csv",
            "--verbose",
        ]);
        match args.command {
            Some(Commands::Reconcile(reconcile)) => assert_eq!(reconcile.log_level(), "debug"),
            other => panic!("expected reconcile command, got {:?}", other),
        }
    }
}
