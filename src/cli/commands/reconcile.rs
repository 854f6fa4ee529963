//! Reconcile command implementation

use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use super::shared::{read_export, setup_logging};
use crate::app::models::ReconcileOutcome;
use crate::app::services::engine;
use crate::cli::args::ReconcileArgs;
use crate::config::Config;
use crate::constants::REPORT_FILENAME;
use crate::{Error, Result};

/// Run the full two-export reconciliation
pub async fn run_reconcile(args: ReconcileArgs) -> Result<()> {
    setup_logging(args.log_level(), args.quiet)?;

    let config = Config::default();

    info!("Reading ERP export: {}", args.erp_path.display());
    let erp_bytes = read_export(&args.erp_path).await?;
    let erp_records = engine::process_first_upload(&erp_bytes, &config)?;

    info!("Reading WMS export: {}", args.wms_path.display());
    let wms_bytes = read_export(&args.wms_path).await?;
    let outcome = engine::process_second_upload_and_reconcile(erp_records, &wms_bytes, &config)?;

    match outcome {
        ReconcileOutcome::NoDiscrepancies => {
            println!("{}", "No discrepancies between the two exports.".green());
        }
        ReconcileOutcome::Report { bytes, rows } => {
            let output_path = args
                .output_path
                .unwrap_or_else(|| PathBuf::from(REPORT_FILENAME));
            tokio::fs::write(&output_path, &bytes)
                .await
                .map_err(|e| {
                    Error::io(format!("failed to write {}", output_path.display()), e)
                })?;

            println!(
                "{} {} discrepancy row(s) written to {}",
                "Found".yellow(),
                rows,
                output_path.display()
            );
        }
    }

    Ok(())
}
