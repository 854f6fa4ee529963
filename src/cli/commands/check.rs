//! Check command implementation

use colored::Colorize;
use std::collections::BTreeSet;

use super::shared::{read_export, setup_logging};
use crate::Result;
use crate::app::services::engine;
use crate::cli::args::CheckArgs;
use crate::config::Config;

/// Validate a single ERP export without reconciling
///
/// Runs the first-upload path only: decode, adapt, category mapping with
/// the sanity gate. Useful for diagnosing a wrong report variant before
/// anyone waits on the WMS side.
pub async fn run_check(args: CheckArgs) -> Result<()> {
    setup_logging(args.log_level(), false)?;

    let bytes = read_export(&args.erp_path).await?;
    let records = engine::process_first_upload(&bytes, &Config::default())?;

    let categories: BTreeSet<&str> = records.iter().map(|r| r.category.as_str()).collect();

    println!(
        "{} {} product rows, {} distinct categories",
        "OK:".green(),
        records.len(),
        categories.len()
    );
    for category in categories {
        println!("  {}", category);
    }

    Ok(())
}
