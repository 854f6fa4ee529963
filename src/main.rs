use clap::Parser;
use std::process;
use stock_reconciler::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            if error.is_caller_facing() {
                eprintln!("Fix the export and run the command again.");
            }
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Stock Reconciler - ERP/WMS Inventory Comparison");
    println!("===============================================");
    println!();
    println!("Reconcile an ERP (1C) inventory export against a warehouse-management");
    println!("(СОЛВО) export and report every quantity discrepancy.");
    println!();
    println!("USAGE:");
    println!("    stock-reconciler <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    reconcile   Compare two exports and write the discrepancy report");
    println!("    check       Validate a single ERP export without reconciling");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Full reconciliation:");
    println!("    stock-reconciler reconcile --erp ostatki_1c.csv --wms ostatki_solvo.csv");
    println!();
    println!("    # Validate that the right 1C report variant was exported:");
    println!("    stock-reconciler check --erp ostatki_1c.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    stock-reconciler <COMMAND> --help");
}
