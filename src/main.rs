use clap::Parser;
use geonames_gazetteer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(command));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("GeoNames Gazetteer - Nearest-Place Search");
    println!("=========================================");
    println!();
    println!("Stream GeoNames tab-separated gazetteer files and answer nearest-place");
    println!("queries by great-circle distance, without loading the file into memory.");
    println!();
    println!("USAGE:");
    println!("    geonames-gazetteer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    nearest     Find the place nearest to a coordinate (main command)");
    println!("    scan        Stream the file and report record statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Find the place nearest to central London:");
    println!("    geonames-gazetteer nearest --file GB.txt --lat 51.50853 --lon -0.12574");
    println!();
    println!("    # Count records in a national dump, stopping after the first million:");
    println!("    geonames-gazetteer scan --file allCountries.txt --limit 1000000");
    println!();
    println!("For detailed help on any command, use:");
    println!("    geonames-gazetteer nearest --help");
    println!("    geonames-gazetteer scan --help");
}
