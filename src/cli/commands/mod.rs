//! Command implementations for the gazetteer CLI
//!
//! Each subcommand lives in its own module; this module dispatches to the
//! appropriate handler and hosts the pieces shared between them.

pub mod nearest;
pub mod scan;
pub mod shared;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch the selected subcommand
pub async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Nearest(nearest_args) => nearest::run_nearest(nearest_args).await,
        Commands::Scan(scan_args) => scan::run_scan(scan_args).await,
    }
}
