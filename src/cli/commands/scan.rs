//! Scan command implementation
//!
//! Consumes the push-style record stream, optionally stopping after a
//! record limit, and reports what was seen. Dropping the receiver early is
//! the supported way to abandon a scan, so the limit doubles as a
//! demonstration that partial consumption releases the file cleanly.

use super::shared::{scan_spinner, setup_logging};
use crate::cli::args::ScanArgs;
use crate::{Gazetteer, Result};
use colored::*;
use std::time::Instant;
use tracing::info;

/// Aggregate results of one scan pass
#[derive(Debug, Default)]
struct ScanSummary {
    records_seen: usize,
    named_places: usize,
    with_population: usize,
}

/// Run the scan command
pub async fn run_scan(args: ScanArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let gazetteer = Gazetteer::new(&args.file);
    info!("Scanning {}", args.file.display());

    let spinner = scan_spinner("scanning gazetteer...", args.quiet);
    let started = Instant::now();

    let mut summary = ScanSummary::default();
    let mut receiver = gazetteer.stream_places();

    while let Some(result) = receiver.recv().await {
        let place = result?;
        summary.records_seen += 1;
        if !place.name.is_empty() {
            summary.named_places += 1;
        }
        if place.population.is_some() {
            summary.with_population += 1;
        }

        if let Some(pb) = &spinner {
            pb.inc(1);
        }

        if args.limit.is_some_and(|limit| summary.records_seen >= limit) {
            break;
        }
    }
    drop(receiver);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let elapsed = started.elapsed();

    println!("{}", "Scan complete".bright_green().bold());
    println!(
        "  {} {}{}",
        "Records:".bright_white(),
        summary.records_seen.to_string().bright_yellow(),
        match args.limit {
            Some(limit) if summary.records_seen >= limit => " (limit reached)".bright_black(),
            _ => "".normal(),
        }
    );
    println!(
        "  {} {}",
        "Named places:".bright_white(),
        summary.named_places
    );
    println!(
        "  {} {}",
        "With population:".bright_white(),
        summary.with_population
    );
    println!(
        "  {} {:.2}s",
        "Elapsed:".bright_white(),
        elapsed.as_secs_f64()
    );

    Ok(())
}
