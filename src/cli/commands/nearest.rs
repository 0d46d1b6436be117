//! Nearest-place command implementation
//!
//! Drives the library's linear-scan nearest query and renders the winning
//! record, or reports an empty dataset.

use super::shared::{format_distance, scan_spinner, setup_logging};
use crate::app::services::geo::LatLng;
use crate::cli::args::NearestArgs;
use crate::{Gazetteer, Place, Result};
use colored::*;
use std::time::Instant;
use tracing::info;

/// Run the nearest command
pub async fn run_nearest(args: NearestArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let target = LatLng::new(args.latitude, args.longitude);
    let gazetteer = Gazetteer::new(&args.file);

    info!(
        "Searching {} for the place nearest to ({}, {})",
        args.file.display(),
        target.latitude,
        target.longitude
    );

    let spinner = scan_spinner("scanning gazetteer...", args.quiet);
    let started = Instant::now();
    let nearest = gazetteer.nearest(&target).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let elapsed = started.elapsed();

    match nearest? {
        Some(place) => {
            info!("Scan completed in {:.2}s", elapsed.as_secs_f64());
            print_place(&place, &target);
        }
        None => {
            println!("{}", "The gazetteer file contains no records.".yellow());
        }
    }

    Ok(())
}

fn print_place(place: &Place, target: &LatLng) {
    let distance = place.distance_to(target);

    println!(
        "{} {}",
        "Nearest place:".bright_green().bold(),
        place.name.bright_cyan().bold()
    );
    println!(
        "  {} {}",
        "Distance:".bright_white(),
        format_distance(distance).bright_yellow()
    );
    println!(
        "  {} {}, {}",
        "Coordinates:".bright_white(),
        place.latitude,
        place.longitude
    );
    println!(
        "  {} {} / {}",
        "Feature:".bright_white(),
        place.feature_class,
        place.feature_code
    );
    if !place.country_code.is_empty() {
        println!("  {} {}", "Country:".bright_white(), place.country_code);
    }
    if let Some(population) = place.population {
        println!("  {} {}", "Population:".bright_white(), population);
    }
    println!("  {} {}", "Timezone:".bright_white(), place.timezone);
}
