//! Command-line argument definitions for the gazetteer tool
//!
//! This module defines the CLI interface using the clap derive API. The
//! binary is a thin collaborator around the library surface: it supplies a
//! file path and a target coordinate and formats whatever comes back.

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the gazetteer reader
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geonames-gazetteer",
    version,
    about = "Query GeoNames tab-separated gazetteer files by great-circle distance",
    long_about = "Streams GeoNames-style tab-separated gazetteer files one record at a time \
                  and answers nearest-place queries by great-circle distance. The file is \
                  never loaded into memory as a whole, so querying multi-gigabyte national \
                  dumps works on modest hardware."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the gazetteer reader
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Find the place nearest to a coordinate (full linear scan)
    Nearest(NearestArgs),
    /// Stream the file and report record statistics
    Scan(ScanArgs),
}

/// Arguments for the nearest command
#[derive(Debug, Clone, Parser)]
pub struct NearestArgs {
    /// Path to the gazetteer file (19 tab-separated fields per line)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Target latitude in decimal degrees
    #[arg(long = "lat", value_name = "DEGREES", allow_negative_numbers = true)]
    pub latitude: f64,

    /// Target longitude in decimal degrees
    #[arg(long = "lon", value_name = "DEGREES", allow_negative_numbers = true)]
    pub longitude: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Suppress all output except the result
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Arguments for the scan command
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Path to the gazetteer file (19 tab-separated fields per line)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Stop after this many records (demonstrates early termination)
    #[arg(short = 'n', long = "limit", value_name = "COUNT")]
    pub limit: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Suppress all output except the summary
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl NearestArgs {
    /// Validate argument consistency before any file I/O
    pub fn validate(&self) -> Result<()> {
        validate_gazetteer_path(&self.file)
    }

    pub fn get_log_level(&self) -> &str {
        &self.log_level
    }
}

impl ScanArgs {
    /// Validate argument consistency before any file I/O
    pub fn validate(&self) -> Result<()> {
        validate_gazetteer_path(&self.file)
    }

    pub fn get_log_level(&self) -> &str {
        &self.log_level
    }
}

fn validate_gazetteer_path(path: &PathBuf) -> Result<()> {
    if !path.exists() {
        return Err(Error::io(
            format!("gazetteer file not found: {}", path.display()),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        ));
    }
    if path.is_dir() {
        return Err(Error::io(
            format!("expected a file, found a directory: {}", path.display()),
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "is a directory"),
        ));
    }
    Ok(())
}
