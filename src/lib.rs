//! GeoNames Gazetteer Library
//!
//! A Rust library for reading GeoNames-style tab-separated gazetteer files
//! and answering nearest-place queries by great-circle distance.
//!
//! This library provides tools for:
//! - Parsing one gazetteer line into a typed [`Place`] record via a fixed
//!   positional transformation table
//! - Streaming records lazily from disk, as a pull-based `futures::Stream`
//!   or pushed into a bounded channel for pipeline consumers
//! - Linear-scan nearest-neighbor search with spherical great-circle distance
//! - Fail-fast error handling for misaligned or truncated records

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod gazetteer;
        pub mod geo;
        pub mod place_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Place;
pub use app::services::gazetteer::{Gazetteer, PlaceStream};
pub use app::services::geo::{Coordinate, LatLng, great_circle_distance};

/// Result type alias for gazetteer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for gazetteer reading and search operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A line did not conform to the 19-field gazetteer record layout
    #[error("malformed record at line {line_number}: {message}")]
    MalformedRecord { line_number: usize, message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed record error for the given 1-based line number
    pub fn malformed_record(line_number: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line_number,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
