//! Record parser for GeoNames tab-separated gazetteer lines
//!
//! One raw line of tab-separated text in, one typed [`crate::Place`] out.
//! Parsing is driven by a fixed positional transformation table with exactly
//! one entry per gazetteer column, so a line with any other field count is
//! rejected outright rather than padded or truncated.
//!
//! ## Architecture
//!
//! - [`transform`] - The positional column schema: tagged transformation
//!   variants and the 19-entry table mapping column index to transformation
//! - [`field_parsers`] - Utility functions for lenient numeric parsing,
//!   name-list splitting, and strict date parsing
//! - [`parser`] - Line splitting, field-count validation, and assembly of
//!   the typed record
//!
//! ## Usage
//!
//! ```rust
//! use geonames_gazetteer::app::services::place_parser::parse_place;
//!
//! # fn example() -> geonames_gazetteer::Result<()> {
//! let line = "2988507\tParis\tParis\tLutetia,Paname\t48.85341\t2.3488\tP\tPPLC\tFR\t\t11\t75\t751\t75056\t2138551\t\t42\tEurope/Paris\t2023-02-07";
//! let place = parse_place(line, 1)?;
//! assert_eq!(place.name, "Paris");
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod parser;
pub mod transform;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::parse_place;
pub use transform::{FIELD_TRANSFORMS, FieldValue, Transform};
