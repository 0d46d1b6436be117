//! Application constants for the gazetteer reader
//!
//! This module contains the fixed parameters of the GeoNames tab-separated
//! record layout and the tuning values used by the streaming reader.

// =============================================================================
// Record Layout
// =============================================================================

/// Number of tab-separated fields in one gazetteer record
pub const GAZETTEER_FIELD_COUNT: usize = 19;

/// Field delimiter within one record line
pub const FIELD_DELIMITER: char = '\t';

/// Delimiter within the alternative-names list field
pub const NAME_LIST_DELIMITER: char = ',';

/// Date format of the modification-date field (ISO calendar date)
pub const MODIFICATION_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Geometry
// =============================================================================

/// Earth radius in meters used for great-circle distances (WGS84 equatorial)
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

// =============================================================================
// Streaming
// =============================================================================

/// Capacity of the bounded channel used for push-style record delivery
pub const PLACE_CHANNEL_CAPACITY: usize = 1000;
