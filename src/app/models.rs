//! Data models for gazetteer records
//!
//! This module contains the core data structure representing one GeoNames
//! gazetteer entry, following the 19-field tab-separated record layout.

use crate::app::services::geo::{Coordinate, great_circle_distance};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One gazetteer entry: a named geographic feature with coordinates,
/// administrative codes, and metadata.
///
/// A `Place` is immutable once constructed from a record line. Numeric
/// fields that are legitimately empty in sparse gazetteer rows carry their
/// missing-value sentinel (`None` for integers, `f64::NAN` for floats)
/// rather than failing the record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Place {
    /// GeoNames identifier
    pub id: Option<i64>,

    /// Name of the geographical point (UTF-8)
    pub name: String,

    /// Name of the geographical point in plain ASCII characters
    pub ascii_name: String,

    /// Alternate names and name variants
    pub alternative_names: Vec<String>,

    /// Latitude in WGS84 decimal degrees
    pub latitude: f64,

    /// Longitude in WGS84 decimal degrees
    pub longitude: f64,

    /// Feature class (e.g. "P" for populated place)
    pub feature_class: String,

    /// Feature code within the class (e.g. "PPLC")
    pub feature_code: String,

    /// ISO-3166 two-letter country code
    pub country_code: String,

    /// Alternate country codes for features spanning borders
    pub alternative_country_code: String,

    /// First-level administrative division code
    pub admin_code1: String,

    /// Second-level administrative division code
    pub admin_code2: String,

    /// Third-level administrative division code
    pub admin_code3: String,

    /// Fourth-level administrative division code
    pub admin_code4: String,

    /// Population figure
    pub population: Option<i64>,

    /// Elevation above sea level in meters
    pub elevation: Option<i64>,

    /// Digital elevation model value (srtm3 or gtopo30) in meters
    pub digital_elevation_model: Option<i64>,

    /// IANA timezone identifier (e.g. "Europe/London")
    pub timezone: String,

    /// Date of last modification in the source dataset
    pub modification_date: NaiveDate,
}

impl Place {
    /// Great-circle distance in meters from this place to the given coordinate
    pub fn distance_to(&self, to: &impl Coordinate) -> f64 {
        great_circle_distance(self, to)
    }
}

impl Coordinate for Place {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}
