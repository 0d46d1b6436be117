//! Positional column schema for gazetteer records
//!
//! The gazetteer format carries no header row; columns are identified purely
//! by position. This module declares that schema as data: an ordered table
//! with exactly one tagged transformation per column, applied by the parser
//! to the raw fields of a split line.

use super::field_parsers::{
    parse_lenient_f64, parse_lenient_i64, parse_modification_date, split_name_list,
};
use crate::constants::GAZETTEER_FIELD_COUNT;
use chrono::NaiveDate;

/// Per-column transformation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Keep the raw field as-is
    Text,
    /// Lenient integer parse; missing or unparseable yields `None`
    Integer,
    /// Lenient float parse; missing or unparseable yields `f64::NAN`
    Float,
    /// Split the field on commas into a list of names
    TextList,
    /// Strict calendar date parse; failure rejects the whole record
    Date,
}

/// A transformed field value, tagged with the transformation that produced it
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(Option<i64>),
    Float(f64),
    TextList(Vec<String>),
    Date(NaiveDate),
}

impl Transform {
    /// Apply this transformation to one raw field.
    ///
    /// Only [`Transform::Date`] can fail; numeric transforms degrade to
    /// their missing-value sentinel instead.
    pub fn apply(self, raw: &str) -> Result<FieldValue, chrono::ParseError> {
        Ok(match self {
            Transform::Text => FieldValue::Text(raw.to_string()),
            Transform::Integer => FieldValue::Integer(parse_lenient_i64(raw)),
            Transform::Float => FieldValue::Float(parse_lenient_f64(raw)),
            Transform::TextList => FieldValue::TextList(split_name_list(raw)),
            Transform::Date => FieldValue::Date(parse_modification_date(raw)?),
        })
    }
}

/// The gazetteer column schema: one `(name, transformation)` entry per
/// tab-separated field, in record order. The table length defines the only
/// accepted field count.
pub const FIELD_TRANSFORMS: [(&str, Transform); GAZETTEER_FIELD_COUNT] = [
    ("id", Transform::Integer),
    ("name", Transform::Text),
    ("ascii_name", Transform::Text),
    ("alternative_names", Transform::TextList),
    ("latitude", Transform::Float),
    ("longitude", Transform::Float),
    ("feature_class", Transform::Text),
    ("feature_code", Transform::Text),
    ("country_code", Transform::Text),
    ("alternative_country_code", Transform::Text),
    ("admin_code1", Transform::Text),
    ("admin_code2", Transform::Text),
    ("admin_code3", Transform::Text),
    ("admin_code4", Transform::Text),
    ("population", Transform::Integer),
    ("elevation", Transform::Integer),
    ("digital_elevation_model", Transform::Integer),
    ("timezone", Transform::Text),
    ("modification_date", Transform::Date),
];
