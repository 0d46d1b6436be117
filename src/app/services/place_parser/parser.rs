//! Line-to-record parsing for gazetteer data
//!
//! Splits one record line on tabs, validates the positional field count
//! against the transformation table, applies each column's transformation,
//! and assembles the typed record.

use super::transform::{FIELD_TRANSFORMS, FieldValue};
use crate::app::models::Place;
use crate::constants::{FIELD_DELIMITER, GAZETTEER_FIELD_COUNT};
use crate::{Error, Result};

/// Parse a single gazetteer record line into a [`Place`].
///
/// `line_number` is 1-based and used only for error context. The line must
/// not carry its terminator.
///
/// Fails with [`Error::MalformedRecord`] when the field count differs from
/// the transformation table length or when the modification date does not
/// parse; a single misaligned line typically means the whole file is
/// misaligned, so the caller should treat this as fatal for the scan.
/// Numeric fields never fail: unparseable cells carry their missing-value
/// sentinel instead.
pub fn parse_place(line: &str, line_number: usize) -> Result<Place> {
    let raw_fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if raw_fields.len() != FIELD_TRANSFORMS.len() {
        return Err(Error::malformed_record(
            line_number,
            format!(
                "expected {} tab-separated fields, found {}",
                FIELD_TRANSFORMS.len(),
                raw_fields.len()
            ),
        ));
    }

    let mut values = Vec::with_capacity(FIELD_TRANSFORMS.len());
    for (raw, (field_name, transform)) in raw_fields.iter().zip(FIELD_TRANSFORMS.iter()) {
        let value = transform.apply(raw).map_err(|e| {
            Error::malformed_record(
                line_number,
                format!("invalid {field_name} '{raw}': {e}"),
            )
        })?;
        values.push(value);
    }

    use FieldValue::{Date, Float, Integer, Text, TextList};
    match <[FieldValue; GAZETTEER_FIELD_COUNT]>::try_from(values) {
        Ok(
            [
                Integer(id),
                Text(name),
                Text(ascii_name),
                TextList(alternative_names),
                Float(latitude),
                Float(longitude),
                Text(feature_class),
                Text(feature_code),
                Text(country_code),
                Text(alternative_country_code),
                Text(admin_code1),
                Text(admin_code2),
                Text(admin_code3),
                Text(admin_code4),
                Integer(population),
                Integer(elevation),
                Integer(digital_elevation_model),
                Text(timezone),
                Date(modification_date),
            ],
        ) => Ok(Place {
            id,
            name,
            ascii_name,
            alternative_names,
            latitude,
            longitude,
            feature_class,
            feature_code,
            country_code,
            alternative_country_code,
            admin_code1,
            admin_code2,
            admin_code3,
            admin_code4,
            population,
            elevation,
            digital_elevation_model,
            timezone,
            modification_date,
        }),
        // Unreachable while the table above matches the record layout; kept
        // as an error so a schema edit cannot panic a scan.
        _ => Err(Error::malformed_record(
            line_number,
            "transformation table does not match the record layout",
        )),
    }
}
