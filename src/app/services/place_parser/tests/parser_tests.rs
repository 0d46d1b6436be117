//! Tests for line-to-record parsing

use super::{paris_fields, paris_line, paris_line_with_field};
use crate::Error;
use crate::app::services::place_parser::parse_place;
use chrono::NaiveDate;

#[test]
fn test_well_formed_line_parses_field_for_field() {
    let place = parse_place(&paris_line(), 1).expect("well-formed line must parse");

    assert_eq!(place.id, Some(2988507));
    assert_eq!(place.name, "Paris");
    assert_eq!(place.ascii_name, "Paris");
    assert_eq!(
        place.alternative_names,
        vec!["Lutetia".to_string(), "Paname".to_string(), "Parigi".to_string()]
    );
    assert_eq!(place.latitude, 48.85341);
    assert_eq!(place.longitude, 2.3488);
    assert_eq!(place.feature_class, "P");
    assert_eq!(place.feature_code, "PPLC");
    assert_eq!(place.country_code, "FR");
    assert_eq!(place.alternative_country_code, "");
    assert_eq!(place.admin_code1, "11");
    assert_eq!(place.admin_code2, "75");
    assert_eq!(place.admin_code3, "751");
    assert_eq!(place.admin_code4, "75056");
    assert_eq!(place.population, Some(2138551));
    assert_eq!(place.elevation, None);
    assert_eq!(place.digital_elevation_model, Some(42));
    assert_eq!(place.timezone, "Europe/Paris");
    assert_eq!(
        place.modification_date,
        NaiveDate::from_ymd_opt(2023, 2, 7).unwrap()
    );
}

#[test]
fn test_too_few_fields_is_malformed() {
    let line = paris_fields()[..18].join("\t");
    let err = parse_place(&line, 7).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedRecord { line_number: 7, .. }
    ));
}

#[test]
fn test_too_many_fields_is_malformed() {
    let line = format!("{}\textra", paris_line());
    let err = parse_place(&line, 3).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedRecord { line_number: 3, .. }
    ));
}

#[test]
fn test_empty_line_is_malformed() {
    // An empty line splits into a single empty field, not nineteen.
    let err = parse_place("", 1).unwrap_err();
    assert!(matches!(err, Error::MalformedRecord { .. }));
}

#[test]
fn test_field_count_error_names_both_counts() {
    let line = paris_fields()[..10].join("\t");
    let message = parse_place(&line, 1).unwrap_err().to_string();
    assert!(message.contains("19"), "message was: {message}");
    assert!(message.contains("10"), "message was: {message}");
}

#[test]
fn test_empty_numeric_cells_become_sentinels() {
    let place = parse_place(&paris_line_with_field(14, ""), 1).unwrap();
    assert_eq!(place.population, None);

    let place = parse_place(&paris_line_with_field(4, ""), 1).unwrap();
    assert!(place.latitude.is_nan());
}

#[test]
fn test_trailing_garbage_in_numeric_cells_is_tolerated() {
    let place = parse_place(&paris_line_with_field(15, "35m"), 1).unwrap();
    assert_eq!(place.elevation, Some(35));

    let place = parse_place(&paris_line_with_field(5, "2.3488;"), 1).unwrap();
    assert_eq!(place.longitude, 2.3488);
}

#[test]
fn test_unparseable_date_is_malformed() {
    let err = parse_place(&paris_line_with_field(18, "07/02/2023"), 12).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedRecord {
            line_number: 12,
            ..
        }
    ));
    assert!(err.to_string().contains("modification_date"));
}

#[test]
fn test_empty_alternative_names_is_empty_list() {
    let place = parse_place(&paris_line_with_field(3, ""), 1).unwrap();
    assert!(place.alternative_names.is_empty());
}

#[test]
fn test_parsing_is_pure() {
    // Same line, same record, independent of line number context.
    let a = parse_place(&paris_line(), 1).unwrap();
    let b = parse_place(&paris_line(), 500_000).unwrap();
    assert_eq!(a, b);
}
