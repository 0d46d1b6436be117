//! Test fixtures and helpers for the gazetteer record parser
//!
//! Provides canonical record lines used across the parser test modules.

// Test modules
mod parser_tests;

/// The 19 raw fields of a well-formed record for Paris, in column order
pub fn paris_fields() -> Vec<String> {
    [
        "2988507",
        "Paris",
        "Paris",
        "Lutetia,Paname,Parigi",
        "48.85341",
        "2.3488",
        "P",
        "PPLC",
        "FR",
        "",
        "11",
        "75",
        "751",
        "75056",
        "2138551",
        "",
        "42",
        "Europe/Paris",
        "2023-02-07",
    ]
    .map(str::to_string)
    .to_vec()
}

/// A complete, well-formed 19-field record line for Paris
pub fn paris_line() -> String {
    paris_fields().join("\t")
}

/// The Paris line with one field replaced
pub fn paris_line_with_field(index: usize, value: &str) -> String {
    let mut fields = paris_fields();
    fields[index] = value.to_string();
    fields.join("\t")
}
