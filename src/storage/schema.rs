//! Database schema definitions

/// SQL to create the sum_data table
///
/// `input_numbers` is the canonical key; the UNIQUE constraint is the only
/// guard against two rows for the same sequence when writers race.
pub const CREATE_SUM_DATA_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS sum_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    input_numbers TEXT NOT NULL UNIQUE,
    result INTEGER NOT NULL
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_SUM_DATA_TABLE]
}
