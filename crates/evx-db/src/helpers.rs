//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed
//! entity structs. These helpers isolate the parsing logic, including the
//! dual datetime format issue (`SQLite`'s `datetime('now')` vs Rust's
//! `to_rfc3339()`) and the JSON-encoded identifier sequences on articles.

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use evx_core::enums::EntityType;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Accepts RFC 3339 (what this crate writes via `to_rfc3339`) and the
/// `"%Y-%m-%d %H:%M:%S"` form `SQLite`'s `datetime('now')` produces.
///
/// # Errors
///
/// Returns `StoreError::Query` if the string matches neither format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| StoreError::Query(format!("unparseable datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `StoreError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, StoreError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into any serde-deserializable enum, matching the
/// snake_case strings the evx-core enums serialize to.
///
/// # Errors
///
/// Returns `StoreError::Query` if the string matches no enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, StoreError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| StoreError::Query(format!("unknown enum value '{s}': {e}")))
}

/// Read a nullable TEXT column, treating SQL NULL and empty string alike.
///
/// Nullable columns must be read as `get::<Option<String>>()`; reading a
/// NULL column as `String` is an error in libsql, not `""`.
///
/// # Errors
///
/// Returns `StoreError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, StoreError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Parse a JSON-encoded identifier (or name) sequence from a TEXT column,
/// preserving order.
///
/// # Errors
///
/// Returns `StoreError::Query` if the column does not hold a JSON string array.
pub fn parse_string_list(s: &str) -> Result<Vec<String>, StoreError> {
    serde_json::from_str(s)
        .map_err(|e| StoreError::Query(format!("Invalid JSON id list in column: {e}")))
}

/// Map `EntityType` to the corresponding SQL table name.
///
/// Exhaustive match: adding a new `EntityType` variant forces updating this.
#[must_use]
pub const fn entity_type_to_table(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Article => "articles",
        EntityType::Author => "authors",
        EntityType::Tag => "tags",
        EntityType::SystematicReview => "systematic_reviews",
        EntityType::ClinicalTrial => "clinical_trials",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_datetime_accepts_both_formats() {
        assert!(parse_datetime("2026-08-07T14:30:00+00:00").is_ok());
        assert!(parse_datetime("2026-08-07 14:30:00").is_ok());
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn parse_string_list_preserves_order() {
        let ids = parse_string_list(r#"["aut-2","aut-1"]"#).unwrap();
        assert_eq!(ids, ["aut-2", "aut-1"]);
        assert!(parse_string_list("not json").is_err());
        assert!(parse_string_list("[]").unwrap().is_empty());
    }

    #[test]
    fn every_entity_type_has_a_table() {
        let tables: Vec<_> = EntityType::all()
            .iter()
            .map(|e| entity_type_to_table(*e))
            .collect();
        assert_eq!(
            tables,
            [
                "articles",
                "authors",
                "tags",
                "systematic_reviews",
                "clinical_trials"
            ]
        );
    }
}
