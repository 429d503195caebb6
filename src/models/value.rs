//! Field-value normalization shared by every record type.
//!
//! The backend sheet rounds-trips values loosely: boolean columns arrive as
//! `true`, `"true"`, or `"1"`, and date columns as ISO-8601 strings or
//! locale-formatted text. Every read of such a field goes through the
//! helpers here rather than being normalized ad hoc at each call site.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Normalize a boolean-like backend value.
///
/// `true`, `"true"` (any case), `"1"`, and the number `1` are true;
/// everything else - including null and absent values - is false.
pub fn normalize_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true") || s == "1",
        Value::Number(n) => n.as_i64() == Some(1),
        _ => false,
    }
}

/// Serde adapter applying [`normalize_bool`] at deserialization time.
pub fn flexible_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(normalize_bool(&value))
}

/// Parse a date field, accepting `YYYY-MM-DD`, full RFC 3339 timestamps,
/// and `MM/DD/YYYY`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "N/A" {
        return None;
    }
    // A timestamp keeps its date prefix
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%m/%d/%Y"))
        .ok()
}

/// Format a date field for display, falling back to the given placeholder
/// when the value is missing or unparseable text should be shown verbatim.
pub fn display_date(raw: Option<&str>, placeholder: &str) -> String {
    let Some(raw) = raw else {
        return placeholder.to_string();
    };
    if raw.trim().is_empty() || raw == "N/A" {
        return placeholder.to_string();
    }
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        // Unparseable text degrades to the raw value, never an error
        None => raw.to_string(),
    }
}
