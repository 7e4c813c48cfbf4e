//! Lenient conversions applied to incoming student fields.
//!
//! Form inputs arrive as text, so blank strings stand in for "not supplied".
//! Dates and enumerations must parse when present; a GPA that does not parse
//! is dropped rather than rejected.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;
use std::{fmt::Display, str::FromStr};

/// Inclusive GPA scale
pub const GPA_RANGE: std::ops::RangeInclusive<f64> = 0.0..=4.0;

/// Parses a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp
///
/// Blank input yields `Ok(None)`. Timestamps keep only their date portion.
pub fn parse_date(text: &str) -> Result<Option<NaiveDate>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    DateTime::parse_from_rfc3339(text)
        .map(|timestamp| Some(timestamp.date_naive()))
        .map_err(|_| format!("invalid date `{text}`, expected YYYY-MM-DD"))
}

/// Parses GPA text, discarding anything that is not a finite number on the 0-4 scale
pub fn parse_gpa(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().and_then(gpa_in_range)
}

/// Accepts a GPA given either as a JSON number or as numeric text
pub fn gpa_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().and_then(gpa_in_range),
        Value::String(text) => parse_gpa(text),
        _ => None,
    }
}

fn gpa_in_range(gpa: f64) -> Option<f64> {
    (gpa.is_finite() && GPA_RANGE.contains(&gpa)).then_some(gpa)
}

/// Parses an optional enumeration label, treating blank text as absent
pub fn parse_optional<T>(text: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    T::from_str(text)
        .map(Some)
        .map_err(|err| format!("invalid value `{text}`: {err}"))
}

/// Keeps text only if it has visible content
pub fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}

pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) => parse_date(&text).map_err(de::Error::custom),
        None => Ok(None),
    }
}

pub fn optional_parsed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) => parse_optional(&text).map_err(de::Error::custom),
        None => Ok(None),
    }
}

pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_blank))
}

pub fn lenient_gpa<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(gpa_from_value))
}
