//! Birth date entry and formatting
//!
//! The remote service expects dates as `DD/MM/YYYY`. Users type the date
//! themselves, so a few common layouts are accepted and then checked against
//! the same bounds a calendar picker would enforce.

use chrono::NaiveDate;

use crate::validation::{FormField, ValidationError};

/// Layouts accepted for typed input, tried in order.
const INPUT_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// Wire format expected by the remote service.
const WIRE_FORMAT: &str = "%d/%m/%Y";

/// Earliest selectable date (inclusive).
pub fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Parse user-typed birth date text.
///
/// Empty input means no date was chosen and yields `Ok(None)`. Dates after
/// `today` or before 1900-01-01 are rejected as out of range.
pub fn parse_birth_date(
    text: &str,
    today: NaiveDate,
) -> std::result::Result<Option<NaiveDate>, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let date = INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .ok_or(ValidationError::InvalidFormat(FormField::BirthDate))?;

    if date > today || date < earliest_birth_date() {
        return Err(ValidationError::OutOfRange(FormField::BirthDate));
    }

    Ok(Some(date))
}

/// Format a date for the remote call (`DD/MM/YYYY`).
pub fn format_birth_date(date: NaiveDate) -> String {
    date.format(WIRE_FORMAT).to_string()
}

/// Long human-readable form, e.g. `12 May 1990`.
pub fn display_birth_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}
