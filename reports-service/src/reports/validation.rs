//! Validation of incoming report payloads
//!
//! [`validate`] is the only way to obtain a [`NewReport`]. It checks the raw
//! request fields rule by rule and stops at the first failure:
//!
//! 1. all four fields present (missing, `null`, `""`, `false` and `0` count
//!    as absent)
//! 2. `title` is text of 3 to 100 characters
//! 3. `description` is text of at least 10 characters
//! 4. `location` is text of at least 3 characters
//! 5. `date` parses as a date/time
//!
//! Text fields are then trimmed and the same bounds are checked again on the
//! trimmed values.
//!
//! ```rust
//! use reports_service::reports::{validate, CreateReportRequest};
//!
//! let request = CreateReportRequest::new(
//!     "  Buraco na rua ",
//!     "Buraco enorme na esquina da praça",
//!     "2024-12-25",
//!     "Recife, PE",
//! );
//! let report = validate(request).unwrap();
//! assert_eq!(report.title(), "Buraco na rua");
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::model::NewReport;

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 100;
const DESCRIPTION_MIN: usize = 10;
const LOCATION_MIN: usize = 3;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Raw create payload as received on the wire
///
/// Every field is kept as an untyped JSON value so that missing fields,
/// `null` and values of the wrong type reach [`validate`] instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateReportRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub location: Option<Value>,
}

impl CreateReportRequest {
    /// Build a request from four text fields
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            description: Some(Value::String(description.into())),
            date: Some(Value::String(date.into())),
            location: Some(Value::String(location.into())),
        }
    }
}

/// Reason a payload was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title, description, date and location are required")]
    MissingFields,

    #[error("title must be between 3 and 100 characters")]
    TitleLength,

    #[error("description must be at least 10 characters")]
    DescriptionLength,

    #[error("location must be a text value with at least 3 characters")]
    LocationInvalid,

    #[error("invalid date format")]
    InvalidDate,
}

/// Validate a raw payload into a [`NewReport`]
pub fn validate(request: CreateReportRequest) -> Result<NewReport, ValidationError> {
    let CreateReportRequest {
        title,
        description,
        date,
        location,
    } = request;

    let (Some(title), Some(description), Some(date), Some(location)) = (
        title.filter(is_truthy),
        description.filter(is_truthy),
        date.filter(is_truthy),
        location.filter(is_truthy),
    ) else {
        return Err(ValidationError::MissingFields);
    };

    let title = text_within(title, TITLE_MIN, Some(TITLE_MAX))
        .ok_or(ValidationError::TitleLength)?;
    let description = text_within(description, DESCRIPTION_MIN, None)
        .ok_or(ValidationError::DescriptionLength)?;
    let location =
        text_within(location, LOCATION_MIN, None).ok_or(ValidationError::LocationInvalid)?;
    let date = parse_date(&date).ok_or(ValidationError::InvalidDate)?;

    let title = trimmed_within(title, TITLE_MIN, Some(TITLE_MAX))
        .ok_or(ValidationError::TitleLength)?;
    let description = trimmed_within(description, DESCRIPTION_MIN, None)
        .ok_or(ValidationError::DescriptionLength)?;
    let location =
        trimmed_within(location, LOCATION_MIN, None).ok_or(ValidationError::LocationInvalid)?;

    Ok(NewReport::from_validated(title, description, date, location))
}

/// Values a loosely typed client would treat as "filled in"
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn within(s: &str, min: usize, max: Option<usize>) -> bool {
    let len = s.chars().count();
    len >= min && max.map_or(true, |max| len <= max)
}

fn text_within(value: Value, min: usize, max: Option<usize>) -> Option<String> {
    match value {
        Value::String(s) if within(&s, min, max) => Some(s),
        _ => None,
    }
}

fn trimmed_within(s: String, min: usize, max: Option<usize>) -> Option<String> {
    let trimmed = s.trim();
    within(trimmed, min, max).then(|| trimmed.to_string())
}

/// Parse a date given as text or as epoch milliseconds
pub fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => {
            let millis = match n.as_i64() {
                Some(millis) => millis,
                None => {
                    let f = n.as_f64()?;
                    if !f.is_finite() {
                        return None;
                    }
                    f.trunc() as i64
                }
            };
            DateTime::from_timestamp_millis(millis)
        }
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|naive| naive.and_utc())
}
