//! Request input checks shared by the handlers.

use serde_json::{Map, Number, Value};

use super::error::ApiError;
use crate::film::Film;

/// The four fields POST and PUT require.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmInput {
    pub title: String,
    pub link: String,
    pub duration: Number,
    pub budget: Number,
}

impl FilmInput {
    /// `title` and `link` must be non-empty strings, `duration` and `budget`
    /// non-negative numbers.
    pub fn from_body(body: &Value) -> Result<Self, ApiError> {
        let title = non_empty_str(body.get("title")).ok_or(ApiError::InvalidData)?;
        let link = non_empty_str(body.get("link")).ok_or(ApiError::InvalidData)?;
        let duration = non_negative(body.get("duration")).ok_or(ApiError::InvalidData)?;
        let budget = non_negative(body.get("budget")).ok_or(ApiError::InvalidData)?;

        Ok(Self {
            title: title.to_string(),
            link: link.to_string(),
            duration,
            budget,
        })
    }

    pub fn into_film(self, id: u64) -> Film {
        Film::new(id, self.title, self.duration, self.budget, self.link)
    }
}

/// Check a PATCH body and hand back the object to merge.
///
/// Rejected when none of `title`, `link`, `duration`, `budget` is supplied,
/// or when `title` or `link` is an empty string. Anything else in the body
/// goes through to the merge untouched.
pub fn patch_fields(body: &Value) -> Result<&Map<String, Value>, ApiError> {
    let fields = body.as_object().ok_or(ApiError::BadRequest)?;

    let empty = |key: &str| matches!(fields.get(key), Some(Value::String(s)) if s.is_empty());
    if empty("title") || empty("link") {
        return Err(ApiError::BadRequest);
    }

    let supplied = supplied_text(fields.get("title"))
        || supplied_text(fields.get("link"))
        || non_negative(fields.get("duration")).is_some()
        || non_negative(fields.get("budget")).is_some();
    if !supplied {
        return Err(ApiError::BadRequest);
    }

    Ok(fields)
}

/// Parse a `/:id` path segment.
pub fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// Parse the `minimum-duration` query value.
///
/// Absent, blank and `0` all mean "no filter". Anything that is not a
/// non-negative number is a bare 400.
pub fn parse_minimum_duration(raw: Option<&str>) -> Result<Option<f64>, ApiError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    let minutes: f64 = raw.parse().map_err(|_| ApiError::BadRequest)?;
    if minutes.is_nan() || minutes < 0.0 {
        return Err(ApiError::BadRequest);
    }
    if minutes == 0.0 {
        return Ok(None);
    }
    Ok(Some(minutes))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn supplied_text(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn non_negative(value: Option<&Value>) -> Option<Number> {
    match value {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v >= 0.0) => Some(n.clone()),
        _ => None,
    }
}
