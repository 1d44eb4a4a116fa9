//! Value normalization.
//!
//! Turns loose inputs into validated dates and derives the boundary values a
//! selection is reported as: the start or end of its period, clamped into the
//! configured bounds, or both as a range.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::models::granularity::{self, Granularity};
use crate::models::value::{Bounds, CalendarValue, DateInput, Endpoint, LooseValue, ReturnValue};
use crate::services::error::NavigatorError;
use crate::utils::date;

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Inputs shared by the boundary computations.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeArgs<'a> {
    pub value: Option<&'a CalendarValue>,
    pub bounds: Bounds,
    pub max_detail: Granularity,
}

impl<'a> NormalizeArgs<'a> {
    pub fn new(value: Option<&'a CalendarValue>, bounds: Bounds, max_detail: Granularity) -> Self {
        Self {
            value,
            bounds,
            max_detail,
        }
    }
}

/// Convert a loose input into a calendar instant.
pub fn coerce(raw: &DateInput) -> Result<NaiveDateTime, NavigatorError> {
    match raw {
        DateInput::Date(date) => Ok(*date),
        DateInput::Millis(millis) => DateTime::from_timestamp_millis(*millis)
            .map(|utc| utc.with_timezone(&Local).naive_local())
            .ok_or_else(|| NavigatorError::InvalidDate(millis.to_string())),
        DateInput::Text(text) => parse_text(text),
    }
}

fn parse_text(text: &str) -> Result<NaiveDateTime, NavigatorError> {
    let trimmed = text.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.with_timezone(&Local).naive_local());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .ok_or_else(|| NavigatorError::InvalidDate(text.to_string()))
}

/// Convert a loose value, validating each endpoint.
pub fn coerce_value(raw: &LooseValue) -> Result<CalendarValue, NavigatorError> {
    match raw {
        LooseValue::Single(input) => Ok(CalendarValue::Single(coerce(input)?)),
        LooseValue::Range(first, second) => Ok(CalendarValue::range(coerce(first)?, coerce(second)?)),
    }
}

/// Start or end of the value's period, clamped into bounds.
pub fn boundary_value(args: &NormalizeArgs<'_>, endpoint: Endpoint) -> Option<NaiveDateTime> {
    let piece = args.value?.piece(endpoint);
    Some(boundary_of(piece, args.bounds, args.max_detail, endpoint))
}

fn boundary_of(
    piece: NaiveDateTime,
    bounds: Bounds,
    max_detail: Granularity,
    endpoint: Endpoint,
) -> NaiveDateTime {
    let period = granularity::value_type(max_detail).period();
    let boundary = match endpoint {
        Endpoint::Start => date::begin_of(period, piece),
        Endpoint::End => date::end_of(period, piece),
    };
    bounds.clamp(boundary)
}

/// The value as a range: pairs pass through, single dates widen to their period.
pub fn as_range(args: &NormalizeArgs<'_>) -> Option<CalendarValue> {
    match args.value? {
        range @ CalendarValue::Range(_, _) => Some(*range),
        CalendarValue::Single(date) => Some(range_of(*date, args.bounds, args.max_detail)),
    }
}

fn range_of(date: NaiveDateTime, bounds: Bounds, max_detail: Granularity) -> CalendarValue {
    CalendarValue::Range(
        boundary_of(date, bounds, max_detail, Endpoint::Start),
        boundary_of(date, bounds, max_detail, Endpoint::End),
    )
}

/// The value in the shape `mode` asks for.
pub fn present(args: &NormalizeArgs<'_>, mode: ReturnValue) -> Option<CalendarValue> {
    match mode {
        ReturnValue::Start => boundary_value(args, Endpoint::Start).map(CalendarValue::Single),
        ReturnValue::End => boundary_value(args, Endpoint::End).map(CalendarValue::Single),
        ReturnValue::Range => as_range(args),
    }
}

/// [`present`] for one clicked date, which always yields a value.
pub fn present_date(
    clicked: NaiveDateTime,
    bounds: Bounds,
    max_detail: Granularity,
    mode: ReturnValue,
) -> CalendarValue {
    match mode {
        ReturnValue::Start => {
            CalendarValue::Single(boundary_of(clicked, bounds, max_detail, Endpoint::Start))
        }
        ReturnValue::End => {
            CalendarValue::Single(boundary_of(clicked, bounds, max_detail, Endpoint::End))
        }
        ReturnValue::Range => range_of(clicked, bounds, max_detail),
    }
}
