// Value module
// Selected calendar values and the loose inputs they are built from

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::services::error::NavigatorError;
use crate::utils::date;

/// A selected value: one date, or an ordered `[start, end]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CalendarValue {
    Single(NaiveDateTime),
    Range(NaiveDateTime, NaiveDateTime),
}

impl CalendarValue {
    /// Build a range, swapping the endpoints if they arrive out of order.
    pub fn range(first: NaiveDateTime, second: NaiveDateTime) -> Self {
        if second < first {
            CalendarValue::Range(second, first)
        } else {
            CalendarValue::Range(first, second)
        }
    }

    /// The endpoint at `endpoint`; a single date answers for both ends.
    pub fn piece(&self, endpoint: Endpoint) -> NaiveDateTime {
        match (self, endpoint) {
            (CalendarValue::Single(date), _) => *date,
            (CalendarValue::Range(start, _), Endpoint::Start) => *start,
            (CalendarValue::Range(_, end), Endpoint::End) => *end,
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, CalendarValue::Single(_))
    }

    /// Equality by millisecond timestamp.
    pub fn same_as(&self, other: &CalendarValue) -> bool {
        match (self, other) {
            (CalendarValue::Single(a), CalendarValue::Single(b)) => same_instant(*a, *b),
            (CalendarValue::Range(a_start, a_end), CalendarValue::Range(b_start, b_end)) => {
                same_instant(*a_start, *b_start) && same_instant(*a_end, *b_end)
            }
            _ => false,
        }
    }
}

/// Two dates are the same instant when their millisecond timestamps match.
pub fn same_instant(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.and_utc().timestamp_millis() == b.and_utc().timestamp_millis()
}

/// Which end of a value or period is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

/// Shape a selection is reported in when range selection is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum ReturnValue {
    #[default]
    Start,
    End,
    Range,
}

impl ReturnValue {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnValue::Start => "start",
            ReturnValue::End => "end",
            ReturnValue::Range => "range",
        }
    }
}

impl fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnValue {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "start" => Ok(ReturnValue::Start),
            "end" => Ok(ReturnValue::End),
            "range" => Ok(ReturnValue::Range),
            other => Err(NavigatorError::InvalidConfiguration(format!(
                "invalid return_value '{}', expected start, end or range",
                other
            ))),
        }
    }
}

impl TryFrom<String> for ReturnValue {
    type Error = NavigatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A date as it arrives from configuration or a caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch
    Millis(i64),
    /// RFC 3339, `YYYY-MM-DD` or `YYYY-MM-DD[T ]HH:MM:SS[.fff]`
    Text(String),
    #[serde(skip)]
    Date(NaiveDateTime),
}

impl From<NaiveDateTime> for DateInput {
    fn from(date: NaiveDateTime) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        match date.and_hms_opt(0, 0, 0) {
            Some(midnight) => DateInput::Date(midnight),
            None => DateInput::Text(date.to_string()),
        }
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::Millis(millis)
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Millis(millis) => write!(f, "{}", millis),
            DateInput::Text(text) => f.write_str(text),
            DateInput::Date(date) => write!(f, "{}", date),
        }
    }
}

/// A value as it arrives from configuration or a caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Single(DateInput),
    Range(DateInput, DateInput),
}

impl From<DateInput> for LooseValue {
    fn from(date: DateInput) -> Self {
        LooseValue::Single(date)
    }
}

impl From<NaiveDateTime> for LooseValue {
    fn from(date: NaiveDateTime) -> Self {
        LooseValue::Single(date.into())
    }
}

impl From<&str> for LooseValue {
    fn from(text: &str) -> Self {
        LooseValue::Single(text.into())
    }
}

/// Lower and upper limits every selected value is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_date: NaiveDateTime,
    pub max_date: NaiveDateTime,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_date: date::default_min_date(),
            max_date: date::default_max_date(),
        }
    }
}

impl Bounds {
    pub fn new(min_date: NaiveDateTime, max_date: NaiveDateTime) -> Self {
        Self { min_date, max_date }
    }

    pub fn clamp(&self, value: NaiveDateTime) -> NaiveDateTime {
        date::clamp(value, self.min_date, self.max_date)
    }

    pub fn has_custom_min(&self) -> bool {
        self.min_date != date::default_min_date()
    }

    pub fn has_custom_max(&self) -> bool {
        self.max_date != date::default_max_date()
    }
}

/// Progress of a two-click range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSelection {
    /// Nothing selected yet
    Empty,
    /// First endpoint chosen, waiting for the second
    OnePending(NaiveDateTime),
    /// Both endpoints chosen
    Complete(NaiveDateTime, NaiveDateTime),
}

impl RangeSelection {
    pub fn from_value(value: Option<&CalendarValue>) -> Self {
        match value {
            None => RangeSelection::Empty,
            Some(CalendarValue::Single(date)) => RangeSelection::OnePending(*date),
            Some(CalendarValue::Range(start, end)) => RangeSelection::Complete(*start, *end),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RangeSelection::OnePending(_))
    }
}
