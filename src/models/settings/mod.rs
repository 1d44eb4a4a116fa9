// Settings module
// Navigator configuration as read from TOML or assembled by a host

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::granularity::Granularity;
use crate::models::value::{DateInput, LooseValue, ReturnValue};
use crate::services::error::NavigatorError;

/// Week convention used for week starts and week numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CalendarType {
    /// Weeks start on Monday; week one contains January 4th
    #[default]
    #[serde(rename = "ISO 8601")]
    Iso8601,
    /// Weeks start on Sunday; week one contains January 1st
    #[serde(rename = "US")]
    Us,
}

impl CalendarType {
    pub fn as_str(self) -> &'static str {
        match self {
            CalendarType::Iso8601 => "ISO 8601",
            CalendarType::Us => "US",
        }
    }
}

impl fmt::Display for CalendarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarType {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ISO 8601" | "iso8601" | "iso" => Ok(CalendarType::Iso8601),
            "US" | "us" => Ok(CalendarType::Us),
            other => Err(NavigatorError::InvalidConfiguration(format!(
                "unknown calendar_type '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for CalendarType {
    type Error = NavigatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Everything a host hands the navigator at construction.
///
/// `view`, `value` and `active_start_date` are controlled overrides: while set
/// they win over whatever the navigator tracks itself. The `default_*`
/// counterparts only seed the internal state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub min_date: Option<DateInput>,
    pub max_date: Option<DateInput>,
    pub min_detail: Granularity,
    pub max_detail: Granularity,
    pub view: Option<Granularity>,
    pub default_view: Option<Granularity>,
    pub value: Option<LooseValue>,
    pub default_value: Option<LooseValue>,
    pub active_start_date: Option<DateInput>,
    pub default_active_start_date: Option<DateInput>,
    pub select_range: bool,
    pub allow_partial_range: bool,
    pub return_value: ReturnValue,
    pub calendar_type: CalendarType,
    pub show_double_view: bool,
    pub show_fixed_number_of_weeks: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            min_date: None,
            max_date: None,
            min_detail: Granularity::Century,
            max_detail: Granularity::Month,
            view: None,
            default_view: None,
            value: None,
            default_value: None,
            active_start_date: None,
            default_active_start_date: None,
            select_range: false,
            allow_partial_range: false,
            return_value: ReturnValue::Start,
            calendar_type: CalendarType::Iso8601,
            show_double_view: false,
            show_fixed_number_of_weeks: false,
        }
    }
}

impl NavigatorConfig {
    /// Restrict the navigable views to `min_detail..=max_detail`.
    pub fn with_details(mut self, min_detail: Granularity, max_detail: Granularity) -> Self {
        self.min_detail = min_detail;
        self.max_detail = max_detail;
        self
    }

    pub fn with_bounds(mut self, min_date: impl Into<DateInput>, max_date: impl Into<DateInput>) -> Self {
        self.min_date = Some(min_date.into());
        self.max_date = Some(max_date.into());
        self
    }

    pub fn with_default_view(mut self, view: Granularity) -> Self {
        self.default_view = Some(view);
        self
    }

    pub fn with_default_value(mut self, value: impl Into<LooseValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_default_active_start_date(mut self, date: impl Into<DateInput>) -> Self {
        self.default_active_start_date = Some(date.into());
        self
    }

    pub fn with_range_selection(mut self, allow_partial_range: bool) -> Self {
        self.select_range = true;
        self.allow_partial_range = allow_partial_range;
        self
    }

    pub fn with_return_value(mut self, return_value: ReturnValue) -> Self {
        self.return_value = return_value;
        self
    }

    pub fn with_calendar_type(mut self, calendar_type: CalendarType) -> Self {
        self.calendar_type = calendar_type;
        self
    }
}
