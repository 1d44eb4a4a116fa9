// Navigator options
// Validated, coerced form of NavigatorConfig

use crate::models::granularity::{self, Granularity, ValueType};
use crate::models::settings::{CalendarType, NavigatorConfig};
use crate::models::value::{Bounds, ReturnValue};
use crate::services::error::NavigatorError;
use crate::services::normalizer;

/// Fixed settings a navigator runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorOptions {
    pub bounds: Bounds,
    pub min_detail: Granularity,
    pub max_detail: Granularity,
    pub select_range: bool,
    pub allow_partial_range: bool,
    pub return_value: ReturnValue,
    pub calendar_type: CalendarType,
    pub show_double_view: bool,
    pub show_fixed_number_of_weeks: bool,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            min_detail: Granularity::Century,
            max_detail: Granularity::Month,
            select_range: false,
            allow_partial_range: false,
            return_value: ReturnValue::Start,
            calendar_type: CalendarType::Iso8601,
            show_double_view: false,
            show_fixed_number_of_weeks: false,
        }
    }
}

impl NavigatorOptions {
    pub fn from_config(config: &NavigatorConfig) -> Result<Self, NavigatorError> {
        granularity::validate_detail_range(config.min_detail, config.max_detail)?;

        let defaults = Bounds::default();
        let min_date = match &config.min_date {
            Some(raw) => normalizer::coerce(raw)?,
            None => defaults.min_date,
        };
        let max_date = match &config.max_date {
            Some(raw) => normalizer::coerce(raw)?,
            None => defaults.max_date,
        };
        if min_date > max_date {
            log::warn!(
                "min_date {} is after max_date {}; values will clamp to max_date",
                min_date,
                max_date
            );
        }

        Ok(Self {
            bounds: Bounds::new(min_date, max_date),
            min_detail: config.min_detail,
            max_detail: config.max_detail,
            select_range: config.select_range,
            allow_partial_range: config.allow_partial_range,
            return_value: config.return_value,
            calendar_type: config.calendar_type,
            show_double_view: config.show_double_view,
            show_fixed_number_of_weeks: config.show_fixed_number_of_weeks,
        })
    }

    /// Views a user can navigate between, least detailed first.
    pub fn views(&self) -> Vec<Granularity> {
        granularity::limited_views(self.min_detail, self.max_detail)
    }

    pub fn value_type(&self) -> ValueType {
        granularity::value_type(self.max_detail)
    }
}
