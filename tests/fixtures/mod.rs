// Test fixtures - reusable test data
// Provides consistent dates and navigator configurations across test files

#![allow(dead_code)]

use calendar_navigator::{CalendarNavigator, Granularity, NavigatorConfig};
use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Midnight on the given day
    pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Last millisecond of the given day
    pub fn end_of_day(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap()
    }

    /// The clock every fixture navigator is built with: June 15, 2024
    pub fn today() -> NaiveDateTime {
        at(2024, 6, 15)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        at(2024, 2, 29)
    }
}

/// Sample configurations for testing
pub mod configs {
    use super::*;

    /// Year and month views only, starting on January 2024
    pub fn year_month() -> NavigatorConfig {
        NavigatorConfig::default()
            .with_details(Granularity::Year, Granularity::Month)
            .with_default_active_start_date(dates::at(2024, 1, 1))
    }

    /// Two-click range selection without partial reports
    pub fn range() -> NavigatorConfig {
        NavigatorConfig::default().with_range_selection(false)
    }

    /// Two-click range selection reporting the first endpoint too
    pub fn partial_range() -> NavigatorConfig {
        NavigatorConfig::default().with_range_selection(true)
    }
}

/// Build a navigator whose clock reads [`dates::today`].
pub fn navigator(config: NavigatorConfig) -> CalendarNavigator {
    CalendarNavigator::new_at(&config, dates::today()).expect("fixture config is valid")
}
