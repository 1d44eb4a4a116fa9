// Week number service
// Week-number column shown beside a month page

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::models::settings::CalendarType;
use crate::models::value::Bounds;
use crate::utils::date::{self, Period};

const FIXED_WEEK_ROWS: u32 = 6;

/// One entry of the week-number column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekNumberTile {
    pub week_start: NaiveDateTime,
    pub week_number: u32,
    /// The whole week lies before `min_date` or after `max_date`
    pub out_of_range: bool,
}

/// ISO week number of `date` and whether its week falls outside `bounds`.
///
/// Bounds left at their defaults count as absent.
pub fn week_number_tile(date: NaiveDateTime, bounds: Bounds) -> WeekNumberTile {
    let week_start = date::iso_week_begin(date);
    WeekNumberTile {
        week_start,
        week_number: date::week_number(date, CalendarType::Iso8601),
        out_of_range: week_out_of_range(week_start, bounds),
    }
}

// Monday-based regardless of calendar type.
fn week_out_of_range(week_start: NaiveDateTime, bounds: Bounds) -> bool {
    let before_min =
        bounds.has_custom_min() && week_start < date::iso_week_begin(bounds.min_date);
    let after_max =
        bounds.has_custom_max() && week_start > date::iso_week_begin(bounds.max_date);
    before_min || after_max
}

/// Number of week rows a month page needs.
pub fn row_count(
    active_start_date: NaiveDateTime,
    calendar_type: CalendarType,
    fixed_six_weeks: bool,
) -> u32 {
    if fixed_six_weeks {
        return FIXED_WEEK_ROWS;
    }

    let days_in_month = date::days_in_month(active_start_date) as i64;
    let start_weekday = date::day_of_week(active_start_date, calendar_type) as i64;
    let remaining = days_in_month - (7 - start_weekday);
    (1 + (remaining + 6).div_euclid(7)) as u32
}

/// The week-number column for the month page anchored at `active_start_date`.
///
/// Rows start on the calendar type's first weekday, while the out-of-range
/// check always compares Monday-based weeks.
pub fn week_rows(
    active_start_date: NaiveDateTime,
    calendar_type: CalendarType,
    fixed_six_weeks: bool,
    bounds: Bounds,
) -> Vec<WeekNumberTile> {
    let anchor = date::begin_of(Period::Day, active_start_date);
    let rows = row_count(anchor, calendar_type, fixed_six_weeks);

    (0..rows)
        .filter_map(|index| anchor.checked_add_signed(Duration::days(7 * index as i64)))
        .map(|day| {
            let week_start = date::week_begin(day, calendar_type);
            WeekNumberTile {
                week_start,
                week_number: date::week_number(week_start, calendar_type),
                out_of_range: week_out_of_range(date::iso_week_begin(week_start), bounds),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_week_number_tile_without_bounds() {
        let tile = week_number_tile(at(2024, 3, 6), Bounds::default());
        assert_eq!(tile.week_start, at(2024, 3, 4));
        assert_eq!(tile.week_number, 10);
        assert!(!tile.out_of_range);
    }

    #[test]
    fn test_week_number_tile_across_year_boundary() {
        // 2024-12-30 belongs to ISO week 1 of 2025
        let bounds = Bounds::new(at(2024, 12, 1), at(2025, 1, 15));
        let tile = week_number_tile(at(2024, 12, 31), bounds);
        assert_eq!(tile.week_number, 1);
        assert!(!tile.out_of_range);

        let late = week_number_tile(at(2025, 1, 20), bounds);
        assert!(late.out_of_range);
    }

    #[test]
    fn test_week_before_min_date_is_out_of_range() {
        let bounds = Bounds::new(at(2024, 3, 13), at(2024, 12, 31));
        assert!(week_number_tile(at(2024, 3, 10), bounds).out_of_range);
        assert!(!week_number_tile(at(2024, 3, 11), bounds).out_of_range);
    }

    #[test]
    fn test_row_count() {
        // March 2024 starts on a Friday
        assert_eq!(row_count(at(2024, 3, 1), CalendarType::Iso8601, false), 5);
        assert_eq!(row_count(at(2024, 3, 1), CalendarType::Us, false), 6);
        // February 2021 starts on a Monday and has 28 days
        assert_eq!(row_count(at(2021, 2, 1), CalendarType::Iso8601, false), 4);
        assert_eq!(row_count(at(2021, 2, 1), CalendarType::Iso8601, true), 6);
    }

    #[test]
    fn test_week_rows_follow_calendar_type() {
        let iso = week_rows(at(2024, 3, 1), CalendarType::Iso8601, false, Bounds::default());
        assert_eq!(iso.len(), 5);
        assert_eq!(iso[0].week_start, at(2024, 2, 26));
        assert_eq!(iso[0].week_number, 9);

        let us = week_rows(at(2024, 3, 1), CalendarType::Us, false, Bounds::default());
        assert_eq!(us[0].week_start, at(2024, 2, 25));
        assert_eq!(us[1].week_start, at(2024, 3, 3));
    }
}
