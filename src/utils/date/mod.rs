// Date utility functions
// Period boundary arithmetic shared by the navigator and the week-number rows

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::settings::CalendarType;

/// Calendar periods understood by the boundary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Period {
    Century,
    Decade,
    Year,
    Quarter,
    Month,
    Day,
}

/// Earliest date a calendar accepts when no `min_date` is configured (0001-01-01).
pub fn default_min_date() -> NaiveDateTime {
    first_of_month(1, 1)
}

/// Latest representable instant, used when no `max_date` is configured.
pub fn default_max_date() -> NaiveDateTime {
    NaiveDateTime::MAX
}

fn first_of_month_opt(year: i32, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1).and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Midnight on the first of the month, saturating at the representable range.
fn first_of_month(year: i32, month: u32) -> NaiveDateTime {
    first_of_month_opt(year, month).unwrap_or(if year < 0 {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    })
}

// Centuries run 2001-2100 and decades 2021-2030, the same way the tiles label them.
fn century_start_year(year: i32) -> i32 {
    year + (1 - year) % 100
}

fn decade_start_year(year: i32) -> i32 {
    year + (1 - year) % 10
}

fn quarter_start_month(month: u32) -> u32 {
    ((month - 1) / 3) * 3 + 1
}

/// Shift a date by whole months, landing on the first of the target month.
pub fn shift_months(date: NaiveDateTime, delta_months: i32) -> NaiveDateTime {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    first_of_month(new_year, new_month as u32)
}

/// Shift a date by whole years, landing on the first of the same month.
pub fn shift_years(date: NaiveDateTime, delta_years: i32) -> NaiveDateTime {
    shift_months(date, delta_years.saturating_mul(12))
}

/// Beginning of the period containing `date`.
pub fn begin_of(period: Period, date: NaiveDateTime) -> NaiveDateTime {
    let year = date.year();
    match period {
        Period::Century => first_of_month(century_start_year(year), 1),
        Period::Decade => first_of_month(decade_start_year(year), 1),
        Period::Year => first_of_month(year, 1),
        Period::Quarter => first_of_month(year, quarter_start_month(date.month())),
        Period::Month => first_of_month(year, date.month()),
        Period::Day => date.date().and_hms_opt(0, 0, 0).unwrap_or(date),
    }
}

fn next_period_start_opt(period: Period, date: NaiveDateTime) -> Option<NaiveDateTime> {
    let begin = begin_of(period, date);
    let months = match period {
        Period::Century => 1200,
        Period::Decade => 120,
        Period::Year => 12,
        Period::Quarter => 3,
        Period::Month => 1,
        Period::Day => return begin.checked_add_signed(Duration::days(1)),
    };
    let total_months = (begin.year() * 12) + (begin.month() as i32 - 1) + months;
    first_of_month_opt(total_months.div_euclid(12), total_months.rem_euclid(12) as u32 + 1)
}

/// Beginning of the period following the one containing `date`.
pub fn next_period_start(period: Period, date: NaiveDateTime) -> NaiveDateTime {
    next_period_start_opt(period, date).unwrap_or(NaiveDateTime::MAX)
}

/// Beginning of the period preceding the one containing `date`.
pub fn previous_period_start(period: Period, date: NaiveDateTime) -> NaiveDateTime {
    let begin = begin_of(period, date);
    match period {
        Period::Century => shift_years(begin, -100),
        Period::Decade => shift_years(begin, -10),
        Period::Year => shift_years(begin, -1),
        Period::Quarter => shift_months(begin, -3),
        Period::Month => shift_months(begin, -1),
        Period::Day => begin
            .checked_sub_signed(Duration::days(1))
            .unwrap_or(NaiveDateTime::MIN),
    }
}

/// Last millisecond of the period containing `date`.
pub fn end_of(period: Period, date: NaiveDateTime) -> NaiveDateTime {
    match next_period_start_opt(period, date) {
        Some(next) => next
            .checked_sub_signed(Duration::milliseconds(1))
            .unwrap_or(NaiveDateTime::MIN),
        None => NaiveDateTime::MAX,
    }
}

/// Begin and end of the period containing `date`.
pub fn range_of(period: Period, date: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    (begin_of(period, date), end_of(period, date))
}

/// Range spanning two dates in either order, widened to whole periods.
pub fn value_range(
    period: Period,
    first: NaiveDateTime,
    second: NaiveDateTime,
) -> (NaiveDateTime, NaiveDateTime) {
    let (earlier, later) = if second < first {
        (second, first)
    } else {
        (first, second)
    };
    (begin_of(period, earlier), end_of(period, later))
}

/// Clamp `date` into `[min, max]`.
pub fn clamp(date: NaiveDateTime, min: NaiveDateTime, max: NaiveDateTime) -> NaiveDateTime {
    if date < min {
        min
    } else if date > max {
        max
    } else {
        date
    }
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDateTime) -> u32 {
    let begin = begin_of(Period::Month, date);
    let next = next_period_start(Period::Month, date);
    next.signed_duration_since(begin).num_days() as u32
}

/// Zero-based position of `date` within its week.
///
/// ISO 8601 weeks start on Monday, US weeks on Sunday.
pub fn day_of_week(date: NaiveDateTime, calendar_type: CalendarType) -> u32 {
    match calendar_type {
        CalendarType::Iso8601 => date.weekday().num_days_from_monday(),
        CalendarType::Us => date.weekday().num_days_from_sunday(),
    }
}

/// Midnight on the first day of the week containing `date`.
pub fn week_begin(date: NaiveDateTime, calendar_type: CalendarType) -> NaiveDateTime {
    let day = begin_of(Period::Day, date);
    let offset = day_of_week(date, calendar_type) as i64;
    day.checked_sub_signed(Duration::days(offset))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Monday-based week start, independent of any configured calendar type.
pub fn iso_week_begin(date: NaiveDateTime) -> NaiveDateTime {
    let day = begin_of(Period::Day, date);
    let offset = date.weekday().num_days_from_monday() as i64;
    day.checked_sub_signed(Duration::days(offset))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Last millisecond of the Monday-based week containing `date`.
pub fn iso_week_end(date: NaiveDateTime) -> NaiveDateTime {
    iso_week_begin(date)
        .checked_add_signed(Duration::days(7) - Duration::milliseconds(1))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Week number of `date`.
///
/// ISO 8601 week one is the week containing January 4th; US week one is the
/// week containing January 1st.
pub fn week_number(date: NaiveDateTime, calendar_type: CalendarType) -> u32 {
    let begin_of_week = week_begin(date, calendar_type);
    let anchor_day = match calendar_type {
        CalendarType::Iso8601 => 3,
        CalendarType::Us => 0,
    };

    for year in (date.year() - 1..=date.year() + 1).rev() {
        let day_in_week_one = first_of_month(year, 1)
            .checked_add_signed(Duration::days(anchor_day))
            .unwrap_or(NaiveDateTime::MAX);
        let begin_of_first_week = week_begin(day_in_week_one, calendar_type);
        if date >= begin_of_first_week {
            let weeks = begin_of_week
                .signed_duration_since(begin_of_first_week)
                .num_days()
                / 7;
            return weeks as u32 + 1;
        }
    }

    1
}

/// The four quarter-start dates of `year`, as shown on a year-quarter page.
pub fn quarters_of_year(year: i32) -> [NaiveDateTime; 4] {
    [1, 4, 7, 10].map(|month| first_of_month(year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn at_ms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_milli_opt(h, min, s, ms)
            .unwrap()
    }

    #[test]
    fn test_century_and_decade_start_at_year_one() {
        assert_eq!(begin_of(Period::Century, at(2024, 5, 6)), at(2001, 1, 1));
        assert_eq!(begin_of(Period::Century, at(2000, 5, 6)), at(1901, 1, 1));
        assert_eq!(begin_of(Period::Century, at(2001, 1, 1)), at(2001, 1, 1));
        assert_eq!(begin_of(Period::Decade, at(2024, 5, 6)), at(2021, 1, 1));
        assert_eq!(begin_of(Period::Decade, at(2030, 12, 31)), at(2021, 1, 1));
    }

    #[test]
    fn test_quarter_boundaries() {
        assert_eq!(begin_of(Period::Quarter, at(2024, 5, 17)), at(2024, 4, 1));
        assert_eq!(
            end_of(Period::Quarter, at(2024, 5, 17)),
            at_ms(2024, 6, 30, 23, 59, 59, 999)
        );
        assert_eq!(
            end_of(Period::Quarter, at(2024, 11, 2)),
            at_ms(2024, 12, 31, 23, 59, 59, 999)
        );
    }

    #[test]
    fn test_end_of_month_handles_leap_year() {
        assert_eq!(
            end_of(Period::Month, at(2024, 2, 10)),
            at_ms(2024, 2, 29, 23, 59, 59, 999)
        );
        assert_eq!(days_in_month(at(2023, 2, 10)), 28);
        assert_eq!(days_in_month(at(2024, 2, 10)), 29);
    }

    #[test]
    fn test_end_of_day_is_last_millisecond() {
        let date = at_ms(2024, 3, 5, 14, 30, 0, 0);
        assert_eq!(begin_of(Period::Day, date), at(2024, 3, 5));
        assert_eq!(end_of(Period::Day, date), at_ms(2024, 3, 5, 23, 59, 59, 999));
    }

    #[test]
    fn test_next_and_previous_period() {
        assert_eq!(next_period_start(Period::Century, at(2024, 1, 1)), at(2101, 1, 1));
        assert_eq!(previous_period_start(Period::Decade, at(2024, 1, 1)), at(2011, 1, 1));
        assert_eq!(next_period_start(Period::Month, at(2024, 12, 15)), at(2025, 1, 1));
        assert_eq!(previous_period_start(Period::Quarter, at(2024, 2, 1)), at(2023, 10, 1));
        assert_eq!(previous_period_start(Period::Day, at(2024, 3, 1)), at(2024, 2, 29));
    }

    #[test]
    fn test_value_range_orders_endpoints() {
        let (start, end) = value_range(Period::Day, at(2024, 3, 10), at(2024, 3, 2));
        assert_eq!(start, at(2024, 3, 2));
        assert_eq!(end, at_ms(2024, 3, 10, 23, 59, 59, 999));
    }

    #[test]
    fn test_clamp() {
        let min = at(2024, 1, 1);
        let max = at(2024, 12, 31);
        assert_eq!(clamp(at(2023, 6, 1), min, max), min);
        assert_eq!(clamp(at(2025, 6, 1), min, max), max);
        assert_eq!(clamp(at(2024, 6, 1), min, max), at(2024, 6, 1));
    }

    #[test]
    fn test_upper_bound_saturates() {
        assert_eq!(end_of(Period::Century, default_max_date()), NaiveDateTime::MAX);
        assert_eq!(next_period_start(Period::Year, default_max_date()), NaiveDateTime::MAX);
    }

    #[test]
    fn test_week_begin_by_calendar_type() {
        // Wednesday, Dec 4, 2024
        let date = at(2024, 12, 4);
        assert_eq!(week_begin(date, CalendarType::Us), at(2024, 12, 1));
        assert_eq!(week_begin(date, CalendarType::Iso8601), at(2024, 12, 2));
        assert_eq!(iso_week_begin(at(2024, 12, 1)), at(2024, 11, 25));
        assert_eq!(iso_week_end(date), at_ms(2024, 12, 8, 23, 59, 59, 999));
    }

    #[test]
    fn test_iso_week_number_matches_chrono() {
        for date in [at(2021, 1, 1), at(2024, 12, 30), at(2026, 6, 15), at(2020, 12, 31)] {
            assert_eq!(
                week_number(date, CalendarType::Iso8601),
                date.iso_week().week(),
                "ISO week mismatch for {}",
                date
            );
        }
    }

    #[test]
    fn test_us_week_number() {
        // Jan 1, 2023 is a Sunday: week one starts that day
        assert_eq!(week_number(at(2023, 1, 1), CalendarType::Us), 1);
        assert_eq!(week_number(at(2023, 1, 8), CalendarType::Us), 2);
        // Dec 31, 2022 (Saturday) belongs to the week that began Dec 25
        assert_eq!(week_number(at(2022, 12, 31), CalendarType::Us), 53);
    }

    #[test]
    fn test_quarters_of_year() {
        assert_eq!(
            quarters_of_year(2024),
            [at(2024, 1, 1), at(2024, 4, 1), at(2024, 7, 1), at(2024, 10, 1)]
        );
    }
}
