// Property-based tests for period arithmetic and navigation gestures
// Checks the boundary and gesture laws against random dates

use calendar_navigator::models::granularity::{self, Granularity};
use calendar_navigator::utils::date::{self, Period};
use calendar_navigator::{CalendarNavigator, CalendarValue, NavigatorConfig};
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

const PERIODS: [Period; 6] = [
    Period::Century,
    Period::Decade,
    Period::Year,
    Period::Quarter,
    Period::Month,
    Period::Day,
];

const GRANULARITIES: [Granularity; 5] = [
    Granularity::Century,
    Granularity::Decade,
    Granularity::Year,
    Granularity::YearQuarter,
    Granularity::Month,
];

fn any_date() -> impl Strategy<Value = NaiveDateTime> {
    (1..=9000i32, 1..=12u32, 1..=28u32, 0..24u32, 0..60u32).prop_map(
        |(year, month, day, hour, minute)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap()
        },
    )
}

fn any_period() -> impl Strategy<Value = Period> {
    prop::sample::select(PERIODS.to_vec())
}

fn any_granularity() -> impl Strategy<Value = Granularity> {
    prop::sample::select(GRANULARITIES.to_vec())
}

fn today() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

proptest! {
    /// Property: the end of a period lies in the same period
    #[test]
    fn prop_begin_of_end_is_begin(period in any_period(), date in any_date()) {
        let begin = date::begin_of(period, date);
        prop_assert_eq!(date::begin_of(period, date::end_of(period, date)), begin);
        prop_assert!(begin <= date);
        prop_assert!(date <= date::end_of(period, date));
    }

    /// Property: snapping is idempotent
    #[test]
    fn prop_begin_of_is_idempotent(period in any_period(), date in any_date()) {
        let begin = date::begin_of(period, date);
        prop_assert_eq!(date::begin_of(period, begin), begin);
    }

    /// Property: limited views are a contiguous run holding both endpoints
    #[test]
    fn prop_limited_views_contiguous(min in any_granularity(), max in any_granularity()) {
        let all = granularity::all_views(max);
        let views = granularity::limited_views(min, max);
        prop_assume!(!views.is_empty());

        prop_assert_eq!(views.first().copied(), Some(min));
        prop_assert_eq!(views.last().copied(), Some(max));
        let start = all.iter().position(|view| *view == min).unwrap();
        prop_assert_eq!(&all[start..start + views.len()], views.as_slice());
    }

    /// Property: drilling down then up returns to the starting page's view
    #[test]
    fn prop_drill_round_trip(origin in any_date(), offset in 0..9u32) {
        let config = NavigatorConfig::default()
            .with_default_view(Granularity::Decade)
            .with_default_active_start_date(origin);
        let mut nav = CalendarNavigator::new_at(&config, today()).unwrap();
        let start = nav.active_start_date();

        let clicked = date::shift_years(start, offset as i32);
        nav.drill_down(clicked);
        prop_assert_eq!(nav.view(), Granularity::Year);
        nav.drill_up();

        prop_assert_eq!(nav.view(), Granularity::Decade);
        prop_assert_eq!(nav.active_start_date(), date::begin_of(Period::Decade, start));
    }

    /// Property: a range is ordered regardless of click order
    #[test]
    fn prop_range_order_independent(first in any_date(), second in any_date()) {
        let config = NavigatorConfig::default().with_range_selection(false);
        let mut forward = CalendarNavigator::new_at(&config, today()).unwrap();
        let mut backward = CalendarNavigator::new_at(&config, today()).unwrap();

        forward.select(first);
        forward.select(second);
        backward.select(second);
        backward.select(first);

        let (earlier, later) = if first <= second { (first, second) } else { (second, first) };
        let expected = CalendarValue::Range(
            date::begin_of(Period::Day, earlier),
            date::end_of(Period::Day, later),
        );
        prop_assert_eq!(forward.value(), Some(expected));
        prop_assert_eq!(backward.value(), Some(expected));
    }
}
