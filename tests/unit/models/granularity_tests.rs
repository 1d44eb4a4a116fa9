// Unit tests for the view hierarchy
// Parameterized over every granularity

use calendar_navigator::models::granularity::{self, Granularity, TileKind, ValueType};
use calendar_navigator::utils::date::Period;
use calendar_navigator::NavigatorError;
use test_case::test_case;

#[test_case(Granularity::Century, ValueType::Decade ; "century produces decades")]
#[test_case(Granularity::Decade, ValueType::Year ; "decade produces years")]
#[test_case(Granularity::Year, ValueType::Month ; "year produces months")]
#[test_case(Granularity::YearQuarter, ValueType::YearQuarter ; "year quarter produces quarters")]
#[test_case(Granularity::Month, ValueType::Day ; "month produces days")]
fn test_value_type(max_detail: Granularity, expected: ValueType) {
    assert_eq!(granularity::value_type(max_detail), expected);
}

#[test_case(Granularity::Century, TileKind::Decade, "onClickDecade")]
#[test_case(Granularity::Decade, TileKind::Year, "onClickYear")]
#[test_case(Granularity::Year, TileKind::Month, "onClickMonth")]
#[test_case(Granularity::YearQuarter, TileKind::Quarter, "onClickQuarter")]
#[test_case(Granularity::Month, TileKind::Day, "onClickDay")]
fn test_tile_kind(view: Granularity, kind: TileKind, callback: &str) {
    assert_eq!(view.tile_kind(), kind);
    let effect = calendar_navigator::services::navigation::notifier::tile_click(
        view,
        calendar_navigator::utils::date::default_min_date(),
    );
    assert_eq!(effect.callback_name(), callback);
}

#[test_case(Granularity::YearQuarter, Period::Quarter)]
#[test_case(Granularity::Year, Period::Year)]
#[test_case(Granularity::Century, Period::Century)]
fn test_page_period(view: Granularity, period: Period) {
    assert_eq!(view.period(), period);
}

#[test_case("century", Granularity::Century)]
#[test_case("decade", Granularity::Decade)]
#[test_case("year", Granularity::Year)]
#[test_case("yearQuarter", Granularity::YearQuarter)]
#[test_case("month", Granularity::Month)]
fn test_names_round_trip(name: &str, view: Granularity) {
    assert_eq!(name.parse::<Granularity>().unwrap(), view);
    assert_eq!(view.to_string(), name);
}

#[test_case("week" ; "week")]
#[test_case("" ; "empty")]
#[test_case("Month" ; "capitalised month")]
fn test_unknown_names_are_invalid_views(name: &str) {
    assert!(matches!(
        name.parse::<Granularity>(),
        Err(NavigatorError::InvalidView(_))
    ));
}

#[test_case(Granularity::Century, Granularity::Month, 4)]
#[test_case(Granularity::Decade, Granularity::YearQuarter, 2)]
#[test_case(Granularity::Month, Granularity::Month, 1)]
#[test_case(Granularity::Year, Granularity::YearQuarter, 0 ; "year is replaced by year quarter")]
fn test_limited_view_count(min: Granularity, max: Granularity, count: usize) {
    assert_eq!(granularity::limited_views(min, max).len(), count);
}

#[test]
fn test_out_of_range_view_falls_back() {
    assert_eq!(
        granularity::resolve_view(
            Some(Granularity::Month),
            Granularity::Century,
            Granularity::Decade
        ),
        Granularity::Decade
    );
}
