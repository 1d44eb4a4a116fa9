// Page navigation
// Previous/next page anchors for the navigation header

use chrono::{Datelike, NaiveDateTime};

use crate::models::granularity::Granularity;
use crate::models::value::Bounds;
use crate::utils::date::{self, Period};

/// How far a previous/next control moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageStep {
    /// One page
    Single,
    /// The larger jump: a year of months, a decade of years, a century of decades
    Double,
}

fn pages_per_step(view: Granularity, step: PageStep) -> Option<i32> {
    match (step, view) {
        (PageStep::Single, _) => Some(1),
        (PageStep::Double, Granularity::Month) => Some(12),
        (PageStep::Double, Granularity::Year | Granularity::YearQuarter | Granularity::Decade) => {
            Some(10)
        }
        (PageStep::Double, Granularity::Century) => None,
    }
}

/// Anchor of the page `pages` away from the one containing `active_start_date`.
///
/// Year-quarter pages show a whole year and move a year at a time, keeping
/// the anchor on a quarter boundary.
pub fn page_start(view: Granularity, active_start_date: NaiveDateTime, pages: i32) -> NaiveDateTime {
    let begin = date::begin_of(view.period(), active_start_date);
    match view {
        Granularity::Century => date::shift_years(begin, pages.saturating_mul(100)),
        Granularity::Decade => date::shift_years(begin, pages.saturating_mul(10)),
        Granularity::Year | Granularity::YearQuarter => date::shift_years(begin, pages),
        Granularity::Month => date::shift_months(begin, pages),
    }
}

/// Last millisecond of the page anchored at `page_anchor`.
fn page_end(view: Granularity, page_anchor: NaiveDateTime) -> NaiveDateTime {
    let last_period = match view {
        Granularity::YearQuarter => Period::Year,
        other => other.period(),
    };
    date::end_of(last_period, page_anchor)
}

/// Anchor of the following page, or `None` when it starts after `max_date`.
pub fn next_target(
    view: Granularity,
    active_start_date: NaiveDateTime,
    step: PageStep,
    bounds: Bounds,
) -> Option<NaiveDateTime> {
    let pages = pages_per_step(view, step)?;
    let target = page_start(view, active_start_date, pages);
    if bounds.max_date < target {
        return None;
    }
    Some(target)
}

/// Anchor of the preceding page, or `None` when it ends at or before `min_date`.
pub fn previous_target(
    view: Granularity,
    active_start_date: NaiveDateTime,
    step: PageStep,
    bounds: Bounds,
) -> Option<NaiveDateTime> {
    let pages = pages_per_step(view, step)?;
    let target = page_start(view, active_start_date, -pages);
    if target.year() < 0 {
        return None;
    }
    let end = page_end(view, target);
    if bounds.min_date >= end {
        return None;
    }
    Some(target)
}

/// Anchor of the second page shown side by side in double view.
pub fn secondary_page_start(view: Granularity, active_start_date: NaiveDateTime) -> NaiveDateTime {
    page_start(view, active_start_date, 1)
}
