// Granularity module
// Calendar zoom levels and the hierarchy rules between them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::services::error::NavigatorError;
use crate::utils::date::Period;

/// Zoom level a calendar page is displayed at.
///
/// `YearQuarter` stands in for `Year` when it is the most detailed view and
/// never appears alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum Granularity {
    Century,
    Decade,
    Year,
    YearQuarter,
    Month,
}

/// Granularity of the values a view produces when its tiles are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueType {
    Decade,
    Year,
    Month,
    YearQuarter,
    Day,
}

/// Which per-granularity click notification a tile press raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TileKind {
    Decade,
    Year,
    Quarter,
    Month,
    Day,
}

impl Granularity {
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Century => "century",
            Granularity::Decade => "decade",
            Granularity::Year => "year",
            Granularity::YearQuarter => "yearQuarter",
            Granularity::Month => "month",
        }
    }

    /// Period a page of this view spans for boundary snapping.
    pub fn period(self) -> Period {
        match self {
            Granularity::Century => Period::Century,
            Granularity::Decade => Period::Decade,
            Granularity::Year => Period::Year,
            Granularity::YearQuarter => Period::Quarter,
            Granularity::Month => Period::Month,
        }
    }

    /// Tiles shown by this view: a century page lists decades, and so on.
    pub fn tile_kind(self) -> TileKind {
        match self {
            Granularity::Century => TileKind::Decade,
            Granularity::Decade => TileKind::Year,
            Granularity::Year => TileKind::Month,
            Granularity::YearQuarter => TileKind::Quarter,
            Granularity::Month => TileKind::Day,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "century" => Ok(Granularity::Century),
            "decade" => Ok(Granularity::Decade),
            "year" => Ok(Granularity::Year),
            "yearQuarter" | "year_quarter" => Ok(Granularity::YearQuarter),
            "month" => Ok(Granularity::Month),
            other => Err(NavigatorError::InvalidView(other.to_string())),
        }
    }
}

impl TryFrom<String> for Granularity {
    type Error = NavigatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Decade => "decade",
            ValueType::Year => "year",
            ValueType::Month => "month",
            ValueType::YearQuarter => "yearQuarter",
            ValueType::Day => "day",
        }
    }

    pub fn period(self) -> Period {
        match self {
            ValueType::Decade => Period::Decade,
            ValueType::Year => Period::Year,
            ValueType::Month => Period::Month,
            ValueType::YearQuarter => Period::Quarter,
            ValueType::Day => Period::Day,
        }
    }
}

const BASE_VIEWS: [Granularity; 4] = [
    Granularity::Century,
    Granularity::Decade,
    Granularity::Year,
    Granularity::Month,
];

/// Full view ordering, least detailed first.
///
/// When `max_detail` is `YearQuarter` it takes the place of `Year`.
pub fn all_views(max_detail: Granularity) -> [Granularity; 4] {
    let mut views = BASE_VIEWS;
    if max_detail == Granularity::YearQuarter {
        for view in views.iter_mut() {
            if *view == Granularity::Year {
                *view = Granularity::YearQuarter;
            }
        }
    }
    views
}

/// Granularity of values produced by a calendar whose most detailed view is `max_detail`.
pub fn value_type(max_detail: Granularity) -> ValueType {
    match max_detail {
        Granularity::Century => ValueType::Decade,
        Granularity::Decade => ValueType::Year,
        Granularity::Year => ValueType::Month,
        Granularity::YearQuarter => ValueType::YearQuarter,
        Granularity::Month => ValueType::Day,
    }
}

/// Contiguous slice of [`all_views`] between `min_detail` and `max_detail`, inclusive.
///
/// Both bounds must be members of `all_views(max_detail)`; an empty list is
/// returned otherwise.
pub fn limited_views(min_detail: Granularity, max_detail: Granularity) -> Vec<Granularity> {
    let views = all_views(max_detail);
    let min_index = views.iter().position(|view| *view == min_detail);
    let max_index = views.iter().position(|view| *view == max_detail);

    match (min_index, max_index) {
        (Some(min_index), Some(max_index)) if min_index <= max_index => {
            views[min_index..=max_index].to_vec()
        }
        _ => Vec::new(),
    }
}

pub fn is_view_allowed(view: Granularity, min_detail: Granularity, max_detail: Granularity) -> bool {
    limited_views(min_detail, max_detail).contains(&view)
}

/// The requested view when it is allowed, `max_detail` otherwise.
pub fn resolve_view(
    requested: Option<Granularity>,
    min_detail: Granularity,
    max_detail: Granularity,
) -> Granularity {
    requested
        .filter(|view| is_view_allowed(*view, min_detail, max_detail))
        .unwrap_or(max_detail)
}

/// Check that `min_detail..=max_detail` names a non-empty slice of the hierarchy.
pub fn validate_detail_range(
    min_detail: Granularity,
    max_detail: Granularity,
) -> Result<(), NavigatorError> {
    if limited_views(min_detail, max_detail).is_empty() {
        return Err(NavigatorError::InvalidConfiguration(format!(
            "min_detail '{}' must not be more detailed than max_detail '{}' and both must share one hierarchy",
            min_detail, max_detail
        )));
    }
    Ok(())
}

/// Next view towards more detail within `views`, if any.
pub fn more_detailed(view: Granularity, views: &[Granularity]) -> Option<Granularity> {
    let index = views.iter().position(|candidate| *candidate == view)?;
    views.get(index + 1).copied()
}

/// Next view towards less detail within `views`, if any.
pub fn less_detailed(view: Granularity, views: &[Granularity]) -> Option<Granularity> {
    let index = views.iter().position(|candidate| *candidate == view)?;
    index.checked_sub(1).and_then(|previous| views.get(previous).copied())
}
