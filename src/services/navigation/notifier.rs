// Change notifier
// Diffs committed patches against the pre-transition snapshot and lists callbacks to fire

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::state::StatePatch;
use crate::models::granularity::{Granularity, TileKind};
use crate::models::value::{same_instant, CalendarValue};

/// Observable fields captured immediately before a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub active_start_date: NaiveDateTime,
    pub view: Granularity,
    pub value: Option<CalendarValue>,
}

/// Arguments passed to view and start-date callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewArgs {
    pub active_start_date: NaiveDateTime,
    pub view: Granularity,
}

/// Payload of `on_change`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChangedValue {
    Single(NaiveDateTime),
    Range(NaiveDateTime, NaiveDateTime),
    /// First endpoint of a range, reported only when partial ranges are allowed
    PartialRange([NaiveDateTime; 1]),
}

/// A callback to run once a transition has been committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    TileClicked { kind: TileKind, date: NaiveDateTime },
    ActiveStartDateChanged(ViewArgs),
    ViewChanged(ViewArgs),
    ValueChanged(ChangedValue),
    DrilledDown(ViewArgs),
    DrilledUp(ViewArgs),
}

/// Host callbacks. Every method defaults to doing nothing.
pub trait CalendarCallbacks {
    fn on_change(&mut self, _value: ChangedValue) {}
    fn on_active_start_date_change(&mut self, _args: ViewArgs) {}
    fn on_view_change(&mut self, _args: ViewArgs) {}
    fn on_drill_down(&mut self, _args: ViewArgs) {}
    fn on_drill_up(&mut self, _args: ViewArgs) {}
    fn on_click_day(&mut self, _date: NaiveDateTime) {}
    fn on_click_month(&mut self, _date: NaiveDateTime) {}
    fn on_click_quarter(&mut self, _date: NaiveDateTime) {}
    fn on_click_year(&mut self, _date: NaiveDateTime) {}
    fn on_click_decade(&mut self, _date: NaiveDateTime) {}
}

impl CalendarCallbacks for () {}

impl Effect {
    /// Name of the host callback this effect invokes.
    pub fn callback_name(&self) -> &'static str {
        match self {
            Effect::TileClicked { kind, .. } => match kind {
                TileKind::Decade => "onClickDecade",
                TileKind::Year => "onClickYear",
                TileKind::Quarter => "onClickQuarter",
                TileKind::Month => "onClickMonth",
                TileKind::Day => "onClickDay",
            },
            Effect::ActiveStartDateChanged(_) => "onActiveStartDateChange",
            Effect::ViewChanged(_) => "onViewChange",
            Effect::ValueChanged(_) => "onChange",
            Effect::DrilledDown(_) => "onDrillDown",
            Effect::DrilledUp(_) => "onDrillUp",
        }
    }

    pub fn deliver<C: CalendarCallbacks + ?Sized>(&self, callbacks: &mut C) {
        match *self {
            Effect::TileClicked { kind, date } => match kind {
                TileKind::Decade => callbacks.on_click_decade(date),
                TileKind::Year => callbacks.on_click_year(date),
                TileKind::Quarter => callbacks.on_click_quarter(date),
                TileKind::Month => callbacks.on_click_month(date),
                TileKind::Day => callbacks.on_click_day(date),
            },
            Effect::ActiveStartDateChanged(args) => callbacks.on_active_start_date_change(args),
            Effect::ViewChanged(args) => callbacks.on_view_change(args),
            Effect::ValueChanged(value) => callbacks.on_change(value),
            Effect::DrilledDown(args) => callbacks.on_drill_down(args),
            Effect::DrilledUp(args) => callbacks.on_drill_up(args),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.callback_name();
        match self {
            Effect::TileClicked { date, .. } => write!(f, "{}({})", name, date),
            Effect::ActiveStartDateChanged(args)
            | Effect::ViewChanged(args)
            | Effect::DrilledDown(args)
            | Effect::DrilledUp(args) => {
                write!(f, "{}({}, {})", name, args.active_start_date, args.view)
            }
            Effect::ValueChanged(value) => match value {
                ChangedValue::Single(date) => write!(f, "{}({})", name, date),
                ChangedValue::Range(start, end) => write!(f, "{}([{}, {}])", name, start, end),
                ChangedValue::PartialRange([date]) => write!(f, "{}([{}])", name, date),
            },
        }
    }
}

/// Notification for a tile pressed while `view` is displayed.
pub fn tile_click(view: Granularity, date: NaiveDateTime) -> Effect {
    Effect::TileClicked {
        kind: view.tile_kind(),
        date,
    }
}

/// How a committed value is reported, or `None` when it is held back.
///
/// With range selection on, a lone endpoint is only reported when partial
/// ranges are allowed, wrapped in a one-element collection.
pub fn change_payload(
    value: CalendarValue,
    select_range: bool,
    allow_partial_range: bool,
) -> Option<ChangedValue> {
    match value {
        CalendarValue::Range(start, end) => Some(ChangedValue::Range(start, end)),
        CalendarValue::Single(date) if !select_range => Some(ChangedValue::Single(date)),
        CalendarValue::Single(date) if allow_partial_range => Some(ChangedValue::PartialRange([date])),
        CalendarValue::Single(_) => None,
    }
}

fn value_changed(next: &CalendarValue, previous: Option<&CalendarValue>) -> bool {
    match previous {
        Some(previous) => !next.same_as(previous),
        None => true,
    }
}

/// Change callbacks for a committed `patch`, in firing order.
///
/// Only fields present in the patch are compared; `args` carries the
/// committed start date and view handed to the view callbacks.
pub fn changes(
    before: &Snapshot,
    patch: &StatePatch,
    args: ViewArgs,
    select_range: bool,
    allow_partial_range: bool,
) -> Vec<Effect> {
    let mut effects = Vec::new();

    if let Some(date) = patch.active_start_date {
        if !same_instant(date, before.active_start_date) {
            effects.push(Effect::ActiveStartDateChanged(args));
        }
    }

    if let Some(view) = patch.view {
        if view != before.view {
            effects.push(Effect::ViewChanged(args));
        }
    }

    if let Some(value) = patch.value {
        if value_changed(&value, before.value.as_ref()) {
            if let Some(payload) = change_payload(value, select_range, allow_partial_range) {
                effects.push(Effect::ValueChanged(payload));
            }
        }
    }

    effects
}
