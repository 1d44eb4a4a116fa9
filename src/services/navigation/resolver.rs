// Active date resolution
// Reads every observable field through override > internal > default precedence

use chrono::NaiveDateTime;

use super::notifier::Snapshot;
use super::options::NavigatorOptions;
use super::state::{Controlled, InternalState};
use crate::models::granularity::{self, Granularity, ValueType};
use crate::models::value::{CalendarValue, Endpoint, RangeSelection};
use crate::services::normalizer::{self, NormalizeArgs};
use crate::utils::date;

/// Pick the controlled override if present, then internal state, then the lazy default.
pub fn resolve<T: Clone>(
    controlled: Option<&T>,
    internal: Option<&T>,
    lazy_default: impl FnOnce() -> T,
) -> T {
    match (controlled, internal) {
        (Some(value), _) => value.clone(),
        (None, Some(value)) => value.clone(),
        (None, None) => lazy_default(),
    }
}

/// Page anchor for `value` shown in `requested_view` (or the fallback view).
///
/// Without a value the page containing `now` is used.
pub fn compute_active_start_date(
    options: &NavigatorOptions,
    requested_view: Option<Granularity>,
    value: Option<&CalendarValue>,
    now: NaiveDateTime,
) -> NaiveDateTime {
    let view = granularity::resolve_view(requested_view, options.min_detail, options.max_detail);
    let args = NormalizeArgs::new(value, options.bounds, options.max_detail);
    let value_from = normalizer::boundary_value(&args, Endpoint::Start).unwrap_or(now);
    date::begin_of(view.period(), value_from)
}

/// Page anchor used before any transition has set one.
///
/// An explicit start date wins, snapped to the beginning of its page.
pub fn compute_initial_active_start_date(
    options: &NavigatorOptions,
    requested_view: Option<Granularity>,
    explicit: Option<NaiveDateTime>,
    value: Option<&CalendarValue>,
    now: NaiveDateTime,
) -> NaiveDateTime {
    match explicit {
        Some(date) => {
            let view = granularity::resolve_view(requested_view, options.min_detail, options.max_detail);
            date::begin_of(view.period(), date)
        }
        None => compute_active_start_date(options, requested_view, value, now),
    }
}

/// Values computed once when the navigator is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub initial_active_start_date: NaiveDateTime,
    /// Clock reading used when no value pins the page
    pub now: NaiveDateTime,
}

/// Read-only view over one navigator state.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    options: &'a NavigatorOptions,
    controlled: &'a Controlled,
    state: &'a InternalState,
    defaults: Defaults,
}

impl<'a> Resolver<'a> {
    pub fn new(
        options: &'a NavigatorOptions,
        controlled: &'a Controlled,
        state: &'a InternalState,
        defaults: Defaults,
    ) -> Self {
        Self {
            options,
            controlled,
            state,
            defaults,
        }
    }

    /// The same configuration resolved over a different internal state.
    pub fn with_state<'b>(&'b self, state: &'b InternalState) -> Resolver<'b> {
        Resolver {
            options: self.options,
            controlled: self.controlled,
            state,
            defaults: self.defaults,
        }
    }

    pub fn options(&self) -> &'a NavigatorOptions {
        self.options
    }

    pub fn controlled(&self) -> &'a Controlled {
        self.controlled
    }

    pub fn state(&self) -> &'a InternalState {
        self.state
    }

    pub fn defaults(&self) -> Defaults {
        self.defaults
    }

    pub fn active_start_date(&self) -> NaiveDateTime {
        resolve(
            self.controlled.active_start_date.as_ref(),
            self.state.active_start_date.as_ref(),
            || self.defaults.initial_active_start_date,
        )
    }

    /// Current value.
    ///
    /// A half-finished range selection is never hidden by a controlled value;
    /// the override takes effect again once both endpoints exist.
    pub fn value(&self) -> Option<CalendarValue> {
        if self.options.select_range && self.internal_range_pending() {
            log::trace!("range selection pending, internal value wins over override");
            return self.state.value;
        }
        resolve(self.controlled.value.as_ref(), Some(&self.state.value), || None)
    }

    fn internal_range_pending(&self) -> bool {
        RangeSelection::from_value(self.state.value.as_ref()).is_pending()
    }

    pub fn view(&self) -> Granularity {
        let requested = resolve(self.controlled.view.as_ref(), self.state.view.as_ref(), || {
            self.options.max_detail
        });
        granularity::resolve_view(Some(requested), self.options.min_detail, self.options.max_detail)
    }

    pub fn views(&self) -> Vec<Granularity> {
        self.options.views()
    }

    pub fn value_type(&self) -> ValueType {
        self.options.value_type()
    }

    pub fn hover(&self) -> Option<NaiveDateTime> {
        if self.options.select_range {
            self.state.hover
        } else {
            None
        }
    }

    pub fn range_selection(&self) -> RangeSelection {
        RangeSelection::from_value(self.value().as_ref())
    }

    pub fn drill_down_available(&self) -> bool {
        granularity::more_detailed(self.view(), &self.views()).is_some()
    }

    pub fn drill_up_available(&self) -> bool {
        granularity::less_detailed(self.view(), &self.views()).is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            active_start_date: self.active_start_date(),
            view: self.view(),
            value: self.value(),
        }
    }
}
