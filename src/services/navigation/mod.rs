//! Calendar navigation engine.
//!
//! [`CalendarNavigator`] owns the internal state, reads every observable field
//! through the override > internal > default precedence of [`resolver`], and
//! commits each event through the pure [`transition::transition`] step. The
//! effects a commit returns are executed by the caller, after the commit.

pub mod notifier;
pub mod options;
pub mod paging;
pub mod resolver;
pub mod state;
pub mod transition;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

pub use notifier::{CalendarCallbacks, ChangedValue, Effect, ViewArgs};
pub use options::NavigatorOptions;
pub use paging::PageStep;
pub use transition::{NavigationEvent, Transition};

use crate::models::granularity::{Granularity, ValueType};
use crate::models::settings::{CalendarType, NavigatorConfig};
use crate::models::value::{Bounds, CalendarValue, DateInput, LooseValue, RangeSelection};
use crate::services::error::NavigatorError;
use crate::services::normalizer;
use crate::services::week_numbers::{self, WeekNumberTile};
use resolver::{Defaults, Resolver};
use state::{Controlled, InternalState};

/// Everything the tile-grid renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderState {
    pub view: Granularity,
    pub views: Vec<Granularity>,
    pub active_start_date: NaiveDateTime,
    /// Anchor of the second page when two pages are shown side by side
    pub secondary_active_start_date: Option<NaiveDateTime>,
    pub value: Option<CalendarValue>,
    pub value_type: ValueType,
    pub hover: Option<NaiveDateTime>,
    pub select_range: bool,
    pub range_pending: bool,
    pub drill_down_available: bool,
    pub drill_up_available: bool,
    pub calendar_type: CalendarType,
    pub bounds: Bounds,
}

/// Stateful navigator driven by tile clicks, pointer movement and page controls.
#[derive(Debug, Clone)]
pub struct CalendarNavigator {
    options: NavigatorOptions,
    controlled: Controlled,
    state: InternalState,
    defaults: Defaults,
}

impl CalendarNavigator {
    /// Build a navigator, using the local clock for the "today" fallback.
    pub fn new(config: &NavigatorConfig) -> Result<Self, NavigatorError> {
        Self::new_at(config, Local::now().naive_local())
    }

    /// Build a navigator whose "today" is `now`.
    pub fn new_at(config: &NavigatorConfig, now: NaiveDateTime) -> Result<Self, NavigatorError> {
        let options = NavigatorOptions::from_config(config)?;

        let controlled = Controlled {
            active_start_date: coerce_optional(config.active_start_date.as_ref())?,
            view: config.view,
            value: config
                .value
                .as_ref()
                .map(|raw| normalizer::coerce_value(raw).map(Some))
                .transpose()?,
        };

        let default_value = config
            .default_value
            .as_ref()
            .map(normalizer::coerce_value)
            .transpose()?;
        let default_active_start_date = coerce_optional(config.default_active_start_date.as_ref())?;

        let seed_value = controlled.value.flatten().or(default_value);
        let initial_active_start_date = resolver::compute_initial_active_start_date(
            &options,
            controlled.view.or(config.default_view),
            controlled.active_start_date.or(default_active_start_date),
            seed_value.as_ref(),
            now,
        );

        let state = InternalState {
            active_start_date: None,
            value: default_value,
            view: config.default_view,
            hover: None,
        };

        log::debug!(
            "navigator ready: views {:?}, initial page {}",
            options.views(),
            initial_active_start_date
        );

        Ok(Self {
            options,
            controlled,
            state,
            defaults: Defaults {
                initial_active_start_date,
                now,
            },
        })
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.options, &self.controlled, &self.state, self.defaults)
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    pub fn active_start_date(&self) -> NaiveDateTime {
        self.resolver().active_start_date()
    }

    pub fn value(&self) -> Option<CalendarValue> {
        self.resolver().value()
    }

    pub fn view(&self) -> Granularity {
        self.resolver().view()
    }

    pub fn views(&self) -> Vec<Granularity> {
        self.options.views()
    }

    pub fn value_type(&self) -> ValueType {
        self.options.value_type()
    }

    pub fn hover(&self) -> Option<NaiveDateTime> {
        self.resolver().hover()
    }

    pub fn range_selection(&self) -> RangeSelection {
        self.resolver().range_selection()
    }

    pub fn drill_down_available(&self) -> bool {
        self.resolver().drill_down_available()
    }

    pub fn drill_up_available(&self) -> bool {
        self.resolver().drill_up_available()
    }

    /// Pin the visible page; `None` hands it back to the navigator.
    pub fn set_controlled_active_start_date(&mut self, date: Option<NaiveDateTime>) {
        self.controlled.active_start_date = date;
    }

    /// Pin the view; `None` hands it back to the navigator.
    pub fn set_controlled_view(&mut self, view: Option<Granularity>) {
        self.controlled.view = view;
    }

    /// Pin the value. `None` pins it to "nothing selected".
    pub fn set_controlled_value(&mut self, value: Option<&LooseValue>) -> Result<(), NavigatorError> {
        let value = value.map(normalizer::coerce_value).transpose()?;
        self.controlled.value = Some(value);
        Ok(())
    }

    /// Stop overriding the value; the internally tracked one becomes visible again.
    pub fn release_controlled_value(&mut self) {
        self.controlled.value = None;
    }

    /// Commit `event` and return the callbacks it raised, in firing order.
    pub fn apply(&mut self, event: NavigationEvent) -> Vec<Effect> {
        let Transition { state, effects } = transition::transition(&self.resolver(), event);
        self.state = state;
        effects
    }

    /// Commit `event`, then run its callbacks against `callbacks`.
    pub fn dispatch<C: CalendarCallbacks + ?Sized>(&mut self, event: NavigationEvent, callbacks: &mut C) {
        for effect in self.apply(event) {
            effect.deliver(callbacks);
        }
    }

    pub fn set_active_start_date(&mut self, date: NaiveDateTime) -> Vec<Effect> {
        self.apply(NavigationEvent::SetActiveStartDate(date))
    }

    pub fn drill_down(&mut self, date: NaiveDateTime) -> Vec<Effect> {
        self.apply(NavigationEvent::DrillDown(date))
    }

    pub fn drill_up(&mut self) -> Vec<Effect> {
        self.apply(NavigationEvent::DrillUp)
    }

    pub fn select(&mut self, date: NaiveDateTime) -> Vec<Effect> {
        self.apply(NavigationEvent::Select(date))
    }

    /// A tile press: drills down when a more detailed view exists, selects otherwise.
    pub fn click(&mut self, date: NaiveDateTime) -> Vec<Effect> {
        self.apply(NavigationEvent::Click(date))
    }

    pub fn next_page(&mut self) -> Vec<Effect> {
        self.apply(NavigationEvent::NextPage(PageStep::Single))
    }

    pub fn previous_page(&mut self) -> Vec<Effect> {
        self.apply(NavigationEvent::PreviousPage(PageStep::Single))
    }

    pub fn next_page2(&mut self) -> Vec<Effect> {
        self.apply(NavigationEvent::NextPage(PageStep::Double))
    }

    pub fn previous_page2(&mut self) -> Vec<Effect> {
        self.apply(NavigationEvent::PreviousPage(PageStep::Double))
    }

    pub fn can_navigate_next(&self, step: PageStep) -> bool {
        paging::next_target(self.view(), self.active_start_date(), step, self.options.bounds).is_some()
    }

    pub fn can_navigate_previous(&self, step: PageStep) -> bool {
        paging::previous_target(self.view(), self.active_start_date(), step, self.options.bounds)
            .is_some()
    }

    /// Pointer entered a tile. Only tracked while range selection is on.
    pub fn hover_over(&mut self, date: NaiveDateTime) {
        if !self.options.select_range {
            return;
        }
        if self.state.hover == Some(date) {
            return;
        }
        log::trace!("hover {}", date);
        self.state.hover = Some(date);
    }

    /// Pointer left the tile grid.
    pub fn leave(&mut self) {
        self.state.hover = None;
    }

    pub fn render_state(&self) -> RenderState {
        let resolver = self.resolver();
        let view = resolver.view();
        let active_start_date = resolver.active_start_date();

        RenderState {
            view,
            views: resolver.views(),
            active_start_date,
            secondary_active_start_date: self
                .options
                .show_double_view
                .then(|| paging::secondary_page_start(view, active_start_date)),
            value: resolver.value(),
            value_type: resolver.value_type(),
            hover: resolver.hover(),
            select_range: self.options.select_range,
            range_pending: self.options.select_range && resolver.range_selection().is_pending(),
            drill_down_available: resolver.drill_down_available(),
            drill_up_available: resolver.drill_up_available(),
            calendar_type: self.options.calendar_type,
            bounds: self.options.bounds,
        }
    }

    /// Week-number column of the current page; empty outside the month view.
    ///
    /// Double view always shows six rows so both pages line up.
    pub fn week_rows(&self) -> Vec<WeekNumberTile> {
        if self.view() != Granularity::Month {
            return Vec::new();
        }
        week_numbers::week_rows(
            self.active_start_date(),
            self.options.calendar_type,
            self.options.show_fixed_number_of_weeks || self.options.show_double_view,
            self.options.bounds,
        )
    }
}

fn coerce_optional(raw: Option<&DateInput>) -> Result<Option<NaiveDateTime>, NavigatorError> {
    raw.map(normalizer::coerce).transpose()
}
