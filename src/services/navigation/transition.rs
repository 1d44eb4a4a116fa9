// Navigation transitions
// Pure (state, event) -> (next state, effects) step of the navigator

use chrono::NaiveDateTime;

use super::notifier::{self, Effect, ViewArgs};
use super::paging::{self, PageStep};
use super::resolver::{self, Resolver};
use super::state::{InternalState, StatePatch};
use crate::models::granularity;
use crate::models::value::{CalendarValue, RangeSelection};
use crate::services::normalizer;
use crate::utils::date;

/// Inputs that move the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Move the visible page without changing the view
    SetActiveStartDate(NaiveDateTime),
    /// Open the tile at the given date in the next more detailed view
    DrillDown(NaiveDateTime),
    /// Return to the next less detailed view
    DrillUp,
    /// Select the tile at the given date
    Select(NaiveDateTime),
    /// A tile press: drills down when possible, selects otherwise
    Click(NaiveDateTime),
    NextPage(PageStep),
    PreviousPage(PageStep),
}

/// Outcome of one event: the state to commit and the callbacks to run after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: InternalState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &InternalState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }
}

/// Compute the result of `event` against the state `current` resolves over.
///
/// Events whose preconditions fail (drilling past either end of the view
/// list, paging outside the bounds) leave the state untouched and fire nothing.
pub fn transition(current: &Resolver<'_>, event: NavigationEvent) -> Transition {
    match event {
        NavigationEvent::SetActiveStartDate(date) => {
            commit(current, StatePatch::active_start_date(date), Vec::new(), None)
        }
        NavigationEvent::DrillDown(date) => drill_down(current, date),
        NavigationEvent::DrillUp => drill_up(current),
        NavigationEvent::Select(date) => select(current, date),
        NavigationEvent::Click(date) => {
            if current.drill_down_available() {
                drill_down(current, date)
            } else {
                select(current, date)
            }
        }
        NavigationEvent::NextPage(step) => {
            let target = paging::next_target(
                current.view(),
                current.active_start_date(),
                step,
                current.options().bounds,
            );
            move_page(current, target, "next")
        }
        NavigationEvent::PreviousPage(step) => {
            let target = paging::previous_target(
                current.view(),
                current.active_start_date(),
                step,
                current.options().bounds,
            );
            move_page(current, target, "previous")
        }
    }
}

fn move_page(current: &Resolver<'_>, target: Option<NaiveDateTime>, direction: &str) -> Transition {
    match target {
        Some(date) => commit(current, StatePatch::active_start_date(date), Vec::new(), None),
        None => {
            log::debug!("{} page unavailable from {}", direction, current.active_start_date());
            Transition::unchanged(current.state())
        }
    }
}

fn drill_down(current: &Resolver<'_>, date: NaiveDateTime) -> Transition {
    let view = current.view();
    let Some(next_view) = granularity::more_detailed(view, &current.views()) else {
        log::debug!("drill down ignored: {} is the most detailed view", view);
        return Transition::unchanged(current.state());
    };

    let patch = StatePatch {
        active_start_date: Some(date),
        view: Some(next_view),
        value: None,
    };
    commit(
        current,
        patch,
        vec![notifier::tile_click(view, date)],
        Some(Effect::DrilledDown),
    )
}

fn drill_up(current: &Resolver<'_>) -> Transition {
    let view = current.view();
    let Some(next_view) = granularity::less_detailed(view, &current.views()) else {
        log::debug!("drill up ignored: {} is the least detailed view", view);
        return Transition::unchanged(current.state());
    };

    let patch = StatePatch {
        active_start_date: Some(date::begin_of(next_view.period(), current.active_start_date())),
        view: Some(next_view),
        value: None,
    };
    commit(current, patch, Vec::new(), Some(Effect::DrilledUp))
}

fn select(current: &Resolver<'_>, clicked: NaiveDateTime) -> Transition {
    let options = current.options();
    let effects = vec![notifier::tile_click(current.view(), clicked)];

    let next_value = if options.select_range {
        let period = options.value_type().period();
        match current.range_selection() {
            RangeSelection::OnePending(previous) => {
                let (start, end) = date::value_range(period, previous, clicked);
                CalendarValue::Range(options.bounds.clamp(start), options.bounds.clamp(end))
            }
            RangeSelection::Empty | RangeSelection::Complete(_, _) => {
                CalendarValue::Single(options.bounds.clamp(date::begin_of(period, clicked)))
            }
        }
    } else {
        normalizer::present_date(clicked, options.bounds, options.max_detail, options.return_value)
    };

    let active_start_date = resolver::compute_active_start_date(
        options,
        current.controlled().view,
        Some(&next_value),
        current.defaults().now,
    );
    let patch = StatePatch {
        active_start_date: Some(active_start_date),
        view: None,
        value: Some(next_value),
    };
    commit(current, patch, effects, None)
}

/// Apply `patch`, then append change callbacks and the optional completion callback.
fn commit(
    current: &Resolver<'_>,
    patch: StatePatch,
    mut effects: Vec<Effect>,
    completion: Option<fn(ViewArgs) -> Effect>,
) -> Transition {
    let before = current.snapshot();
    let state = patch.apply_to(current.state());

    let after = current.with_state(&state);
    let args = ViewArgs {
        active_start_date: patch
            .active_start_date
            .unwrap_or_else(|| after.active_start_date()),
        view: patch.view.unwrap_or_else(|| after.view()),
    };

    let options = current.options();
    effects.extend(notifier::changes(
        &before,
        &patch,
        args,
        options.select_range,
        options.allow_partial_range,
    ));
    if let Some(completion) = completion {
        effects.push(completion(args));
    }

    log::debug!(
        "committed {:?}: view {} -> {}, {} callback(s)",
        patch,
        before.view,
        args.view,
        effects.len()
    );

    Transition { state, effects }
}
