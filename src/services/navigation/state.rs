// Navigator state
// Engine-owned fields, caller overrides and the patches transitions commit

use chrono::NaiveDateTime;

use crate::models::granularity::Granularity;
use crate::models::value::CalendarValue;

/// Fields the navigator owns and mutates through transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternalState {
    pub active_start_date: Option<NaiveDateTime>,
    pub value: Option<CalendarValue>,
    pub view: Option<Granularity>,
    /// Only written by pointer movement, never by a transition
    pub hover: Option<NaiveDateTime>,
}

/// Overrides supplied by the host. A set field wins over internal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controlled {
    pub active_start_date: Option<NaiveDateTime>,
    /// `Some(None)` pins the value to "nothing selected"
    pub value: Option<Option<CalendarValue>>,
    pub view: Option<Granularity>,
}

/// Fields a transition writes; `None` leaves a field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub active_start_date: Option<NaiveDateTime>,
    pub view: Option<Granularity>,
    pub value: Option<CalendarValue>,
}

impl StatePatch {
    pub fn active_start_date(date: NaiveDateTime) -> Self {
        Self {
            active_start_date: Some(date),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active_start_date.is_none() && self.view.is_none() && self.value.is_none()
    }

    /// The state after this patch is committed on top of `state`.
    pub fn apply_to(&self, state: &InternalState) -> InternalState {
        let mut next = state.clone();
        if let Some(date) = self.active_start_date {
            next.active_start_date = Some(date);
        }
        if let Some(view) = self.view {
            next.view = Some(view);
        }
        if let Some(value) = self.value {
            next.value = Some(value);
        }
        next
    }
}
