// Calendar Navigator Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod utils;

pub use models::granularity::{Granularity, ValueType};
pub use models::settings::{CalendarType, NavigatorConfig};
pub use models::value::{CalendarValue, DateInput, LooseValue, RangeSelection, ReturnValue};
pub use services::error::NavigatorError;
pub use services::navigation::{
    CalendarCallbacks, CalendarNavigator, ChangedValue, Effect, NavigationEvent, PageStep,
    RenderState, ViewArgs,
};
