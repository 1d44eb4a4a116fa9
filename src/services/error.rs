// Error types
// Failures surfaced by the navigator library

use thiserror::Error;

/// Errors raised while building or feeding a [`CalendarNavigator`](crate::services::navigation::CalendarNavigator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    /// A value could not be turned into a calendar instant
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Options that cannot work together, or an unknown option value
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A view name outside the known granularities
    #[error("Invalid view: {0}")]
    InvalidView(String),
}
