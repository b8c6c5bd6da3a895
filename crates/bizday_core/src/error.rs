//! Calendar errors.

use thiserror::Error;

/// Errors that can occur when building calendar values or querying
/// business days.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Invalid date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Missing holiday source
    #[error("Invalid service: no holiday source supplied")]
    InvalidService,

    /// Bounded lookahead found no business day
    #[error("No business day found within {0} days")]
    LookaheadExhausted(u32),
}
