//! Error types for doubles-schedule.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the checked scheduling entry point.
///
/// Scheduling itself never fails; only request validation does.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The request failed one or more validation checks.
    #[error("invalid schedule request: {}", join_messages(.0))]
    InvalidRequest(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for doubles-schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
