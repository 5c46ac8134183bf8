//! Input validation for scheduling requests.
//!
//! The scheduler assumes a well-formed request; these checks are what a
//! front-end runs before calling it. Detects:
//! - Fewer than four players
//! - No courts
//! - More seats than players (`4 * courts > players`)

use thiserror::Error;

use crate::scheduler::{ScheduleRequest, PLAYERS_PER_COURT};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than four players registered.
    TooFewPlayers,
    /// No courts available.
    NoCourts,
    /// The courts need more players than are registered.
    InsufficientCapacity,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduling request.
///
/// Checks:
/// 1. At least four players
/// 2. At least one court
/// 3. Every court can be filled (`4 * courts <= players`)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
///
/// # Example
///
/// ```
/// use doubles_schedule::scheduler::ScheduleRequest;
/// use doubles_schedule::validation::{validate_request, ValidationErrorKind};
///
/// assert!(validate_request(&ScheduleRequest::new(17, 8, 4)).is_ok());
///
/// let errors = validate_request(&ScheduleRequest::new(7, 8, 2)).unwrap_err();
/// assert_eq!(errors[0].kind, ValidationErrorKind::InsufficientCapacity);
/// ```
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.num_players < PLAYERS_PER_COURT {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewPlayers,
            format!(
                "At least {PLAYERS_PER_COURT} players are required, got {}",
                request.num_players
            ),
        ));
    }

    if request.num_courts < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoCourts,
            "At least 1 court is required",
        ));
    } else if request.seats_per_round() > request.num_players {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientCapacity,
            format!(
                "{} courts can't be filled by {} players (max players per round is {})",
                request.num_courts,
                request.num_players,
                request.seats_per_round()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
