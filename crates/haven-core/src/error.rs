//! # Error Types
//!
//! Domain-specific error types for haven-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  haven-core errors (this file)                                         │
//! │  ├── ValidationError  - Field-level input problems                     │
//! │  └── BookingError     - The four booking outcomes a user can fix:      │
//! │       ├── InvalidInput       (wraps ValidationError)                   │
//! │       ├── InvalidDateRange                                             │
//! │       ├── DatesUnavailable                                             │
//! │       └── GuestLimitExceeded                                           │
//! │                                                                         │
//! │  haven-quote errors (separate crate)                                   │
//! │  └── QuoteError       - Config, listing lookup, file formats           │
//! │                                                                         │
//! │  Flow: ValidationError → BookingError → QuoteError → UI message        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is an expected, user-correctable condition. Nothing here is
//! fatal and nothing is retried.

use serde::Serialize;
use serde_json::json;
use std::fmt;
use thiserror::Error;
use ts_rs::TS;

use crate::calendar::ReservedInterval;
use crate::types::GuestCategory;

// =============================================================================
// Booking Error
// =============================================================================

/// Why a quote or a stay request was refused.
///
/// ## User Workflow
/// ```text
/// Booking form submit
///      │
///      ▼
/// StayValidator::validate ──► Err(DatesUnavailable { conflicts })
///      │                             │
///      │                             ▼
///      │                    UI: "Those dates are already booked"
///      ▼                         (detail lists the blocked ranges)
/// compute_total ──► PriceBreakdown
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// Malformed numeric arguments to the price calculation.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The requested range is not a bookable stay.
    #[error("Invalid date range: {issue}")]
    InvalidDateRange { issue: DateRangeIssue },

    /// The requested range shares nights with existing reservations.
    #[error("Dates unavailable: {} conflicting reservation(s)", .conflicts.len())]
    DatesUnavailable { conflicts: Vec<ReservedInterval> },

    /// A guest count falls outside the host's bounds.
    #[error("Too {} {category}: {requested} requested, {bound} is {limit}", .bound.adjective())]
    GuestLimitExceeded {
        category: GuestCategory,
        bound: LimitBound,
        limit: u32,
        requested: u32,
    },
}

impl BookingError {
    /// The closed taxonomy this error belongs to.
    pub fn kind(&self) -> BookingErrorKind {
        match self {
            BookingError::InvalidInput(_) => BookingErrorKind::InvalidInput,
            BookingError::InvalidDateRange { .. } => BookingErrorKind::InvalidDateRange,
            BookingError::DatesUnavailable { .. } => BookingErrorKind::DatesUnavailable,
            BookingError::GuestLimitExceeded { .. } => BookingErrorKind::GuestLimitExceeded,
        }
    }

    /// Structured context for the UI, beyond the human-readable message.
    pub fn detail(&self) -> serde_json::Value {
        match self {
            BookingError::InvalidInput(err) => json!({ "field": err.field() }),
            BookingError::InvalidDateRange { issue } => json!({ "reason": issue.to_string() }),
            BookingError::DatesUnavailable { conflicts } => json!({ "conflicts": conflicts }),
            BookingError::GuestLimitExceeded {
                category,
                bound,
                limit,
                requested,
            } => json!({
                "category": category,
                "bound": bound,
                "limit": limit,
                "requested": requested,
            }),
        }
    }

    /// Flattens the error into the `{ kind, message, detail }` shape the
    /// booking form renders.
    pub fn to_rejection(&self) -> Rejection {
        Rejection {
            kind: self.kind(),
            message: self.to_string(),
            detail: self.detail(),
        }
    }
}

/// The four booking error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookingErrorKind {
    InvalidInput,
    InvalidDateRange,
    DatesUnavailable,
    GuestLimitExceeded,
}

/// A refused request, ready to serialize for the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    pub kind: BookingErrorKind,
    pub message: String,
    pub detail: serde_json::Value,
}

/// What exactly is wrong with a requested date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRangeIssue {
    StartInPast,
    EndNotAfterStart,
    TooLong { max_nights: i64 },
}

impl fmt::Display for DateRangeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeIssue::StartInPast => f.write_str("start date in the past"),
            DateRangeIssue::EndNotAfterStart => f.write_str("end date not after start date"),
            DateRangeIssue::TooLong { max_nights } => {
                write!(f, "stay exceeds maximum length of {} nights", max_nights)
            }
        }
    }
}

/// Which side of a guest bound was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LimitBound {
    Min,
    Max,
}

impl LimitBound {
    fn adjective(&self) -> &'static str {
        match self {
            LimitBound::Min => "few",
            LimitBound::Max => "many",
        }
    }
}

impl fmt::Display for LimitBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitBound::Min => f.write_str("minimum"),
            LimitBound::Max => f.write_str("maximum"),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a single field doesn't meet requirements. Used both for
/// calculator arguments and for host-entered listing settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., two promotions with the same minimum stay).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::Duplicate { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BookingError.
pub type BookingResult<T> = Result<T, BookingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_error_messages() {
        let err = BookingError::GuestLimitExceeded {
            category: GuestCategory::Adults,
            bound: LimitBound::Max,
            limit: 2,
            requested: 5,
        };
        assert_eq!(err.to_string(), "Too many adults: 5 requested, maximum is 2");

        let err = BookingError::InvalidDateRange {
            issue: DateRangeIssue::StartInPast,
        };
        assert_eq!(err.to_string(), "Invalid date range: start date in the past");

        let err = BookingError::InvalidDateRange {
            issue: DateRangeIssue::EndNotAfterStart,
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: end date not after start date"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "description".to_string(),
        };
        assert_eq!(err.to_string(), "description is required");
        assert_eq!(err.field(), "description");
    }

    #[test]
    fn test_validation_converts_to_invalid_input() {
        let validation_err = ValidationError::MustBePositive {
            field: "nights".to_string(),
        };
        let booking_err: BookingError = validation_err.into();
        assert_eq!(booking_err.kind(), BookingErrorKind::InvalidInput);
        assert_eq!(booking_err.detail(), json!({ "field": "nights" }));
    }

    #[test]
    fn test_dates_unavailable_detail_lists_conflicts() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
        let err = BookingError::DatesUnavailable {
            conflicts: vec![ReservedInterval::new(d(12), d(14))],
        };
        assert_eq!(
            err.detail(),
            json!({ "conflicts": [{ "startDate": "2024-02-12", "endDate": "2024-02-14" }] })
        );
    }

    #[test]
    fn test_rejection_shape() {
        let err = BookingError::GuestLimitExceeded {
            category: GuestCategory::Pets,
            bound: LimitBound::Max,
            limit: 0,
            requested: 1,
        };
        let value = serde_json::to_value(err.to_rejection()).unwrap();
        assert_eq!(value["kind"], "guest_limit_exceeded");
        assert_eq!(value["detail"]["category"], "pets");
        assert_eq!(value["detail"]["bound"], "max");
    }
}
