//! # Stay Validation
//!
//! Decides whether a requested stay can be booked on a listing.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate(requested, existing, guest_counts, guest_limits)              │
//! │                                                                         │
//! │  1. Dates         start ≥ today, start < end, (optional) max length     │
//! │       │ fail → InvalidDateRange                                         │
//! │       ▼                                                                 │
//! │  2. Availability  no overlap with any existing reservation              │
//! │       │ fail → DatesUnavailable (all conflicts)                         │
//! │       ▼                                                                 │
//! │  3. Guests        adults, children, infant, pets within {min, max}      │
//! │       │ fail → GuestLimitExceeded (first category that fails)           │
//! │       ▼                                                                 │
//! │     Ok(())                                                              │
//! │                                                                         │
//! │  First failure wins: the booking form shows one message at a time.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The validator only rules out *known* conflicts. Two guests racing for the
//! same dates are resolved by the persistence layer's overlap constraint.

use chrono::{NaiveDate, Utc};

use crate::calendar::{DateRange, ReservedInterval};
use crate::error::{BookingError, BookingResult, DateRangeIssue, LimitBound};
use crate::types::{GuestCategory, GuestCounts, GuestLimits};

/// Outcome of validating a stay: `Ok(())` is bookable.
pub type ValidationResult = BookingResult<()>;

/// Validates stay requests relative to a fixed "today".
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use haven_core::calendar::{DateRange, ReservedInterval};
/// use haven_core::stay::StayValidator;
/// use haven_core::{BookingErrorKind, GuestBound, GuestCounts, GuestLimits};
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
/// let validator = StayValidator::new(d(1));
///
/// let limits = GuestLimits { adults: GuestBound::new(1, 2), ..Default::default() };
/// let guests = GuestCounts { adults: 2, ..Default::default() };
/// let booked = [ReservedInterval::new(d(12), d(14))];
///
/// assert!(validator.validate(&DateRange::new(d(14), d(16)), &booked, &guests, &limits).is_ok());
///
/// let err = validator
///     .validate(&DateRange::new(d(10), d(15)), &booked, &guests, &limits)
///     .unwrap_err();
/// assert_eq!(err.kind(), BookingErrorKind::DatesUnavailable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayValidator {
    today: NaiveDate,
    max_nights: Option<i64>,
}

impl StayValidator {
    /// Creates a validator for the caller's current date.
    pub fn new(today: NaiveDate) -> Self {
        StayValidator {
            today,
            max_nights: None,
        }
    }

    /// Creates a validator for the current UTC date.
    pub fn for_today() -> Self {
        StayValidator::new(Utc::now().date_naive())
    }

    /// Caps the stay length. Zero or negative disables the cap.
    pub fn with_max_nights(mut self, max_nights: i64) -> Self {
        self.max_nights = (max_nights > 0).then_some(max_nights);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn max_nights(&self) -> Option<i64> {
        self.max_nights
    }

    /// Runs all checks in order and reports the first failure.
    pub fn validate(
        &self,
        requested: &DateRange,
        existing: &[ReservedInterval],
        guest_counts: &GuestCounts,
        guest_limits: &GuestLimits,
    ) -> ValidationResult {
        self.check_dates(requested)?;
        check_availability(requested, existing)?;
        check_guests(guest_counts, guest_limits)
    }

    /// Date sanity: not in the past, non-empty, not longer than the cap.
    pub fn check_dates(&self, requested: &DateRange) -> ValidationResult {
        let issue = if requested.start_date < self.today {
            Some(DateRangeIssue::StartInPast)
        } else if !requested.is_ordered() {
            Some(DateRangeIssue::EndNotAfterStart)
        } else {
            self.max_nights
                .filter(|&max| requested.nights() > max)
                .map(|max_nights| DateRangeIssue::TooLong { max_nights })
        };

        match issue {
            Some(issue) => Err(BookingError::InvalidDateRange { issue }),
            None => Ok(()),
        }
    }
}

/// Availability: the requested range must not share a night with any
/// existing reservation. Reports every conflict, in input order.
pub fn check_availability(requested: &DateRange, existing: &[ReservedInterval]) -> ValidationResult {
    let conflicts: Vec<ReservedInterval> = requested
        .conflicts_with(existing)
        .into_iter()
        .copied()
        .collect();

    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(BookingError::DatesUnavailable { conflicts })
    }
}

/// Guest limits: each category's count must lie within its bound. Reports
/// the first violation in the order adults, children, infant, pets.
pub fn check_guests(guest_counts: &GuestCounts, guest_limits: &GuestLimits) -> ValidationResult {
    for category in GuestCategory::ALL {
        let requested = guest_counts.get(category);
        let bound = guest_limits.get(category);

        let violated = if requested < bound.min {
            Some((LimitBound::Min, bound.min))
        } else if requested > bound.max {
            Some((LimitBound::Max, bound.max))
        } else {
            None
        };

        if let Some((bound, limit)) = violated {
            return Err(BookingError::GuestLimitExceeded {
                category,
                bound,
                limit,
                requested,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
