//! # Calendar Module
//!
//! Stay dates, existing reservations and the half-open overlap rule.
//!
//! ## Half-Open Intervals
//! ```text
//!   day:     10   11   12   13   14   15
//!   A:       [==================)            check-in 10, check-out 14
//!   B:                           [=====)     check-in 14, check-out 15
//!
//!   A.start < B.end  ✓   B.start < A.end  ✗   → no overlap
//!   The guest leaving on the 14th and the guest arriving on the 14th
//!   never share a night.
//! ```
//!
//! All dates are UTC calendar dates. Callers normalize timestamps with
//! [`DateRange::from_instants`] before validating; display time zones are a
//! UI concern.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Seconds in one night of stay.
const SECONDS_PER_DAY: i64 = 86_400;

// =============================================================================
// Date Range
// =============================================================================

/// A requested stay: check-in on `start_date`, check-out on `end_date`.
///
/// Not validated on construction; [`crate::stay::StayValidator`] reports a
/// reversed or empty range as `InvalidDateRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DateRange {
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
}

impl DateRange {
    #[inline]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        DateRange { start_date, end_date }
    }

    /// Builds a range from UTC timestamps, dropping the time of day.
    pub fn from_instants(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        DateRange::new(start.date_naive(), end.date_naive())
    }

    /// Number of nights billed for this range (at least 1).
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use haven_core::calendar::DateRange;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
    /// assert_eq!(DateRange::new(d(10), d(15)).nights(), 5);
    /// assert_eq!(DateRange::new(d(10), d(10)).nights(), 1);
    /// ```
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(1)
    }

    /// Whether check-in is strictly before check-out.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.start_date < self.end_date
    }

    /// Half-open overlap test: `a.start < b.end && b.start < a.end`.
    #[inline]
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start_date < other.end_date && other.start_date < self.end_date
    }

    /// Every reservation that shares at least one night with this range,
    /// in input order.
    pub fn conflicts_with<'a>(&self, existing: &'a [ReservedInterval]) -> Vec<&'a ReservedInterval> {
        existing
            .iter()
            .filter(|reserved| reserved.overlaps(self))
            .collect()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_date, self.end_date)
    }
}

// =============================================================================
// Reserved Interval
// =============================================================================

/// An already-booked, non-cancelled stay on the listing.
///
/// Reservations for one listing never overlap each other; the persistence
/// layer enforces that at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReservedInterval {
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
}

impl ReservedInterval {
    #[inline]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        ReservedInterval { start_date, end_date }
    }

    #[inline]
    pub const fn as_range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    #[inline]
    pub fn overlaps(&self, range: &DateRange) -> bool {
        self.as_range().overlaps(range)
    }
}

impl From<DateRange> for ReservedInterval {
    fn from(range: DateRange) -> Self {
        ReservedInterval::new(range.start_date, range.end_date)
    }
}

impl fmt::Display for ReservedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_range().fmt(f)
    }
}

// =============================================================================
// Night Counting
// =============================================================================

/// Nights between two UTC instants: `ceil((end - start) / 1 day)`, at least 1.
///
/// Partial days bill as a full night. Use this when the caller still holds
/// timestamps rather than calendar dates.
pub fn nights_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = (end - start).num_seconds();
    let nights = seconds / SECONDS_PER_DAY + i64::from(seconds % SECONDS_PER_DAY > 0);
    nights.max(1)
}

// =============================================================================
// Unit Tests
// =============================================================================
