//! # haven-core: Pure Booking Logic for Haven Stays
//!
//! This crate prices stays and decides whether they can be booked. It
//! contains pure functions only, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Haven Stays Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web App (booking form, hosting)              │   │
//! │  │    Search ──► Listing ──► Pick dates & guests ──► Checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                haven-quote (QuoteDesk)                          │   │
//! │  │    listing snapshot ──► validate ──► price ──► Quote            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ haven-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │   stay    │  │ calendar  │  │   money   │  │   │
//! │  │   │ Promotion │  │ Validator │  │ DateRange │  │   Money   │  │   │
//! │  │   │ Breakdown │  │  guests   │  │  overlap  │  │ Discount  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pricing`] - Price calculator and promotion tiers
//! - [`stay`] - Stay validator (dates, availability, guests)
//! - [`calendar`] - Date ranges, reservations, night counting
//! - [`types`] - Promotions, guest categories and limits
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Booking and validation errors
//! - [`validation`] - Field-level validators
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use haven_core::{compute_total, DateRange, GuestBound, GuestCounts, GuestLimits};
//! use haven_core::{Money, Promotion, StayValidator};
//!
//! let d = |day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
//! let stay = DateRange::new(d(4), d(11));
//! let limits = GuestLimits { adults: GuestBound::new(1, 4), ..Default::default() };
//! let guests = GuestCounts { adults: 2, ..Default::default() };
//!
//! StayValidator::new(d(1)).validate(&stay, &[], &guests, &limits).unwrap();
//!
//! let promos = [Promotion::new(7, 10.0, "Weekly")];
//! let quote = compute_total(stay.nights(), Money::from_cents(12_000), &promos).unwrap();
//! assert_eq!(quote.total.cents(), 75_600); // 7 × $120 - 10%
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod error;
pub mod money;
pub mod pricing;
pub mod stay;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calendar::{nights_between, DateRange, ReservedInterval};
pub use error::{
    BookingError, BookingErrorKind, BookingResult, DateRangeIssue, LimitBound, Rejection,
    ValidationError,
};
pub use money::Money;
pub use pricing::{compute_total, PriceBreakdown, PriceCalculator};
pub use stay::{StayValidator, ValidationResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest discount a promotion may carry, in basis points (100%).
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

/// Longest promotion description the hosting form accepts.
pub const MAX_DESCRIPTION_LEN: usize = 200;
