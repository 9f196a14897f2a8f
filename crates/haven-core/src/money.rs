//! # Money Module
//!
//! Provides the `Money` type for handling nightly rates and stay totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In the booking form (JavaScript numbers):                              │
//! │    3 nights × $33.30 = 99.89999999999999  ❌ WRONG!                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3 × 3330 cents = 9990 cents, exactly                                 │
//! │    Rounding happens in ONE place: when a discount is taken off          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use haven_core::money::Money;
//! use haven_core::types::DiscountRate;
//!
//! let night = Money::from_cents(12_500); // $125.00
//! let stay = night.checked_times(4).unwrap(); // $500.00
//! let off = stay.percentage_of(DiscountRate::from_bps(1_000));
//! assert_eq!(off.cents(), 5_000); // 10% = $50.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values exist only so callers can detect and
///   reject them (a negative nightly rate is invalid input, not a refund)
/// - **Transparent serde**: travels as a plain integer in JSON
///
/// ## Where Money is Used
/// ```text
/// Listing.night_price ──► × nights ──► base_total
///                                         │
///                         promotion ──────┼──► discount (rounded here)
///                                         ▼
///                                       total ──► shown on checkout
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use haven_core::money::Money;
    ///
    /// let rate = Money::from_cents(9_950); // $99.50
    /// assert_eq!(rate.cents(), 9_950);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a nightly rate by a number of nights.
    ///
    /// Returns `None` on overflow so the calculator can report bad input
    /// instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use haven_core::money::Money;
    ///
    /// let night = Money::from_cents(8_999);
    /// assert_eq!(night.checked_times(3), Some(Money::from_cents(26_997)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_times(2), None);
    /// ```
    #[inline]
    pub const fn checked_times(&self, nights: i64) -> Option<Money> {
        match self.0.checked_mul(nights) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns `rate` percent of this amount, rounded half-up to the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 is half of the
    /// basis-point denominator, so x.5 cents rounds up. Amounts are
    /// non-negative wherever the engine calls this.
    ///
    /// ## Example
    /// ```rust
    /// use haven_core::money::Money;
    /// use haven_core::types::DiscountRate;
    ///
    /// // $33.35 × 15% = $5.0025 → $5.00
    /// let amount = Money::from_cents(3_335);
    /// assert_eq!(amount.percentage_of(DiscountRate::from_bps(1_500)).cents(), 500);
    ///
    /// // $0.05 × 50% = $0.025 → $0.03 (half-up)
    /// let amount = Money::from_cents(5);
    /// assert_eq!(amount.percentage_of(DiscountRate::from_bps(5_000)).cents(), 3);
    /// ```
    pub fn percentage_of(&self, rate: DiscountRate) -> Money {
        // i128 keeps cents × bps from overflowing on large stays
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Formats the amount with an ISO currency code, e.g. `USD 270.00`.
    pub fn display_in(&self, currency: &str) -> String {
        format!("{} {}", currency, self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering (`270.00`, `-5.50`).
///
/// The UI owns localization; this is for logs and the CLI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
