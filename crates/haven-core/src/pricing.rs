//! # Pricing Module
//!
//! Computes what a stay costs: base total, the promotion that applies, the
//! discount it earns and the promotions a longer stay would unlock.
//!
//! ## Promotion Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Listing promotions:  3+ nights 5%   7+ nights 10%   28+ nights 25%    │
//! │                                                                         │
//! │  Stay of 9 nights                                                       │
//! │    qualifying:  3+ (5%), 7+ (10%)        → applied: 7+ (largest tier)   │
//! │    upcoming:    28+ (25%)                → "stay 19 more nights..."     │
//! │                                                                         │
//! │  Ties on min_nights: higher discount wins, then first in input order.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! `base_total` is exact (integer cents × nights). The discount is rounded
//! half-up to the cent, and `total = base_total - discount` needs no further
//! rounding.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{BookingResult, ValidationError};
use crate::money::Money;
use crate::types::{DiscountRate, Promotion};
use crate::validation::{validate_night_price, validate_nights};

// =============================================================================
// Price Breakdown
// =============================================================================

/// The monetary breakdown of one stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceBreakdown {
    pub nights: i64,

    /// `nights × night_price`, before any discount.
    pub base_total: Money,

    /// Amount taken off by the applied promotion (zero if none).
    pub discount: Money,

    /// Rate of the applied promotion (zero if none).
    pub discount_rate: DiscountRate,

    pub applied_promotion: Option<Promotion>,

    /// `base_total - discount`.
    pub total: Money,

    /// Promotions a longer stay would unlock, ascending by `min_nights`.
    pub upcoming_promotions: Vec<Promotion>,
}

impl PriceBreakdown {
    /// The closest promotion a longer stay would unlock, with the number of
    /// extra nights needed to reach it.
    ///
    /// ## Example
    /// ```rust
    /// use haven_core::money::Money;
    /// use haven_core::pricing::compute_total;
    /// use haven_core::Promotion;
    ///
    /// let promos = [Promotion::new(7, 10.0, "Weekly")];
    /// let quote = compute_total(5, Money::from_cents(10_000), &promos).unwrap();
    /// let (promo, extra) = quote.next_saving().unwrap();
    /// assert_eq!(promo.min_nights, 7);
    /// assert_eq!(extra, 2);
    /// ```
    pub fn next_saving(&self) -> Option<(&Promotion, i64)> {
        self.upcoming_promotions
            .first()
            .map(|promotion| (promotion, promotion.min_nights - self.nights))
    }

    /// Whether any promotion was applied.
    #[inline]
    pub fn is_discounted(&self) -> bool {
        self.applied_promotion.is_some()
    }
}

// =============================================================================
// Price Calculator
// =============================================================================

/// Stateless price calculator, for callers that hold a component rather than
/// calling [`compute_total`] directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceCalculator;

impl PriceCalculator {
    pub fn new() -> Self {
        PriceCalculator
    }

    pub fn compute_total(
        &self,
        nights: i64,
        night_price: Money,
        promotions: &[Promotion],
    ) -> BookingResult<PriceBreakdown> {
        compute_total(nights, night_price, promotions)
    }
}

/// Computes the price of a stay of `nights` nights at `night_price` a night.
///
/// ## Errors
/// `InvalidInput` when `nights < 1`, `night_price < 0`, or the base total
/// does not fit in an `i64` of cents.
///
/// ## Example
/// ```rust
/// use haven_core::money::Money;
/// use haven_core::pricing::compute_total;
/// use haven_core::Promotion;
///
/// let promos = [Promotion::new(3, 10.0, "x")];
/// let quote = compute_total(3, Money::from_cents(10_000), &promos).unwrap();
/// assert_eq!(quote.base_total.cents(), 30_000);
/// assert_eq!(quote.discount.cents(), 3_000);
/// assert_eq!(quote.total.cents(), 27_000);
/// ```
pub fn compute_total(
    nights: i64,
    night_price: Money,
    promotions: &[Promotion],
) -> BookingResult<PriceBreakdown> {
    validate_nights(nights)?;
    validate_night_price(night_price)?;

    let base_total = night_price
        .checked_times(nights)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "base total".to_string(),
            min: 0,
            max: i64::MAX,
        })?;

    let applied_promotion = applicable_promotion(nights, promotions).cloned();

    let (discount, discount_rate) = match &applied_promotion {
        // A rate above 100% is a host data error; never discount below zero
        Some(promotion) => (
            base_total.percentage_of(promotion.discount).min(base_total),
            promotion.discount,
        ),
        None => (Money::zero(), DiscountRate::zero()),
    };

    Ok(PriceBreakdown {
        nights,
        base_total,
        discount,
        discount_rate,
        applied_promotion,
        total: base_total - discount,
        upcoming_promotions: upcoming_promotions(nights, promotions),
    })
}

/// The promotion a stay of `nights` earns, if any.
///
/// Greatest qualifying `min_nights` wins; ties go to the larger discount, then
/// to the earlier promotion in `promotions`.
pub fn applicable_promotion(nights: i64, promotions: &[Promotion]) -> Option<&Promotion> {
    promotions
        .iter()
        .filter(|promotion| promotion.qualifies(nights))
        .fold(None, |best: Option<&Promotion>, candidate| match best {
            Some(current)
                if (current.min_nights, current.discount)
                    >= (candidate.min_nights, candidate.discount) =>
            {
                Some(current)
            }
            _ => Some(candidate),
        })
}

/// Promotions with `min_nights > nights`, ascending by `min_nights`
/// (input order kept among equals).
pub fn upcoming_promotions(nights: i64, promotions: &[Promotion]) -> Vec<Promotion> {
    let mut upcoming: Vec<Promotion> = promotions
        .iter()
        .filter(|promotion| !promotion.qualifies(nights))
        .cloned()
        .collect();
    upcoming.sort_by_key(|promotion| promotion.min_nights);
    upcoming
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BookingError, BookingErrorKind};

    fn promo(min_nights: i64, pct: f64) -> Promotion {
        Promotion::new(min_nights, pct, format!("{}+ nights", min_nights))
    }

    #[test]
    fn test_scenario_promotion_applies_at_min_nights() {
        let quote = compute_total(3, Money::from_cents(10_000), &[promo(3, 10.0)]).unwrap();
        assert_eq!(quote.base_total.cents(), 30_000);
        assert_eq!(quote.discount.cents(), 3_000);
        assert_eq!(quote.discount_rate.bps(), 1_000);
        assert_eq!(quote.total.cents(), 27_000);
        assert_eq!(quote.applied_promotion, Some(promo(3, 10.0)));
        assert!(quote.upcoming_promotions.is_empty());
    }

    #[test]
    fn test_scenario_short_stay_sees_upcoming_promotion() {
        let quote = compute_total(2, Money::from_cents(10_000), &[promo(3, 10.0)]).unwrap();
        assert_eq!(quote.discount, Money::zero());
        assert_eq!(quote.total.cents(), 20_000);
        assert_eq!(quote.applied_promotion, None);
        assert_eq!(quote.upcoming_promotions, vec![promo(3, 10.0)]);
        assert_eq!(quote.next_saving().map(|(_, extra)| extra), Some(1));
    }

    #[test]
    fn test_no_promotions_means_no_discount() {
        for nights in 1..=30 {
            for cents in [0, 1, 999, 10_000, 123_457] {
                let quote = compute_total(nights, Money::from_cents(cents), &[]).unwrap();
                assert_eq!(quote.total.cents(), nights * cents);
                assert!(!quote.is_discounted());
            }
        }
    }

    #[test]
    fn test_largest_qualifying_tier_wins() {
        let promos = [promo(28, 25.0), promo(3, 5.0), promo(7, 10.0)];
        for nights in 1..=40 {
            let quote = compute_total(nights, Money::from_cents(10_000), &promos).unwrap();
            let expected = promos
                .iter()
                .filter(|p| p.min_nights <= nights)
                .map(|p| p.min_nights)
                .max();
            assert_eq!(
                quote.applied_promotion.as_ref().map(|p| p.min_nights),
                expected,
                "nights = {}",
                nights
            );
        }
    }

    #[test]
    fn test_tier_beats_higher_discount_on_smaller_tier() {
        // Largest min_nights wins even when a smaller tier discounts more
        let promos = [promo(3, 20.0), promo(7, 10.0)];
        let quote = compute_total(8, Money::from_cents(10_000), &promos).unwrap();
        assert_eq!(quote.applied_promotion.unwrap().min_nights, 7);
        assert_eq!(quote.discount.cents(), 8_000);
    }

    #[test]
    fn test_tie_on_min_nights_takes_larger_discount() {
        let promos = [promo(7, 10.0), promo(7, 15.0)];
        let quote = compute_total(7, Money::from_cents(10_000), &promos).unwrap();
        assert_eq!(quote.discount_rate.bps(), 1_500);
    }

    #[test]
    fn test_full_tie_takes_first_in_input_order() {
        let promos = [
            Promotion::new(7, 10.0, "first"),
            Promotion::new(7, 10.0, "second"),
        ];
        let found = applicable_promotion(10, &promos).unwrap();
        assert_eq!(found.description, "first");
    }

    #[test]
    fn test_upcoming_sorted_ascending() {
        let promos = [promo(28, 25.0), promo(7, 10.0), promo(14, 15.0), promo(2, 3.0)];
        let quote = compute_total(5, Money::from_cents(5_000), &promos).unwrap();
        let upcoming: Vec<_> = quote.upcoming_promotions.iter().map(|p| p.min_nights).collect();
        assert_eq!(upcoming, [7, 14, 28]);
        assert_eq!(quote.applied_promotion.unwrap().min_nights, 2);
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // 3 × $33.35 = $100.05; 15% = $15.0075 → $15.01
        let quote = compute_total(3, Money::from_cents(3_335), &[promo(1, 15.0)]).unwrap();
        assert_eq!(quote.base_total.cents(), 10_005);
        assert_eq!(quote.discount.cents(), 1_501);
        assert_eq!(quote.total.cents(), 8_504);

        // $0.05 at 50% = $0.025 → $0.03
        let quote = compute_total(1, Money::from_cents(5), &[promo(1, 50.0)]).unwrap();
        assert_eq!(quote.discount.cents(), 3);
        assert_eq!(quote.total.cents(), 2);
    }

    #[test]
    fn test_discount_never_exceeds_base() {
        let bogus = Promotion {
            min_nights: 1,
            discount: DiscountRate::from_bps(15_000),
            description: String::new(),
        };
        let quote = compute_total(2, Money::from_cents(1_000), &[bogus]).unwrap();
        assert_eq!(quote.total, Money::zero());
    }

    #[test]
    fn test_is_idempotent() {
        let promos = [promo(3, 7.5), promo(10, 12.5)];
        let calculator = PriceCalculator::new();
        let a = calculator.compute_total(11, Money::from_cents(14_999), &promos).unwrap();
        let b = calculator.compute_total(11, Money::from_cents(14_999), &promos).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_input() {
        let err = compute_total(0, Money::from_cents(10_000), &[]).unwrap_err();
        assert_eq!(err.kind(), BookingErrorKind::InvalidInput);

        let err = compute_total(2, Money::from_cents(-1), &[]).unwrap_err();
        assert!(matches!(err, BookingError::InvalidInput(ref e) if e.field() == "night price"));

        let err = compute_total(3, Money::from_cents(i64::MAX), &[]).unwrap_err();
        assert_eq!(err.kind(), BookingErrorKind::InvalidInput);
    }

    #[test]
    fn test_free_stay_with_promotion() {
        let quote = compute_total(5, Money::zero(), &[promo(3, 10.0)]).unwrap();
        assert_eq!(quote.total, Money::zero());
        assert!(quote.is_discounted());
    }

    #[test]
    fn test_json_shape() {
        let quote = compute_total(3, Money::from_cents(10_000), &[promo(3, 10.0)]).unwrap();
        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["baseTotal"], 30_000);
        assert_eq!(value["total"], 27_000);
        assert_eq!(value["appliedPromotion"]["minNights"], 3);
        assert_eq!(value["upcomingPromotions"], serde_json::json!([]));
    }
}
