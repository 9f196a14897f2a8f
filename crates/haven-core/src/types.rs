//! # Domain Types
//!
//! Core domain types shared by the price calculator and the stay validator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Promotion     │   │  GuestLimits    │   │  GuestCounts    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  min_nights     │   │  adults  {min,  │   │  adults         │       │
//! │  │  discount (bps) │   │  children  max} │   │  children       │       │
//! │  │  description    │   │  infant         │   │  infant         │       │
//! │  └─────────────────┘   │  pets           │   │  pets           │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  DiscountRate   │   │ GuestCategory   │                             │
//! │  │  bps (u32)      │   │ Adults Children │                             │
//! │  │  1000 = 10%     │   │ Infant Pets     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Calendar types (`DateRange`, `ReservedInterval`) live in [`crate::calendar`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1250 bps = 12.5% off, exact in integer math
///
/// A promotion's rate must lie in (0, 10000], see
/// [`crate::validation::validate_discount_rate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage as entered by the host.
    ///
    /// Negative or NaN input clamps to zero so the validator can reject it.
    pub fn from_percentage(pct: f64) -> Self {
        let bps = (pct * 100.0).round();
        if bps.is_nan() || bps <= 0.0 {
            DiscountRate(0)
        } else if bps >= u32::MAX as f64 {
            DiscountRate(u32::MAX)
        } else {
            DiscountRate(bps as u32)
        }
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}%", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

// =============================================================================
// Promotion
// =============================================================================

/// A discount tier keyed by minimum stay length.
///
/// Created and edited by the listing owner; immutable once a quote has been
/// produced from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Promotion {
    /// Minimum stay (nights) to qualify, inclusive.
    pub min_nights: i64,

    /// Discount taken off the base total, in basis points.
    #[serde(rename = "discountBps")]
    pub discount: DiscountRate,

    /// Display text, opaque to the engine.
    #[serde(default)]
    pub description: String,
}

impl Promotion {
    /// Creates a promotion from a percentage such as `10.0` or `12.5`.
    pub fn new(min_nights: i64, discount_percentage: f64, description: impl Into<String>) -> Self {
        Promotion {
            min_nights,
            discount: DiscountRate::from_percentage(discount_percentage),
            description: description.into(),
        }
    }

    /// Whether a stay of `nights` qualifies (inclusive bound).
    #[inline]
    pub fn qualifies(&self, nights: i64) -> bool {
        self.min_nights <= nights
    }
}

// =============================================================================
// Guest Category
// =============================================================================

/// A guest category with its own occupancy bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum GuestCategory {
    Adults,
    Children,
    Infant,
    Pets,
}

impl GuestCategory {
    /// All categories in the order limits are checked.
    pub const ALL: [GuestCategory; 4] = [
        GuestCategory::Adults,
        GuestCategory::Children,
        GuestCategory::Infant,
        GuestCategory::Pets,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            GuestCategory::Adults => "adults",
            GuestCategory::Children => "children",
            GuestCategory::Infant => "infant",
            GuestCategory::Pets => "pets",
        }
    }
}

impl fmt::Display for GuestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuestCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adults" | "adult" => Ok(GuestCategory::Adults),
            "children" | "child" => Ok(GuestCategory::Children),
            "infant" | "infants" => Ok(GuestCategory::Infant),
            "pets" | "pet" => Ok(GuestCategory::Pets),
            _ => Err(ValidationError::NotAllowed {
                field: "guest category".to_string(),
                allowed: GuestCategory::ALL.iter().map(|c| c.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Guest Limits
// =============================================================================

/// Inclusive `{min, max}` occupancy bound for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuestBound {
    pub min: u32,
    pub max: u32,
}

impl GuestBound {
    #[inline]
    pub const fn new(min: u32, max: u32) -> Self {
        GuestBound { min, max }
    }

    #[inline]
    pub const fn contains(&self, count: u32) -> bool {
        self.min <= count && count <= self.max
    }
}

/// Per-category occupancy bounds, configured by the host.
///
/// A category the host never configured defaults to `{0, 0}`: not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct GuestLimits {
    pub adults: GuestBound,
    pub children: GuestBound,
    pub infant: GuestBound,
    pub pets: GuestBound,
}

impl GuestLimits {
    pub fn get(&self, category: GuestCategory) -> GuestBound {
        match category {
            GuestCategory::Adults => self.adults,
            GuestCategory::Children => self.children,
            GuestCategory::Infant => self.infant,
            GuestCategory::Pets => self.pets,
        }
    }
}

// =============================================================================
// Guest Counts
// =============================================================================

/// Requested guests per category for one booking attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct GuestCounts {
    pub adults: u32,
    pub children: u32,
    pub infant: u32,
    pub pets: u32,
}

impl GuestCounts {
    pub fn get(&self, category: GuestCategory) -> u32 {
        match category {
            GuestCategory::Adults => self.adults,
            GuestCategory::Children => self.children,
            GuestCategory::Infant => self.infant,
            GuestCategory::Pets => self.pets,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_from_percentage() {
        assert_eq!(DiscountRate::from_percentage(10.0).bps(), 1000);
        assert_eq!(DiscountRate::from_percentage(12.5).bps(), 1250);
        assert_eq!(DiscountRate::from_percentage(-3.0).bps(), 0);
        assert_eq!(DiscountRate::from_percentage(f64::NAN).bps(), 0);
    }

    #[test]
    fn test_discount_rate_display() {
        assert_eq!(DiscountRate::from_bps(1000).to_string(), "10%");
        assert_eq!(DiscountRate::from_bps(1250).to_string(), "12.5%");
        assert_eq!(DiscountRate::from_bps(825).to_string(), "8.25%");
    }

    #[test]
    fn test_promotion_qualifies_inclusive() {
        let promo = Promotion::new(7, 15.0, "Weekly");
        assert!(!promo.qualifies(6));
        assert!(promo.qualifies(7));
        assert!(promo.qualifies(30));
    }

    #[test]
    fn test_promotion_json_shape() {
        let promo: Promotion =
            serde_json::from_str(r#"{"minNights":3,"discountBps":1000,"description":"x"}"#)
                .unwrap();
        assert_eq!(promo, Promotion::new(3, 10.0, "x"));
    }

    #[test]
    fn test_guest_category_parsing() {
        assert_eq!("adults".parse::<GuestCategory>().unwrap(), GuestCategory::Adults);
        assert_eq!("Pet".parse::<GuestCategory>().unwrap(), GuestCategory::Pets);
        assert!("parrots".parse::<GuestCategory>().is_err());
    }

    #[test]
    fn test_guest_category_order() {
        let names: Vec<_> = GuestCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["adults", "children", "infant", "pets"]);
    }

    #[test]
    fn test_guest_limits_missing_category_defaults_to_zero() {
        let limits: GuestLimits =
            serde_json::from_str(r#"{"adults":{"min":1,"max":4}}"#).unwrap();
        assert_eq!(limits.get(GuestCategory::Adults), GuestBound::new(1, 4));
        assert_eq!(limits.get(GuestCategory::Pets), GuestBound::new(0, 0));
    }

    #[test]
    fn test_guest_bound_contains() {
        let bound = GuestBound::new(1, 2);
        assert!(!bound.contains(0));
        assert!(bound.contains(1));
        assert!(bound.contains(2));
        assert!(!bound.contains(3));
    }

    #[test]
    fn test_guest_counts_get() {
        let counts = GuestCounts { adults: 2, children: 1, infant: 1, pets: 3 };
        assert_eq!(counts.get(GuestCategory::Children), 1);
        assert_eq!(counts.get(GuestCategory::Pets), 3);
    }
}
