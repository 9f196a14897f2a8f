//! # Validation Module
//!
//! Field-level validators for calculator arguments and host-entered listing
//! settings.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Booking form / hosting dashboard (TypeScript)                 │
//! │  └── Immediate feedback, one message at a time                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - single fields                                   │
//! │  ├── nights ≥ 1, night price ≥ 0                                        │
//! │  └── promotions, guest limits as the host saves them                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: crate::stay - the whole request against the listing           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use haven_core::validation::{validate_nights, validate_promotions};
//! use haven_core::Promotion;
//!
//! assert!(validate_nights(3).is_ok());
//! assert!(validate_nights(0).is_err());
//!
//! let promos = [Promotion::new(7, 10.0, "Weekly"), Promotion::new(7, 15.0, "Also weekly")];
//! assert!(validate_promotions(&promos).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{DiscountRate, GuestBound, GuestCategory, GuestLimits, Promotion};
use crate::{MAX_DESCRIPTION_LEN, MAX_DISCOUNT_BPS};

/// Result type for field validation.
pub type FieldResult<T> = Result<T, ValidationError>;

// =============================================================================
// Calculator Arguments
// =============================================================================

/// Validates a stay length.
///
/// ## Rules
/// - Must be at least 1 night
pub fn validate_nights(nights: i64) -> FieldResult<()> {
    if nights < 1 {
        return Err(ValidationError::MustBePositive {
            field: "nights".to_string(),
        });
    }

    Ok(())
}

/// Validates a nightly rate.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free stays, e.g. owner blocks priced at 0)
///
/// ## Example
/// ```rust
/// use haven_core::money::Money;
/// use haven_core::validation::validate_night_price;
///
/// assert!(validate_night_price(Money::from_cents(10_000)).is_ok());
/// assert!(validate_night_price(Money::zero()).is_ok());
/// assert!(validate_night_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_night_price(price: Money) -> FieldResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "night price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Promotions
// =============================================================================

/// Validates a discount rate.
///
/// ## Rules
/// - Must be in (0%, 100%], i.e. 1..=10000 bps
pub fn validate_discount_rate(rate: DiscountRate) -> FieldResult<()> {
    if rate.is_zero() || rate.bps() > MAX_DISCOUNT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 1,
            max: MAX_DISCOUNT_BPS as i64,
        });
    }

    Ok(())
}

/// Validates one promotion as the host saves it.
///
/// ## Rules
/// - `min_nights` ≥ 1
/// - discount in (0%, 100%]
/// - description at most 200 characters (may be empty)
pub fn validate_promotion(promotion: &Promotion) -> FieldResult<()> {
    if promotion.min_nights < 1 {
        return Err(ValidationError::MustBePositive {
            field: "minimum nights".to_string(),
        });
    }

    validate_discount_rate(promotion.discount)?;

    if promotion.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates a listing's full promotion set.
///
/// Each promotion must be valid on its own, and no two may share a
/// `min_nights` value. The price calculator itself tolerates duplicates; this
/// is the check the hosting flow runs before saving.
pub fn validate_promotions(promotions: &[Promotion]) -> FieldResult<()> {
    let mut seen = HashSet::with_capacity(promotions.len());

    for promotion in promotions {
        validate_promotion(promotion)?;

        if !seen.insert(promotion.min_nights) {
            return Err(ValidationError::Duplicate {
                field: "promotion minimum nights".to_string(),
                value: promotion.min_nights.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Guest Limits
// =============================================================================

/// Validates one category's bound.
///
/// ## Rules
/// - `min ≤ max` (both are unsigned, so ≥ 0 holds by type)
pub fn validate_guest_bound(category: GuestCategory, bound: GuestBound) -> FieldResult<()> {
    if bound.min > bound.max {
        return Err(ValidationError::OutOfRange {
            field: format!("{} minimum", category),
            min: 0,
            max: bound.max as i64,
        });
    }

    Ok(())
}

/// Validates all guest limits, in category order.
pub fn validate_guest_limits(limits: &GuestLimits) -> FieldResult<()> {
    GuestCategory::ALL
        .iter()
        .try_for_each(|&category| validate_guest_bound(category, limits.get(category)))
}

// =============================================================================
// Identifiers
// =============================================================================

/// Validates a listing identifier (UUID).
///
/// ## Example
/// ```rust
/// use haven_core::validation::validate_listing_id;
///
/// assert!(validate_listing_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_listing_id("not-a-uuid").is_err());
/// ```
pub fn validate_listing_id(id: &str) -> FieldResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "listing id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "listing id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
