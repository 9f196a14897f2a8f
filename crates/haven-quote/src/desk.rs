//! # Quote Desk
//!
//! Turns a guest's stay request into a priced quote, or a reason why not.
//!
//! ## Quote Flow
//! ```text
//! StayRequest { listing_id, startDate, endDate, guests }
//!      │
//!      ▼
//! source.listing(id) ──► ListingNotFound
//!      │
//!      ▼
//! StayValidator (today, max_nights from config)
//!      │  InvalidDateRange | DatesUnavailable | GuestLimitExceeded
//!      ▼
//! compute_total(range.nights(), night_price, promotions)
//!      │
//!      ▼
//! Quote { nights, breakdown }
//! ```
//!
//! The desk holds no mutable state; one desk can serve concurrent requests
//! as long as its source can.

use chrono::NaiveDate;
use haven_core::{compute_total, DateRange, GuestCounts, PriceBreakdown, StayValidator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::config::QuoteConfig;
use crate::error::{QuoteError, QuoteResult};
use crate::listing::ListingSource;

/// What the booking form submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StayRequest {
    pub listing_id: String,

    #[serde(flatten)]
    pub range: DateRange,

    #[serde(default)]
    pub guests: GuestCounts,
}

/// A priced, bookable stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Quote {
    pub listing_id: String,
    pub range: DateRange,
    pub nights: i64,
    pub currency: String,
    pub breakdown: PriceBreakdown,
}

/// Validates and prices stay requests against a listing source.
#[derive(Debug, Clone)]
pub struct QuoteDesk<S> {
    source: S,
    config: QuoteConfig,
}

impl<S: ListingSource> QuoteDesk<S> {
    pub fn new(source: S, config: QuoteConfig) -> Self {
        QuoteDesk { source, config }
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Quotes a stay as of `today` (the guest's current date, UTC).
    pub fn quote(&self, request: &StayRequest, today: NaiveDate) -> QuoteResult<Quote> {
        debug!(
            listing_id = %request.listing_id,
            range = %request.range,
            adults = request.guests.adults,
            children = request.guests.children,
            infant = request.guests.infant,
            pets = request.guests.pets,
            "Quoting stay"
        );

        let listing = self.source.listing(&request.listing_id)?;

        let validator = StayValidator::new(today).with_max_nights(self.config.booking.max_nights);
        let outcome = validator
            .validate(
                &request.range,
                &listing.reservations,
                &request.guests,
                &listing.guest_limits,
            )
            .and_then(|()| {
                compute_total(request.range.nights(), listing.night_price, &listing.promotions)
            });

        let breakdown = match outcome {
            Ok(breakdown) => breakdown,
            Err(err) => {
                warn!(
                    listing_id = %request.listing_id,
                    kind = ?err.kind(),
                    reason = %err,
                    "Stay request rejected"
                );
                return Err(QuoteError::Booking(err));
            }
        };

        info!(
            listing_id = %request.listing_id,
            nights = breakdown.nights,
            base_total = %breakdown.base_total,
            discount = %breakdown.discount,
            total = %breakdown.total,
            "Stay quoted"
        );

        Ok(Quote {
            listing_id: listing.id,
            range: request.range,
            nights: breakdown.nights,
            currency: self.config.currency().to_string(),
            breakdown,
        })
    }

    /// Quotes a stay as of the current UTC date.
    pub fn quote_today(&self, request: &StayRequest) -> QuoteResult<Quote> {
        self.quote(request, StayValidator::for_today().today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{InMemoryListings, ListingSnapshot};
    use haven_core::{
        BookingError, BookingErrorKind, GuestBound, GuestCategory, GuestLimits, Money, Promotion,
        ReservedInterval,
    };

    const LISTING_ID: &str = "0b9d7c4e-2f1a-4c3b-9e8d-7a6b5c4d3e2f";

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    fn desk(config: QuoteConfig) -> QuoteDesk<InMemoryListings> {
        let mut source = InMemoryListings::new();
        source
            .insert(ListingSnapshot {
                id: LISTING_ID.to_string(),
                title: "Loft".to_string(),
                night_price: Money::from_cents(10_000),
                promotions: vec![
                    Promotion::new(3, 10.0, "3+ nights"),
                    Promotion::new(7, 20.0, "Weekly"),
                ],
                guest_limits: GuestLimits {
                    adults: GuestBound::new(1, 2),
                    children: GuestBound::new(0, 2),
                    ..GuestLimits::default()
                },
                reservations: vec![ReservedInterval::new(d(12), d(14))],
            })
            .unwrap();
        QuoteDesk::new(source, config)
    }

    fn request(start: u32, end: u32, adults: u32) -> StayRequest {
        StayRequest {
            listing_id: LISTING_ID.to_string(),
            range: DateRange::new(d(start), d(end)),
            guests: GuestCounts {
                adults,
                ..GuestCounts::default()
            },
        }
    }

    #[test]
    fn test_quote_applies_promotion() {
        let quote = desk(QuoteConfig::default()).quote(&request(2, 5, 2), d(1)).unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.currency, "USD");
        assert_eq!(quote.breakdown.base_total.cents(), 30_000);
        assert_eq!(quote.breakdown.total.cents(), 27_000);
        assert_eq!(quote.breakdown.upcoming_promotions.len(), 1);
    }

    #[test]
    fn test_back_to_back_with_existing_reservation() {
        let desk = desk(QuoteConfig::default());
        assert!(desk.quote(&request(14, 16, 1), d(1)).is_ok());
        assert!(desk.quote(&request(10, 12, 1), d(1)).is_ok());
    }

    #[test]
    fn test_overlap_rejected() {
        let err = desk(QuoteConfig::default())
            .quote(&request(10, 15, 1), d(1))
            .unwrap_err();
        assert_eq!(
            err.as_booking().map(BookingError::kind),
            Some(BookingErrorKind::DatesUnavailable)
        );
    }

    #[test]
    fn test_guest_limit_rejected() {
        let err = desk(QuoteConfig::default())
            .quote(&request(2, 5, 5), d(1))
            .unwrap_err();
        assert!(matches!(
            err,
            QuoteError::Booking(BookingError::GuestLimitExceeded {
                category: GuestCategory::Adults,
                ..
            })
        ));
    }

    #[test]
    fn test_configured_max_nights() {
        let mut config = QuoteConfig::default();
        config.booking.max_nights = 5;
        let err = desk(config).quote(&request(15, 25, 1), d(1)).unwrap_err();
        assert_eq!(
            err.as_booking().map(BookingError::kind),
            Some(BookingErrorKind::InvalidDateRange)
        );
    }

    #[test]
    fn test_unknown_listing() {
        let mut req = request(2, 5, 1);
        req.listing_id = "5a5a5a5a-5a5a-4a5a-8a5a-5a5a5a5a5a5a".to_string();
        assert!(matches!(
            desk(QuoteConfig::default()).quote(&req, d(1)),
            Err(QuoteError::ListingNotFound(_))
        ));
    }

    #[test]
    fn test_request_json_shape() {
        let json = format!(
            r#"{{"listingId":"{}","startDate":"2024-02-02","endDate":"2024-02-05","guests":{{"adults":2}}}}"#,
            LISTING_ID
        );
        let parsed: StayRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request(2, 5, 2));
    }
}
