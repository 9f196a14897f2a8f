//! # haven-quote: Quote Desk for Haven Stays
//!
//! Orchestrates [`haven_core`] for callers that hold a listing id rather than
//! raw listing data.
//!
//! ## Modules
//!
//! - [`config`] - quote.toml + environment overrides
//! - [`listing`] - `ListingSource` contract and the in-memory source
//! - [`desk`] - `QuoteDesk`: validate then price
//! - [`error`] - `QuoteError`
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use haven_core::{DateRange, GuestBound, GuestCounts, GuestLimits, Money, Promotion};
//! use haven_quote::{InMemoryListings, ListingSnapshot, QuoteConfig, QuoteDesk, StayRequest};
//!
//! let id = "6f1c2a9e-3b4d-4e5f-8a7b-9c0d1e2f3a4b";
//! let mut listings = InMemoryListings::new();
//! listings.insert(ListingSnapshot {
//!     id: id.to_string(),
//!     title: "Cabin".to_string(),
//!     night_price: Money::from_cents(10_000),
//!     promotions: vec![Promotion::new(3, 10.0, "3+ nights")],
//!     guest_limits: GuestLimits { adults: GuestBound::new(1, 2), ..Default::default() },
//!     reservations: vec![],
//! }).unwrap();
//!
//! let desk = QuoteDesk::new(listings, QuoteConfig::default());
//! let d = |day| NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
//! let request = StayRequest {
//!     listing_id: id.to_string(),
//!     range: DateRange::new(d(10), d(13)),
//!     guests: GuestCounts { adults: 1, ..Default::default() },
//! };
//!
//! let quote = desk.quote(&request, d(1)).unwrap();
//! assert_eq!(quote.breakdown.total.cents(), 27_000);
//! ```

pub mod config;
pub mod desk;
pub mod error;
pub mod listing;

pub use config::QuoteConfig;
pub use desk::{Quote, QuoteDesk, StayRequest};
pub use error::{QuoteError, QuoteResult};
pub use listing::{InMemoryListings, ListingSnapshot, ListingSource};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=haven_quote=trace` - Trace this crate only
/// - Default: the `[logging] filter` from quote.toml
pub fn init_tracing(config: &QuoteConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    // A second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
