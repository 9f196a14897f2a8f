//! # Listing Source
//!
//! The data-access contract the quote desk reads through.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  QuoteDesk                                                              │
//! │       │  source.listing("550e8400-...")                                 │
//! │       ▼                                                                 │
//! │  ListingSource (trait)                                                  │
//! │  ├── InMemoryListings   fixtures, CLI, tests                            │
//! │  └── (marketplace DB)   lives in the web app, implements the same trait │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ListingSnapshot { night_price, promotions, guest_limits, reservations }│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reservations in a snapshot must already exclude cancelled stays.

use std::collections::HashMap;
use std::path::Path;

use haven_core::validation::{
    validate_guest_limits, validate_listing_id, validate_night_price, validate_promotions,
};
use haven_core::{GuestLimits, Money, Promotion, ReservedInterval, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{QuoteError, QuoteResult};

/// Everything the desk needs to know about one listing, read at quote time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot {
    /// Listing id (UUID).
    pub id: String,

    #[serde(default)]
    pub title: String,

    pub night_price: Money,

    #[serde(default)]
    pub promotions: Vec<Promotion>,

    #[serde(default)]
    pub guest_limits: GuestLimits,

    /// Non-cancelled reservations.
    #[serde(default)]
    pub reservations: Vec<ReservedInterval>,
}

impl ListingSnapshot {
    /// Checks the host-entered settings.
    pub fn validate(&self) -> QuoteResult<()> {
        let invalid = |err: ValidationError| QuoteError::InvalidListing {
            listing_id: self.id.clone(),
            reason: err.to_string(),
        };

        validate_listing_id(&self.id).map_err(invalid)?;
        validate_night_price(self.night_price).map_err(invalid)?;
        validate_promotions(&self.promotions).map_err(invalid)?;
        validate_guest_limits(&self.guest_limits).map_err(invalid)?;

        Ok(())
    }
}

/// Supplies listing data by id.
pub trait ListingSource {
    /// Returns the current snapshot, or `ListingNotFound`.
    fn listing(&self, listing_id: &str) -> QuoteResult<ListingSnapshot>;
}

/// A `HashMap`-backed listing source.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListings {
    listings: HashMap<String, ListingSnapshot>,
}

impl InMemoryListings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a listing after validating it.
    pub fn insert(&mut self, listing: ListingSnapshot) -> QuoteResult<()> {
        listing.validate()?;
        debug!(listing_id = %listing.id, "Registering listing");
        self.listings.insert(listing.id.clone(), listing);
        Ok(())
    }

    /// Parses a JSON array of listing snapshots.
    pub fn from_json_str(json: &str) -> QuoteResult<Self> {
        let snapshots: Vec<ListingSnapshot> = serde_json::from_str(json)?;
        let mut source = Self::new();
        for snapshot in snapshots {
            source.insert(snapshot)?;
        }
        Ok(source)
    }

    /// Reads a JSON array of listing snapshots from disk.
    pub fn from_path(path: impl AsRef<Path>) -> QuoteResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let source = Self::from_json_str(&contents)?;
        info!(?path, count = source.len(), "Loaded listings");
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingSource for InMemoryListings {
    fn listing(&self, listing_id: &str) -> QuoteResult<ListingSnapshot> {
        self.listings
            .get(listing_id)
            .cloned()
            .ok_or_else(|| QuoteError::ListingNotFound(listing_id.to_string()))
    }
}
