//! # Quote Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │    Listings     │  │      Booking            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │ ListingNotFound │  │  Booking(BookingError)  │ │
//! │  │  ConfigLoad...  │  │  Json / Io      │  │  user-correctable       │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use haven_core::BookingError;
use thiserror::Error;

/// Result type alias for quote desk operations.
pub type QuoteResult<T> = Result<T, QuoteError>;

#[derive(Debug, Error)]
pub enum QuoteError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration values are inconsistent.
    #[error("Invalid quote configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Listing Errors
    // =========================================================================
    /// The data source has no listing with this id.
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// Listing data failed validation (e.g. duplicate promotion tiers).
    #[error("Listing {listing_id} has invalid settings: {reason}")]
    InvalidListing { listing_id: String, reason: String },

    // =========================================================================
    // Booking Errors
    // =========================================================================
    /// The stay was refused or could not be priced.
    #[error(transparent)]
    Booking(#[from] BookingError),

    // =========================================================================
    // I/O and Formats
    // =========================================================================
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for QuoteError {
    fn from(err: toml::de::Error) -> Self {
        QuoteError::ConfigLoadFailed(err.to_string())
    }
}

impl QuoteError {
    /// The booking error inside, if this is a refused stay.
    pub fn as_booking(&self) -> Option<&BookingError> {
        match self {
            QuoteError::Booking(err) => Some(err),
            _ => None,
        }
    }
}
