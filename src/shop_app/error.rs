// shop_app/error.rs - Error types for the shop
//
// One enum per concern. None of these are fatal: the page layer turns
// them into notices and leaves state as it was.

use thiserror::Error;

/// Product feed could not be reached or decoded
#[derive(Error, Debug)]
pub enum ProductFetchError {
    #[cfg(feature = "feed")]
    #[error("Feed request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Feed returned HTTP status {0}")]
    Status(u16),

    #[error("Feed payload could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Feed file could not be read: {0}")]
    Io(#[from] std::io::Error),
}

/// Checkout was attempted with nothing in the cart
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Cart is empty")]
pub struct EmptyCartError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored session is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}
