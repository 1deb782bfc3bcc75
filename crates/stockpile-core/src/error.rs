//! Shared error type across stockpile crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// An item with the same name is already stored.
    AlreadyExists,
    /// No item with the requested name.
    NotFound,
    /// Quantity was zero or negative.
    InvalidQuantity,
    /// Any other business-range violation.
    BadRequest,
    /// Body could not be decoded into the expected shape.
    Unprocessable,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::AlreadyExists => "ALREADY_EXISTS",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::InvalidQuantity => "INVALID_QUANTITY",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Unprocessable => "UNPROCESSABLE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Unified error type used by the store and the gateway.
///
/// The `Display` text doubles as the `detail` string sent to clients.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Item already exists")]
    AlreadyExists,
    #[error("Item not found")]
    NotFound,
    #[error("Quantity must be a positive number")]
    InvalidQuantity,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid body: {0}")]
    Unprocessable(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl InventoryError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            InventoryError::AlreadyExists => ClientCode::AlreadyExists,
            InventoryError::NotFound => ClientCode::NotFound,
            InventoryError::InvalidQuantity => ClientCode::InvalidQuantity,
            InventoryError::BadRequest(_) => ClientCode::BadRequest,
            InventoryError::Unprocessable(_) => ClientCode::Unprocessable,
            InventoryError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            InventoryError::Internal(_) => ClientCode::Internal,
        }
    }
}
