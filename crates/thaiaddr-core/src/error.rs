// crates/thaiaddr-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading or building the reference table.
///
/// These are the "load failure" conditions of a session. The resolution
/// engine itself never returns an error: rejected input is reported through
/// [`crate::engine::EngineEvent`] instead.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("reference table not found: {0}")]
    NotFound(String),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("reference table is empty")]
    Empty,
}

/// Why a piece of text is not a Thai postal code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostalCodeError {
    #[error("postal code must have 5 digits, got {0}")]
    WrongLength(usize),

    #[error("postal code may only contain digits")]
    NonDigit,

    #[error("postal code cannot start with 0")]
    LeadingZero,
}

pub type Result<T> = std::result::Result<T, AddressError>;
