//! # Error Types
//!
//! This module defines the error types used throughout the bonnetje library.

use thiserror::Error;

/// Main error type for print operations.
#[derive(Debug, Error)]
pub enum PrintError {
    /// A print was requested before a transport was opened.
    ///
    /// Fatal: raised before any block is emitted, so a failed print never
    /// produces partial output.
    #[error("printer session has not been initialized")]
    UninitializedSession,

    /// A document variant that needs order data was invoked without one.
    #[error("no order attached to the document context")]
    MissingOrderContext,

    /// Invalid connector descriptor at open time.
    #[error("invalid connector: {0}")]
    InvalidConnector(String),

    /// Malformed input data (order or profile files).
    #[error("invalid input: {0}")]
    InvalidData(String),

    /// Transport-level I/O failure. Propagated unchanged; retries, if any,
    /// belong to the transport behind the session.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type PrintResult<T> = Result<T, PrintError>;
