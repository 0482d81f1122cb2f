//! Card error taxonomy
//!
//! Typed outcomes returned to the host framework. Nothing here is retried
//! internally and nothing crashes the process; every failure is a value.

use thiserror::Error;

use crate::conv::DecodeError;

/// Card operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// Operation is not implemented by this backend (the 2G triplet path)
    #[error("operation not supported")]
    NotSupported,

    /// The remote service reports the identity/device as unknown
    #[error("identity not found by SIM Manager")]
    NotFound,

    /// Network/HTTP-layer failure, or an empty response body
    #[error("SIM Manager request failed")]
    TransportFailed,

    /// Response body is not a well-formed JSON object, or required fields
    /// are missing or of the wrong length
    #[error("SIM Manager response could not be parsed")]
    ParseFailed,

    /// Protocol signal, not a hard error: the presented vectors are out of
    /// sequence and the peer should be asked to resynchronize
    #[error("resynchronization required")]
    SyncRequired,

    /// Malformed hex in a field expected to carry vector material
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// No SIM Manager URL configured; requests fail fast
    #[error("SIM Manager URL is not configured")]
    NotConfigured,
}

/// Result type for card operations
pub type CardResult<T> = Result<T, CardError>;
