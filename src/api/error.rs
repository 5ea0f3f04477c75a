// src/api/error.rs
//! Failure of a single listing request.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a listing could not be obtained.
///
/// All variants are surfaced the same way; the split only exists so the log
/// shows what went wrong.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The backend answered with a non-2xx status. The body is not read.
    #[error("Failed to fetch files")]
    Status(StatusCode),
    /// The request never completed (connection refused, reset, ...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The body was not a JSON array of entries.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}
