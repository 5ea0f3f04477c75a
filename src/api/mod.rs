// src/api/mod.rs
//! Backend listing API - wire types, the client seam and its HTTP implementation.

pub mod client;
pub mod entry;
pub mod error;

// Re-export commonly used types
pub use client::{HttpListingClient, LISTING_ENDPOINT, ListingClient, listing_url};
pub use entry::FileEntry;
pub use error::ListingError;
