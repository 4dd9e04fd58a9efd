//! Data models for the URL shortener application
//!
//! This module defines the stored record and the request/response shapes
//! used by the HTTP handlers.

use serde::{Deserialize, Serialize};

/// Longest original URL accepted, in characters
pub const MAX_URL_LEN: usize = 256;

/// Longest alias accepted or derived, in characters
pub const MAX_ALIAS_LEN: usize = 6;

/// A shortened URL as stored in the database and returned to clients
///
/// # Example
/// ```json
/// { "id": 1, "url": "https://example.com", "shorten_url": "exampl" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    /// Surrogate key assigned by the store on insert
    pub id: u64,

    /// The original long URL
    pub url: String,

    /// The alias that redirects to `url`
    pub shorten_url: String,
}

/// Request payload for creating a new short URL
///
/// # Example
/// ```json
/// {
///   "url": "https://example123.com",
///   "shorten_url": "ex"  // Optional
/// }
/// ```
#[derive(Deserialize, Debug, Clone)]
pub struct CreateRequest {
    /// The original URL to be shortened
    pub url: String,

    /// Optional alias chosen by the caller.
    /// When missing or empty, one is derived from the URL's host.
    #[serde(default)]
    pub shorten_url: Option<String>,
}

/// Query parameters for listing URLs
///
/// Both fields are optional. When neither is given the whole table is
/// returned.
#[derive(Deserialize, Debug, Default, Clone, Copy)]
pub struct ListParams {
    /// Page number, starting from 1
    pub page: Option<usize>,

    /// Items per page, at most 100
    pub limit: Option<usize>,
}

impl ListParams {
    /// Resolves the parameters into `(offset, limit)`, or `None` for an
    /// unpaginated listing
    pub fn window(&self) -> Option<(usize, usize)> {
        if self.page.is_none() && self.limit.is_none() {
            return None;
        }

        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(10).clamp(1, 100);
        Some(((page - 1).saturating_mul(limit), limit))
    }
}

/// Plain `{"detail": "..."}` body used for confirmations
#[derive(Serialize, Deserialize, Debug)]
pub struct DetailResponse {
    pub detail: String,
}
