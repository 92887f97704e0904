//! Cursor-based pagination types.
//!
//! Listings page forward only and return the shape `{ page, nextCursor }`:
//! an absent cursor means the listing is exhausted. Cursors are opaque
//! base64 tokens wrapping the boundary row's UUID; ids are time-ordered
//! (v7), so the id alone provides a stable sort key.

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Cursor
// ============================================================================

/// Opaque cursor for pagination (base64-encoded UUID).
#[derive(Debug, Clone)]
pub struct Cursor(Uuid);

impl Cursor {
    /// Create a cursor from a UUID.
    pub fn new(id: Uuid) -> Self {
        Cursor(id)
    }

    /// Encode the cursor as a base64 string.
    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0.as_bytes())
    }

    /// Encode a UUID directly to a cursor string.
    pub fn encode_uuid(id: Uuid) -> String {
        Cursor::new(id).encode()
    }

    /// Decode a cursor string back to a Cursor.
    pub fn decode(s: &str) -> Result<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(s)
            .context("Invalid cursor: not valid base64")?;
        let uuid = Uuid::from_slice(&bytes).context("Invalid cursor: not a valid UUID")?;
        Ok(Cursor(uuid))
    }

    /// Get the underlying UUID.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Page arguments
// ============================================================================

/// Raw pagination arguments as they arrive from a client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageArgs {
    /// Requested page size (defaults to 25, bounds 1-100).
    pub page_size: Option<i32>,
    /// Continuation cursor returned by the previous page.
    pub cursor: Option<String>,
}

impl PageArgs {
    pub fn new(page_size: Option<i32>, cursor: Option<String>) -> Self {
        Self { page_size, cursor }
    }

    /// Validate arguments: apply the default and bounds, decode the cursor.
    pub fn validate(&self) -> Result<ValidatedPageArgs, &'static str> {
        let limit = self.page_size.unwrap_or(25).clamp(1, 100);

        let cursor = self
            .cursor
            .as_deref()
            .map(Cursor::decode)
            .transpose()
            .map_err(|_| "Invalid cursor")?
            .map(|c| c.into_uuid());

        Ok(ValidatedPageArgs { limit, cursor })
    }
}

/// Validated and normalized pagination arguments.
#[derive(Debug, Clone)]
pub struct ValidatedPageArgs {
    /// Number of items to return (1-100, default 25).
    pub limit: i32,
    /// Boundary UUID decoded from the cursor, if one was provided.
    pub cursor: Option<Uuid>,
}

impl ValidatedPageArgs {
    /// Fetch limit for the store scan (limit + 1 to detect a next page).
    pub fn fetch_limit(&self) -> usize {
        self.limit as usize + 1
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of results plus the continuation cursor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page: Vec<T>,
    /// Cursor for the next page; `None` when the listing is exhausted.
    pub next_cursor: Option<String>,
}

/// Trim results to the requested limit and determine if there are more.
///
/// Store scans fetch `limit + 1` items. This trims to the actual limit
/// and returns whether there were more items.
pub fn trim_results<T>(results: Vec<T>, limit: i32) -> (Vec<T>, bool) {
    let has_more = results.len() > limit as usize;
    let results = if has_more {
        results.into_iter().take(limit as usize).collect()
    } else {
        results
    };
    (results, has_more)
}

/// Build a `Page` from a `limit + 1` scan result.
///
/// The continuation cursor is the id of the last row actually returned.
pub fn build_page<T>(
    results: Vec<T>,
    args: &ValidatedPageArgs,
    id_of: impl Fn(&T) -> Uuid,
) -> Page<T> {
    let (page, has_more) = trim_results(results, args.limit);
    let next_cursor = if has_more {
        page.last().map(|item| Cursor::encode_uuid(id_of(item)))
    } else {
        None
    };
    Page { page, next_cursor }
}
