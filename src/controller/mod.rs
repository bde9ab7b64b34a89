//! HTTP request handlers, one module per entity.
//!
//! Every controller exposes the same five operations (create, get by ID, list,
//! update, delete) and delegates each to exactly one repository call. Handlers
//! hold no state of their own; the shared `AppState` arrives per request via
//! Axum's state extraction.

pub mod academic;
pub mod petition;
pub mod request;
pub mod subject;


use serde::Deserialize;

const DEFAULT_LIMIT: u64 = 10;
const DEFAULT_OFFSET: u64 = 0;

/// Pagination query parameters shared by every list endpoint.
///
/// The raw values are kept as strings so that a malformed parameter never
/// rejects the request. A value that is absent or does not parse as a
/// non-negative integer silently falls back to the default.
#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListParams {
    /// Resolves the raw query values into a `(limit, offset)` window.
    ///
    /// Defaults: limit 10, offset 0. There is no upper bound on `limit`.
    pub fn resolve(&self) -> (u64, u64) {
        let limit = self
            .limit
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_LIMIT);
        let offset = self
            .offset
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_OFFSET);

        (limit, offset)
    }
}
