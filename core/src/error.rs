//! Error types for the listings API client.
//!
//! # Design
//! The state holder collapses every variant into `ApiStatus::Error`, so the
//! split only matters to callers driving `ListingsClient` directly (tests,
//! the FFI layer). `Transport` covers failures before any response arrived.

/// Errors returned by the listings client, transport and API layers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a status other than 200.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not a JSON array of listings.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The round trip itself failed (DNS, connect, read).
    #[error("transport failed: {0}")]
    Transport(String),
}
