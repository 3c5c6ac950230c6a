//! Client core for the real-estate listings service.
//!
//! # Overview
//! `ListingsClient` builds the listings request and parses the response
//! without touching the network (host-does-IO pattern). `ListingsApi` pairs
//! it with a `Transport` for callers that want one blocking call, and
//! `OverviewModel` drives that call from a tokio runtime, publishing status,
//! listings and the selected listing through watch channels.
//!
//! # Design
//! - `ListingsClient` is stateless; it holds only `base_url`.
//! - `Transport` returns non-2xx responses as data so status handling stays
//!   in `parse_get_listings`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod overview;
pub mod transport;
pub mod types;

pub use api::ListingsApi;
pub use client::{ListingsClient, LISTINGS_ENDPOINT};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use overview::OverviewModel;
pub use transport::{Transport, UreqTransport};
pub use types::{ApiStatus, Listing, ListingFilter, UnknownFilter};
