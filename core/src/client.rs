//! Stateless HTTP request builder and response parser for the listings API.
//!
//! # Design
//! `ListingsClient` holds only a `base_url`. The single operation is split
//! into `build_get_listings`, which produces an `HttpRequest`, and
//! `parse_get_listings`, which consumes an `HttpResponse`. The round trip in
//! between belongs to the caller.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Listing, ListingFilter};

/// Path of the listings endpoint relative to the base URL.
pub const LISTINGS_ENDPOINT: &str = "realestate";

/// Synchronous, stateless client for the listings API.
#[derive(Debug, Clone)]
pub struct ListingsClient {
    base_url: String,
}

impl ListingsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_listings(&self, filter: ListingFilter) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{LISTINGS_ENDPOINT}", self.base_url),
            query: vec![("filter".to_string(), filter.query_value().to_string())],
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_get_listings(&self, response: HttpResponse) -> Result<Vec<Listing>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Any 2xx is a success; everything else becomes `ApiError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
