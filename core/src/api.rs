//! One-call facade pairing `ListingsClient` with a `Transport`.

use tracing::debug;

use crate::client::ListingsClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Listing, ListingFilter};

/// Fetches listings over a fixed endpoint.
///
/// Each call is exactly one round trip: no retries, no timeout beyond what
/// the transport applies by default.
#[derive(Debug)]
pub struct ListingsApi<T> {
    client: ListingsClient,
    transport: T,
}

impl ListingsApi<UreqTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config, UreqTransport::new())
    }
}

impl<T: Transport> ListingsApi<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            client: ListingsClient::new(&config.base_url),
            transport,
        }
    }

    pub fn client(&self) -> &ListingsClient {
        &self.client
    }

    pub fn fetch_listings(&self, filter: ListingFilter) -> Result<Vec<Listing>, ApiError> {
        let request = self.client.build_get_listings(filter);
        debug!(url = %request.url(), "fetching listings");
        let response = self.transport.execute(request)?;
        self.client.parse_get_listings(response)
    }
}
