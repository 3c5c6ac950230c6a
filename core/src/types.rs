//! Domain types for the real-estate listings API.
//!
//! # Design
//! `Listing` mirrors the JSON shape served at `/realestate` but uses Rust
//! field names; serde renames bridge `img_src` and `type`. The mock-server
//! crate defines its own copy of the record so integration tests catch
//! schema drift between the two.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single real-estate listing returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    #[serde(rename = "img_src")]
    pub img_src_url: String,
    /// Either `"rent"` or `"buy"` as served by the API.
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
}

impl Listing {
    pub fn is_rental(&self) -> bool {
        self.kind == "rent"
    }
}

/// Outcome of the most recent fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Loading,
    Error,
    Done,
}

/// Subset of listings requested from the server via the `filter` query
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListingFilter {
    #[default]
    ShowAll,
    ShowRent,
    ShowBuy,
}

impl ListingFilter {
    /// Token sent as the `filter` query value.
    pub fn query_value(self) -> &'static str {
        match self {
            ListingFilter::ShowAll => "all",
            ListingFilter::ShowRent => "rent",
            ListingFilter::ShowBuy => "buy",
        }
    }
}

impl fmt::Display for ListingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_value())
    }
}

/// Returned when a string is not one of `all`, `rent` or `buy`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown listing filter: {0}")]
pub struct UnknownFilter(pub String);

impl FromStr for ListingFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ListingFilter::ShowAll),
            "rent" => Ok(ListingFilter::ShowRent),
            "buy" => Ok(ListingFilter::ShowBuy),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}
