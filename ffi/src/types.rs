//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! enums with explicit discriminants. Conversion functions live here to keep
//! `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use listings_core::error::ApiError;
use listings_core::http::HttpMethod;
use listings_core::types::{Listing, ListingFilter};

/// Opaque handle to a `ListingsClient`.
pub struct FfiListingsClient {
    pub(crate) inner: listings_core::ListingsClient,
}

/// Owned C string; interior NULs collapse the value to an empty string.
pub(crate) fn c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// Listing subset requested by the host. Passed across the ABI as a `u32`
/// so out-of-range values from C cannot form an invalid enum.
#[repr(u32)]
#[derive(Clone, Copy)]
pub enum FfiListingFilter {
    All = 0,
    Rent = 1,
    Buy = 2,
}

/// Map a raw filter discriminant; unknown values select every listing.
pub(crate) fn listing_filter_from_raw(raw: u32) -> ListingFilter {
    match raw {
        x if x == FfiListingFilter::Rent as u32 => ListingFilter::ShowRent,
        x if x == FfiListingFilter::Buy as u32 => ListingFilter::ShowBuy,
        _ => ListingFilter::ShowAll,
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// `url` already carries the query string, so the host can hand it to its
/// HTTP stack unchanged.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    pub(crate) fn from_core(req: listings_core::HttpRequest) -> *mut Self {
        let url = c_string(req.url());

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Vec<FfiHeader> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect();
            // Boxed slice so capacity equals length when freeing.
            Box::into_raw(ffi_headers.into_boxed_slice()) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url,
            headers,
            headers_len,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The FFI layer reads but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiListingsResult`.
#[repr(C)]
#[derive(Debug)]
pub enum FfiErrorCode {
    Ok = 0,
    Http = 1,
    Deserialization = 2,
    Transport = 3,
    Panic = 4,
    NullArg = 5,
}

/// A single listing exposed to C.
#[repr(C)]
pub struct FfiListing {
    pub id: *mut c_char,
    pub img_src_url: *mut c_char,
    pub kind: *mut c_char,
    pub price: f64,
    pub is_rental: bool,
}

impl FfiListing {
    fn from_core(listing: Listing) -> Self {
        let is_rental = listing.is_rental();
        FfiListing {
            id: c_string(listing.id),
            img_src_url: c_string(listing.img_src_url),
            kind: c_string(listing.kind),
            price: listing.price,
            is_rental,
        }
    }
}

/// A list of listings exposed to C. `items` is null when `len` is 0.
#[repr(C)]
pub struct FfiListingList {
    pub items: *mut FfiListing,
    pub len: u32,
}

/// Result envelope for `listings_parse_get_listings`.
///
/// On success `error_code` is `Ok`, `error_message` is null and `listings`
/// points to the parsed list. On failure `listings` is null.
#[repr(C)]
pub struct FfiListingsResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub listings: *mut FfiListingList,
}

impl FfiListingsResult {
    pub(crate) fn ok(listings: Vec<Listing>, http_status: u16) -> *mut Self {
        let len = listings.len() as u32;
        let items = if listings.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_listings: Box<[FfiListing]> =
                listings.into_iter().map(FfiListing::from_core).collect();
            Box::into_raw(ffi_listings) as *mut FfiListing
        };

        Box::into_raw(Box::new(FfiListingsResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status,
            listings: Box::into_raw(Box::new(FfiListingList { items, len })),
        }))
    }

    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let (error_code, http_status) = match &err {
            ApiError::Http { status, .. } => (FfiErrorCode::Http, *status),
            ApiError::Deserialization(_) => (FfiErrorCode::Deserialization, 0),
            ApiError::Transport(_) => (FfiErrorCode::Transport, 0),
        };
        Self::failure(error_code, http_status, err.to_string())
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::NullArg, 0, format!("null argument: {name}"))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, 0, msg.to_string())
    }

    fn failure(error_code: FfiErrorCode, http_status: u16, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiListingsResult {
            error_code,
            error_message: c_string(msg),
            http_status,
            listings: std::ptr::null_mut(),
        }))
    }
}
