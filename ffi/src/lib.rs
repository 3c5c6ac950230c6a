//! C-ABI wrapper around `listings-core`.
//!
//! # Overview
//! Lets a mobile host build the listings request, run it on its own HTTP
//! stack, and hand the response back for parsing, without linking to a Rust
//! async runtime.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `listings_build_get_listings` / `listings_parse_get_listings` mirror the
//!   core client 1:1.
//! - The C caller owns all returned pointers and must call the matching
//!   `listings_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use listings_core::http::HttpResponse;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `ListingsClient` bound to `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `listings_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn listings_client_new(base_url: *const c_char) -> *mut FfiListingsClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let url = unsafe { CStr::from_ptr(base_url) }.to_str().unwrap_or("");
        let client = listings_core::ListingsClient::new(url);
        Box::into_raw(Box::new(FfiListingsClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `listings_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn listings_client_free(client: *mut FfiListingsClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build / parse
// ---------------------------------------------------------------------------

/// Build the GET request for listings matching `filter`, one of the
/// `FfiListingFilter` discriminants. Unknown values request every listing.
///
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn listings_build_get_listings(
    client: *const FfiListingsClient,
    filter: u32,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_get_listings(listing_filter_from_raw(filter)))
    })
    .unwrap_or(std::ptr::null_mut())
}

fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }
            .to_string_lossy()
            .into_owned()
    };
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

/// Parse the response to a listings request.
///
/// Never returns null; check `error_code` on the result.
#[unsafe(no_mangle)]
pub extern "C" fn listings_parse_get_listings(
    client: *const FfiListingsClient,
    response: *const FfiHttpResponse,
) -> *mut FfiListingsResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiListingsResult::null_arg("client");
        }
        if response.is_null() {
            return FfiListingsResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_get_listings(ffi_response_to_core(resp)) {
            Ok(listings) => FfiListingsResult::ok(listings, resp.status),
            Err(e) => FfiListingsResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiListingsResult::panic("panic in listings_parse_get_listings"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a request returned by `listings_build_get_listings`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn listings_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.url);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free a result returned by `listings_parse_get_listings`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn listings_free_result(result: *mut FfiListingsResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if result.listings.is_null() {
            return;
        }
        let list = unsafe { Box::from_raw(result.listings) };
        if !list.items.is_null() && list.len > 0 {
            let items = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    list.items,
                    list.len as usize,
                ))
            };
            for item in items.iter() {
                free_c_string(item.id);
                free_c_string(item.img_src_url);
                free_c_string(item.kind);
            }
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn listings_free_string(s: *mut c_char) {
    let _ = catch_unwind(|| free_c_string(s));
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn client() -> *mut FfiListingsClient {
        let url = CString::new("http://localhost:3000").unwrap();
        listings_client_new(url.as_ptr())
    }

    fn parse(client: *const FfiListingsClient, status: u16, body: &str) -> *mut FfiListingsResult {
        let body = CString::new(body).unwrap();
        let resp = FfiHttpResponse {
            status,
            body: body.as_ptr(),
        };
        listings_parse_get_listings(client, &resp)
    }

    fn c_str<'a>(p: *const c_char) -> &'a str {
        unsafe { CStr::from_ptr(p) }.to_str().unwrap()
    }

    #[test]
    fn client_new_and_free() {
        let client = client();
        assert!(!client.is_null());
        listings_client_free(client);
    }

    #[test]
    fn client_new_null_returns_null() {
        assert!(listings_client_new(std::ptr::null()).is_null());
    }

    #[test]
    fn client_free_null_is_safe() {
        listings_client_free(std::ptr::null_mut());
    }

    #[test]
    fn build_get_listings_returns_url_with_filter() {
        let client = client();
        for (filter, url) in [
            (FfiListingFilter::All, "http://localhost:3000/realestate?filter=all"),
            (FfiListingFilter::Rent, "http://localhost:3000/realestate?filter=rent"),
            (FfiListingFilter::Buy, "http://localhost:3000/realestate?filter=buy"),
        ] {
            let req = listings_build_get_listings(client, filter as u32);
            assert!(!req.is_null());

            let req_ref = unsafe { &*req };
            assert!(matches!(req_ref.method, FfiHttpMethod::Get));
            assert_eq!(c_str(req_ref.url), url);
            assert_eq!(req_ref.headers_len, 1);

            let headers =
                unsafe { std::slice::from_raw_parts(req_ref.headers, req_ref.headers_len as usize) };
            assert_eq!(c_str(headers[0].key), "accept");
            assert_eq!(c_str(headers[0].value), "application/json");

            listings_free_request(req);
        }
        listings_client_free(client);
    }

    #[test]
    fn build_get_listings_null_client_returns_null() {
        let req = listings_build_get_listings(std::ptr::null(), FfiListingFilter::All as u32);
        assert!(req.is_null());
    }

    #[test]
    fn build_get_listings_unknown_filter_requests_all() {
        let client = client();
        for raw in [3, 42, u32::MAX] {
            let req = listings_build_get_listings(client, raw);
            assert!(!req.is_null());

            let req_ref = unsafe { &*req };
            assert_eq!(c_str(req_ref.url), "http://localhost:3000/realestate?filter=all");

            listings_free_request(req);
        }
        listings_client_free(client);
    }

    #[test]
    fn parse_get_listings_empty() {
        let client = client();
        let result = parse(client, 200, "[]");
        assert!(!result.is_null());

        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        assert!(r.error_message.is_null());
        let list = unsafe { &*r.listings };
        assert_eq!(list.len, 0);
        assert!(list.items.is_null());

        listings_free_result(result);
        listings_client_free(client);
    }

    #[test]
    fn parse_get_listings_two_items() {
        let client = client();
        let result = parse(
            client,
            200,
            r#"[
                {"price":450000,"id":"424906","type":"rent","img_src":"http://a/1.jpg"},
                {"price":8000000,"id":"424907","type":"buy","img_src":"http://a/2.jpg"}
            ]"#,
        );
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));

        let list = unsafe { &*r.listings };
        assert_eq!(list.len, 2);
        let items = unsafe { std::slice::from_raw_parts(list.items, list.len as usize) };

        assert_eq!(c_str(items[0].id), "424906");
        assert_eq!(c_str(items[0].img_src_url), "http://a/1.jpg");
        assert_eq!(c_str(items[0].kind), "rent");
        assert_eq!(items[0].price, 450_000.0);
        assert!(items[0].is_rental);

        assert_eq!(c_str(items[1].id), "424907");
        assert!(!items[1].is_rental);

        listings_free_result(result);
        listings_client_free(client);
    }

    #[test]
    fn parse_get_listings_accepts_non_200_success() {
        let client = client();
        let result = parse(
            client,
            203,
            r#"[{"price":450000,"id":"424906","type":"rent","img_src":"http://a"}]"#,
        );
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        assert_eq!(r.http_status, 203);
        let list = unsafe { &*r.listings };
        assert_eq!(list.len, 1);

        listings_free_result(result);
        listings_client_free(client);
    }

    #[test]
    fn parse_get_listings_server_error() {
        let client = client();
        let result = parse(client, 500, "boom");
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Http));
        assert_eq!(r.http_status, 500);
        assert!(r.listings.is_null());
        assert_eq!(c_str(r.error_message), "HTTP 500: boom");

        listings_free_result(result);
        listings_client_free(client);
    }

    #[test]
    fn parse_get_listings_bad_json() {
        let client = client();
        let result = parse(client, 200, "not json");
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Deserialization));
        assert!(!r.error_message.is_null());

        listings_free_result(result);
        listings_client_free(client);
    }

    #[test]
    fn parse_null_body_is_deserialization_error() {
        let client = client();
        let resp = FfiHttpResponse {
            status: 200,
            body: std::ptr::null(),
        };
        let result = listings_parse_get_listings(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Deserialization));

        listings_free_result(result);
        listings_client_free(client);
    }

    #[test]
    fn parse_null_client_returns_null_arg() {
        let result = parse(std::ptr::null(), 200, "[]");
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::NullArg));
        assert_eq!(c_str(r.error_message), "null argument: client");

        listings_free_result(result);
    }

    #[test]
    fn parse_null_response_returns_null_arg() {
        let client = client();
        let result = listings_parse_get_listings(client, std::ptr::null());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::NullArg));

        listings_free_result(result);
        listings_client_free(client);
    }

    #[test]
    fn free_request_null_is_safe() {
        listings_free_request(std::ptr::null_mut());
    }

    #[test]
    fn free_result_null_is_safe() {
        listings_free_result(std::ptr::null_mut());
    }

    #[test]
    fn free_string_null_is_safe() {
        listings_free_string(std::ptr::null_mut());
    }
}
