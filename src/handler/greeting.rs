//! Greeting handler module
//!
//! Serves the fixed diagnostic string on the test route.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::http;

/// Body returned for every request to the test route.
pub const GREETING: &str = "Hello from Go Test!";

/// Handle a request to the test route.
///
/// Ignores the request entirely: any method, headers, or body gets the
/// same 200 plaintext greeting.
pub fn greet(is_head: bool) -> Response<Full<Bytes>> {
    http::build_text_response(GREETING, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_is_fixed() {
        let resp = greet(false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-length"], "19");
        assert_eq!(
            resp.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
    }
}
