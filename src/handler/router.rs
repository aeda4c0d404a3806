//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Routes are matched by exact
//! path; everything else falls through to 404.

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};

use crate::config::RoutesConfig;
use crate::handler::{greeting, static_files};
use crate::http;
use crate::logger;

/// Router holding the route table for the server.
///
/// Constructed once at startup and shared across connections. Handlers
/// keep no per-request state, so dispatch needs only `&self` and the
/// router can be tested without a running listener.
#[derive(Debug, Clone)]
pub struct Router {
    home_file: String,
}

impl Router {
    pub fn new(routes: &RoutesConfig) -> Self {
        Self {
            home_file: routes.home_file.clone(),
        }
    }

    /// Dispatch a request to its handler by exact path match.
    ///
    /// Method, headers, and body are ignored for routing. HEAD requests
    /// get the matched response with an empty body.
    pub async fn dispatch<B>(&self, req: Request<B>, access_log: bool) -> Response<Full<Bytes>> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let is_head = method == Method::HEAD;

        let response = match path.as_str() {
            "/" => static_files::serve_file(&self.home_file, is_head).await,
            "/test" => greeting::greet(is_head),
            _ => http::build_404_response(),
        };

        if access_log {
            logger::log_request(
                &method,
                &path,
                response.status().as_u16(),
                response_len(&response),
            );
        }

        response
    }
}

/// Exact body length of a built response, for access logging
fn response_len(response: &Response<Full<Bytes>>) -> u64 {
    response.body().size_hint().exact().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn test_router(home_file: &str) -> Router {
        Router::new(&RoutesConfig {
            home_file: home_file.to_string(),
        })
    }

    fn request(method: Method, path: &str) -> Request<()> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(())
            .expect("request")
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes()
    }

    #[tokio::test]
    async fn test_route_returns_greeting() {
        let router = test_router("static/abcd.html");
        let resp = router.dispatch(request(Method::GET, "/test"), false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_bytes(resp).await, Bytes::from("Hello from Go Test!"));
    }

    #[tokio::test]
    async fn test_route_ignores_method() {
        let router = test_router("static/abcd.html");
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let resp = router.dispatch(request(method, "/test"), false).await;
            assert_eq!(resp.status(), 200);
            assert_eq!(body_bytes(resp).await, Bytes::from("Hello from Go Test!"));
        }
    }

    #[tokio::test]
    async fn home_serves_file_contents() {
        let path = std::env::temp_dir().join(format!("hello_server_router_{}.html", std::process::id()));
        std::fs::write(&path, "<html>ok</html>").expect("write temp file");

        let router = test_router(path.to_str().expect("utf-8 path"));
        let resp = router.dispatch(request(Method::GET, "/"), false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/html; charset=utf-8");
        assert_eq!(body_bytes(resp).await, Bytes::from("<html>ok</html>"));

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn home_missing_file_is_404() {
        let router = test_router("no/such/file.html");
        let resp = router.dispatch(request(Method::GET, "/"), false).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let router = test_router("static/abcd.html");
        let resp = router.dispatch(request(Method::GET, "/unknown"), false).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn repeated_requests_are_identical() {
        let router = test_router("static/abcd.html");
        let first = router.dispatch(request(Method::GET, "/test"), false).await;
        let second = router.dispatch(request(Method::GET, "/test"), false).await;
        assert_eq!(first.status(), second.status());
        assert_eq!(body_bytes(first).await, body_bytes(second).await);
    }

    #[tokio::test]
    async fn head_request_has_empty_body() {
        let router = test_router("static/abcd.html");
        let resp = router.dispatch(request(Method::HEAD, "/test"), false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-length"], "19");
        assert!(body_bytes(resp).await.is_empty());
    }
}
