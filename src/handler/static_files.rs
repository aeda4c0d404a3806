//! Static file serving module
//!
//! Handles file loading, MIME type detection, and IO-error-to-status
//! mapping for the home route.

use std::io::ErrorKind;
use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::http::{self, mime};
use crate::logger;

/// Serve a single file from disk.
///
/// Reads the file on every call; no caching, no state between calls.
/// Missing file maps to 404, permission errors to 403, other IO errors
/// to 500.
pub async fn serve_file(file_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let path = Path::new(file_path);

    match fs::read(path).await {
        Ok(content) => {
            let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));
            http::build_file_response(content, content_type, is_head)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => http::build_404_response(),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            logger::log_warning(&format!("Permission denied reading '{file_path}': {e}"));
            http::build_403_response()
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{file_path}': {e}"));
            http::build_500_response()
        }
    }
}
