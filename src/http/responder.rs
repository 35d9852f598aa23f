//! Maps a request and the document root to a response plan.

use std::io::ErrorKind;

use tokio::fs::File;

use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{Body, ResponseBuilder, ResponsePlan, SERVER_NAME, StatusCode};

/// Builds the response plan for one request.
///
/// Pure apart from opening the target file; the session owns every
/// transport side effect.
pub async fn respond(request: &Request, root: &str) -> ResponsePlan {
    // Make sure we can handle the method.
    if !matches!(request.method, Method::Get | Method::Head) {
        return ResponsePlan::bad_request("Unknown HTTP-method", request);
    }

    // Request target must be absolute and not contain "..". This is a
    // literal-substring check only; encoded or separator-variant
    // traversals are not canonicalized.
    if request.path.is_empty() || !request.path.starts_with('/') || request.path.contains("..") {
        return ResponsePlan::bad_request("Illegal request-target", request);
    }

    // Build the path to the requested file.
    let mut path = join_path(root, &request.path);
    if request.path.ends_with('/') {
        path.push_str("index.html");
    }

    // Attempt to open the file.
    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return ResponsePlan::not_found(&request.path, request);
        }
        Err(e) => return ResponsePlan::server_error(&e.to_string(), request),
    };

    let size = match file.metadata().await {
        Ok(metadata) => metadata.len(),
        Err(e) => return ResponsePlan::server_error(&e.to_string(), request),
    };

    let builder = ResponseBuilder::new(StatusCode::Ok)
        .header("Server", SERVER_NAME)
        .header("Content-Type", mime::from_path(&path))
        .keep_alive(request.keep_alive());

    match request.method {
        // HEAD advertises the size without sending the body.
        Method::Head => builder.content_length(size).build(),
        _ => builder.body(Body::File { file, size }).build(),
    }
}

/// Appends an HTTP request target to the document root, normalizing the
/// separator between them.
fn join_path(root: &str, target: &str) -> String {
    if root.is_empty() {
        return target.to_string();
    }
    let mut path = root.trim_end_matches('/').to_string();
    path.push_str(target);
    path
}
