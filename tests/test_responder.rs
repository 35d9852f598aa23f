use std::collections::HashMap;

use quay::http::request::{Method, Request};
use quay::http::responder::respond;
use quay::http::response::{Body, StatusCode};

fn request(method: Method, path: &str) -> Request {
    Request {
        method,
        path: path.to_string(),
        version: "HTTP/1.1".to_string(),
        headers: HashMap::new(),
    }
}

fn body_text(body: &Body) -> &str {
    match body {
        Body::Text(text) => text,
        other => panic!("expected text body, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_method_is_bad_request() {
    let plan = respond(&request(Method::Other("POST".into()), "/"), "/srv").await;

    assert_eq!(plan.status, StatusCode::BadRequest);
    assert_eq!(body_text(&plan.body), "Unknown HTTP-method");
}

#[tokio::test]
async fn test_dotdot_target_is_bad_request() {
    for target in ["/../etc/passwd", "/a/../b", "/..", "/trailing.."] {
        let plan = respond(&request(Method::Get, target), "/srv").await;

        assert_eq!(plan.status, StatusCode::BadRequest, "target {target}");
        assert_eq!(body_text(&plan.body), "Illegal request-target");
    }
}

#[tokio::test]
async fn test_relative_or_empty_target_is_bad_request() {
    for target in ["", "relative/path"] {
        let plan = respond(&request(Method::Get, target), "/srv").await;

        assert_eq!(plan.status, StatusCode::BadRequest, "target {target:?}");
        assert_eq!(body_text(&plan.body), "Illegal request-target");
    }
}

#[tokio::test]
async fn test_get_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hello.txt"), b"hello world").unwrap();

    let plan = respond(
        &request(Method::Get, "/hello.txt"),
        dir.path().to_str().unwrap(),
    )
    .await;

    assert_eq!(plan.status, StatusCode::Ok);
    assert_eq!(plan.headers.get("Content-Type").unwrap(), "text/plain");
    assert_eq!(plan.headers.get("Content-Length").unwrap(), "11");
    match plan.body {
        Body::File { size, .. } => assert_eq!(size, 11),
        other => panic!("expected file body, got {other:?}"),
    }
}

#[tokio::test]
async fn test_head_existing_file_has_no_body() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hello.txt"), b"hello world").unwrap();

    let plan = respond(
        &request(Method::Head, "/hello.txt"),
        dir.path().to_str().unwrap(),
    )
    .await;

    assert_eq!(plan.status, StatusCode::Ok);
    assert_eq!(plan.headers.get("Content-Length").unwrap(), "11");
    assert!(matches!(plan.body, Body::Empty));
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let plan = respond(
        &request(Method::Head, "/missing.txt"),
        dir.path().to_str().unwrap(),
    )
    .await;

    assert_eq!(plan.status, StatusCode::NotFound);
    assert!(body_text(&plan.body).contains("/missing.txt"));
    assert_eq!(plan.headers.get("Content-Type").unwrap(), "text/html");
}

#[tokio::test]
async fn test_directory_target_serves_index_html() {
    let dir = tempfile::tempdir().unwrap();
    let content = [b'x'; 50];
    std::fs::write(dir.path().join("index.html"), content).unwrap();

    let plan = respond(&request(Method::Get, "/"), dir.path().to_str().unwrap()).await;

    assert_eq!(plan.status, StatusCode::Ok);
    assert_eq!(plan.headers.get("Content-Type").unwrap(), "text/html");
    assert_eq!(plan.headers.get("Content-Length").unwrap(), "50");
}

#[tokio::test]
async fn test_content_type_follows_extension() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.json", "a.svg", "a.unknownext"] {
        std::fs::write(dir.path().join(name), b"x").unwrap();
    }
    let root = dir.path().to_str().unwrap();

    let cases = [
        ("/a.json", "application/json"),
        ("/a.svg", "image/svg+xml"),
        ("/a.unknownext", "application/text"),
    ];
    for (target, expected) in cases {
        let plan = respond(&request(Method::Get, target), root).await;

        assert_eq!(plan.status, StatusCode::Ok);
        assert_eq!(plan.headers.get("Content-Type").unwrap(), expected);
    }
}

#[tokio::test]
async fn test_keep_alive_is_echoed() {
    let dir = tempfile::tempdir().unwrap();
    let mut req = request(Method::Get, "/missing.txt");
    req.headers
        .insert("Connection".to_string(), "close".to_string());

    let plan = respond(&req, dir.path().to_str().unwrap()).await;

    assert_eq!(plan.headers.get("Connection").unwrap(), "close");
}
