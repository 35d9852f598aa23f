use quay::http::request::{Method, Request};

fn request(version: &str, headers: &[(&str, &str)]) -> Request {
    Request {
        method: Method::Get,
        path: "/".to_string(),
        version: version.to_string(),
        headers: headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

#[test]
fn test_request_header_retrieval() {
    let req = request(
        "HTTP/1.1",
        &[("Host", "example.com"), ("Accept", "text/html")],
    );

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Accept"), Some("text/html"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_keep_alive_http11_default() {
    // HTTP/1.1 defaults to keep-alive
    let req = request("HTTP/1.1", &[]);

    assert!(req.keep_alive());
}

#[test]
fn test_request_keep_alive_http10_default() {
    // HTTP/1.0 defaults to close
    let req = request("HTTP/1.0", &[]);

    assert!(!req.keep_alive());
}

#[test]
fn test_request_keep_alive_explicit_header() {
    let req = request("HTTP/1.0", &[("Connection", "keep-alive")]);

    assert!(req.keep_alive());
}

#[test]
fn test_request_keep_alive_close() {
    let req = request("HTTP/1.1", &[("Connection", "close")]);

    assert!(!req.keep_alive());
}

#[test]
fn test_request_keep_alive_case_insensitive() {
    let req = request("HTTP/1.0", &[("Connection", "Keep-Alive")]);

    assert!(req.keep_alive());

    let req = request("HTTP/1.1", &[("Connection", "CLOSE")]);

    assert!(!req.keep_alive());
}

#[test]
fn test_method_parse() {
    assert_eq!(Method::parse("GET"), Method::Get);
    assert_eq!(Method::parse("HEAD"), Method::Head);
    assert_eq!(Method::parse("POST"), Method::Other("POST".to_string()));
    // Case-sensitive per the wire protocol
    assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
}
