use std::collections::HashMap;

/// HTTP request methods.
///
/// The server serves GET and HEAD; everything else is carried through
/// parsing and answered with 400 by the responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// HEAD - Like GET but without the response body
    Head,
    /// Any other verb, kept verbatim
    Other(String),
}

impl Method {
    /// Parses an HTTP method token. Matching is case-sensitive, as the
    /// wire protocol requires; `get` is not `GET`.
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            _ => Method::Other(s.to_string()),
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Immutable once parsed; lives for one iteration of the connection
/// loop. Request bodies are out of scope for this server, so a request
/// is its head.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, HEAD, or another verb)
    pub method: Method,
    /// The request target (e.g., "/index.html")
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers as key-value pairs
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Determines whether the connection should remain open after the
    /// response.
    ///
    /// An explicit `Connection: close` or `Connection: keep-alive`
    /// wins; otherwise HTTP/1.1 defaults to keep-alive and anything
    /// older defaults to close.
    pub fn keep_alive(&self) -> bool {
        match self.header("Connection") {
            Some(v) if v.eq_ignore_ascii_case("close") => false,
            Some(v) if v.eq_ignore_ascii_case("keep-alive") => true,
            _ => self.version == "HTTP/1.1",
        }
    }
}
