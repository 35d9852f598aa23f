use std::collections::HashMap;

use tokio::fs::File;

use crate::http::request::Request;

/// Value of the `Server` header on every response.
pub const SERVER_NAME: &str = concat!("quay/", env!("CARGO_PKG_VERSION"));

/// HTTP status codes this server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// What follows the response head on the wire.
#[derive(Debug)]
pub enum Body {
    /// No body at all (HEAD responses)
    Empty,
    /// A small in-memory body (error pages)
    Text(String),
    /// An open file streamed to the client
    File { file: File, size: u64 },
}

impl Body {
    /// Number of body bytes the response will advertise.
    pub fn len(&self) -> u64 {
        match self {
            Body::Empty => 0,
            Body::Text(text) => text.len() as u64,
            Body::File { size, .. } => *size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A complete plan for one response: status, headers, and body kind.
///
/// Produced fresh per request and never mutated after construction.
#[derive(Debug)]
pub struct ResponsePlan {
    pub status: StatusCode,
    pub headers: HashMap<String, String>,
    pub body: Body,
}

/// Builder for constructing response plans in a fluent style.
pub struct ResponseBuilder {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Body,
    content_length: Option<u64>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Body::Empty,
            content_length: None,
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Echoes the request's keep-alive flag as the `Connection` header.
    pub fn keep_alive(self, keep_alive: bool) -> Self {
        self.header(
            "Connection",
            if keep_alive { "keep-alive" } else { "close" },
        )
    }

    /// Sets the response body.
    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// Pins Content-Length independently of the body kind. HEAD
    /// responses advertise the file size while sending no bytes.
    pub fn content_length(mut self, length: u64) -> Self {
        self.content_length = Some(length);
        self
    }

    /// Builds the final plan, deriving Content-Length from the body
    /// unless it was pinned explicitly.
    pub fn build(mut self) -> ResponsePlan {
        let length = self.content_length.unwrap_or_else(|| self.body.len());
        self.headers
            .entry("Content-Length".to_string())
            .or_insert_with(|| length.to_string());

        ResponsePlan {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl ResponsePlan {
    /// 400 plan with the canonical error text.
    pub fn bad_request(why: &str, request: &Request) -> Self {
        error_plan(StatusCode::BadRequest, why.to_string(), request)
    }

    /// 404 plan naming the target that was requested.
    pub fn not_found(target: &str, request: &Request) -> Self {
        error_plan(
            StatusCode::NotFound,
            format!("The resource '{target}' was not found."),
            request,
        )
    }

    /// 500 plan naming the underlying error.
    pub fn server_error(what: &str, request: &Request) -> Self {
        error_plan(
            StatusCode::InternalServerError,
            format!("An error occurred: '{what}'"),
            request,
        )
    }
}

fn error_plan(status: StatusCode, body: String, request: &Request) -> ResponsePlan {
    ResponseBuilder::new(status)
        .header("Server", SERVER_NAME)
        .header("Content-Type", "text/html")
        .keep_alive(request.keep_alive())
        .body(Body::Text(body))
        .build()
}
