//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset the server speaks: GET and
//! HEAD over keep-alive connections, serving files from a single
//! document root.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection session implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP request heads from byte buffers
//! - **`request`**: HTTP request representation and keep-alive semantics
//! - **`response`**: Response plan (status, headers, body kind) with builder pattern
//! - **`responder`**: Maps a request and the document root to a response plan
//! - **`writer`**: Serializes and writes a response plan to the client
//! - **`mime`**: Content-Type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for a request, inactivity deadline armed
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Build the response plan
//!        └──────┬───────────┘
//!               │ Plan ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send headers, stream the body
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → Reading (same connection, deadline re-armed)
//!               └─ Close → Closed
//! ```
//!
//! Every suspension point reports through `io::Outcome`; a fault at any
//! of them is fatal to that one connection and to nothing else.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod responder;
pub mod response;
pub mod writer;
