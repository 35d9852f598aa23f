//! Adapted asynchronous I/O.
//!
//! The tokio primitives this server suspends on report completion in
//! several different shapes: socket reads return `io::Result<usize>`
//! with `Ok(0)` doubling as the end-of-stream sentinel, writes complete
//! with an error indicator only, `accept` yields a value pair or an
//! error, and wrapping any of them in `timeout_at` nests a second
//! `Result` layer on top. The wrappers in [`ops`] collapse each of
//! these conventions into a single [`Outcome`] carrying exactly one of
//! a success value or a [`Fault`], so the connection state machine can
//! be written as "perform operation, inspect outcome" without per-API
//! error handling.
//!
//! Wrapped operations are drop-in replacements usable from any await
//! point; the task keeps running on whichever worker the runtime
//! scheduled it on.

pub mod ops;
pub mod outcome;

pub use outcome::Outcome;

use crate::http::parser::ParseError;

/// Maximum size of a request head before the connection is refused.
pub const MAX_HEAD_BYTES: usize = 64 * 1024;

/// Unified failure taxonomy for every adapted operation.
#[derive(Debug, thiserror::Error)]
pub enum Fault {
    /// The peer finished sending; a clean close at a message boundary.
    #[error("end of stream")]
    EndOfStream,

    /// The peer closed mid-request.
    #[error("connection closed mid-request")]
    Truncated,

    /// The inactivity deadline elapsed before the operation completed.
    #[error("inactivity deadline elapsed")]
    TimedOut,

    /// The bytes received do not form a valid request head.
    #[error("malformed request: {0}")]
    Malformed(#[from] ParseError),

    /// The request head grew past [`MAX_HEAD_BYTES`].
    #[error("request head exceeds {MAX_HEAD_BYTES} bytes")]
    TooLarge,

    /// Any other transport or filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
