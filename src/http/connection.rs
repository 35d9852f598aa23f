use std::sync::Arc;
use std::time::Duration;

use bytes::{Buf, BytesMut};
use tokio::net::TcpStream;
use tokio::time::Instant;

use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::responder;
use crate::http::writer::ResponseWriter;
use crate::io::{Fault, MAX_HEAD_BYTES, Outcome, ops};

/// How long a connection may sit without completing its current
/// operation before it is closed.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// One client connection and its session loop.
///
/// The connection exclusively owns its transport; at most one adapted
/// operation is in flight at any time, and the stream is released
/// exactly once when the loop exits.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    root: Arc<str>,
    idle_timeout: Duration,
    state: ConnectionState,
}

enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, root: Arc<str>, idle_timeout: Duration) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            root,
            idle_timeout,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the session until it closes.
    ///
    /// Every fault is terminal for this connection and handled here; no
    /// error propagates to the listener or to other sessions.
    pub async fn run(mut self) {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await {
                        Outcome::Success(request) => {
                            self.state = ConnectionState::Processing(request);
                        }
                        Outcome::Failure(Fault::EndOfStream) => {
                            // Peer finished sending; half-close our
                            // side, best effort.
                            let _ = ops::shutdown_send(&mut self.stream).await;
                            self.state = ConnectionState::Closed;
                        }
                        Outcome::Failure(fault) => {
                            tracing::error!(error = %fault, "failed to read request");
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(request) => {
                    let plan = responder::respond(request, &self.root).await;
                    let keep_alive = request.keep_alive();

                    self.state = ConnectionState::Writing(ResponseWriter::new(plan), keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    let keep_alive = *keep_alive;
                    let deadline = Instant::now() + self.idle_timeout;

                    match writer.write_to_stream(&mut self.stream, deadline).await {
                        Outcome::Success(()) => {
                            self.state = if keep_alive {
                                ConnectionState::Reading // go back for the next request
                            } else {
                                ConnectionState::Closed
                            };
                        }
                        Outcome::Failure(Fault::EndOfStream) => {
                            self.state = ConnectionState::Closed;
                        }
                        Outcome::Failure(fault) => {
                            tracing::error!(error = %fault, "failed to write response");
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }
    }

    /// Reads one request head, re-arming the inactivity deadline for
    /// the whole read.
    async fn read_request(&mut self) -> Outcome<Request, Fault> {
        let deadline = Instant::now() + self.idle_timeout;

        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Outcome::Success(request);
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => return Outcome::Failure(Fault::Malformed(e)),
            }

            if self.buffer.len() > MAX_HEAD_BYTES {
                return Outcome::Failure(Fault::TooLarge);
            }

            match ops::read_buf(&mut self.stream, &mut self.buffer, deadline).await {
                Outcome::Success(_) => {}
                Outcome::Failure(Fault::EndOfStream) if !self.buffer.is_empty() => {
                    // EOF in the middle of a head is not a clean close.
                    return Outcome::Failure(Fault::Truncated);
                }
                Outcome::Failure(fault) => return Outcome::Failure(fault),
            }
        }
    }
}
