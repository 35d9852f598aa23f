//! Outcome-adapted wrappers over the tokio primitives.
//!
//! Each wrapper owns the translation from one native completion
//! convention to the uniform `Outcome<T, Fault>` shape. Deadline-bound
//! operations take an absolute [`Instant`]; a rolling inactivity
//! deadline is re-armed by the caller, not here.

use std::io::ErrorKind;
use std::net::SocketAddr;

use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{Instant, timeout_at};

use super::{Fault, Outcome};

/// Accepts one connection.
///
/// Native convention: value pair or error. Acceptance carries no
/// deadline; the listener classifies the fault itself.
pub async fn accept(listener: &TcpListener) -> Outcome<(TcpStream, SocketAddr), Fault> {
    match listener.accept().await {
        Ok(pair) => Outcome::Success(pair),
        Err(e) => Outcome::Failure(Fault::Io(e)),
    }
}

/// Reads some bytes from the socket into `buf`, bounded by `deadline`.
///
/// Native convention: `io::Result<usize>` where `Ok(0)` is the in-band
/// end-of-stream sentinel, with `timeout_at` nesting a second `Result`
/// on top. Both are flattened: EOF and expiry become their own fault
/// variants instead of a magic length or a separate error type.
pub async fn read_buf(
    stream: &mut TcpStream,
    buf: &mut BytesMut,
    deadline: Instant,
) -> Outcome<usize, Fault> {
    match timeout_at(deadline, stream.read_buf(buf)).await {
        Err(_) => Outcome::Failure(Fault::TimedOut),
        Ok(Err(e)) => Outcome::Failure(Fault::Io(e)),
        Ok(Ok(0)) => Outcome::Failure(Fault::EndOfStream),
        Ok(Ok(n)) => Outcome::Success(n),
    }
}

/// Writes all of `data` to the socket, bounded by `deadline`.
///
/// Native convention: error indicator only. A peer that went away mid
/// write surfaces as the end-of-stream fault so the session can close
/// without logging, mirroring the read side.
pub async fn write_all(
    stream: &mut TcpStream,
    data: &[u8],
    deadline: Instant,
) -> Outcome<(), Fault> {
    match timeout_at(deadline, stream.write_all(data)).await {
        Err(_) => Outcome::Failure(Fault::TimedOut),
        Ok(Err(e)) => match e.kind() {
            ErrorKind::BrokenPipe | ErrorKind::ConnectionReset | ErrorKind::WriteZero => {
                Outcome::Failure(Fault::EndOfStream)
            }
            _ => Outcome::Failure(Fault::Io(e)),
        },
        Ok(Ok(())) => Outcome::Success(()),
    }
}

/// Reads some bytes from an open file into `buf`.
///
/// Native convention: `io::Result<usize>`. Here `Ok(0)` is the natural
/// end of the body, not a fault, so it passes through as a success.
pub async fn read_file(file: &mut File, buf: &mut [u8]) -> Outcome<usize, Fault> {
    match file.read(buf).await {
        Ok(n) => Outcome::Success(n),
        Err(e) => Outcome::Failure(Fault::Io(e)),
    }
}

/// Half-closes the send direction of the socket.
///
/// Native convention: error indicator only. Used as a best-effort
/// goodbye after the peer finished sending; callers ignore the fault.
pub async fn shutdown_send(stream: &mut TcpStream) -> Outcome<(), Fault> {
    match stream.shutdown().await {
        Ok(()) => Outcome::Success(()),
        Err(e) => Outcome::Failure(Fault::Io(e)),
    }
}
