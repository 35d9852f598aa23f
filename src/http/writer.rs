use tokio::net::TcpStream;
use tokio::time::Instant;

use crate::io::{Fault, Outcome, ops};
use crate::http::response::{Body, ResponsePlan};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Chunk size for streaming file bodies.
const CHUNK_SIZE: usize = 8192;

fn serialize_head(plan: &ResponsePlan) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        plan.status.as_u16(),
        plan.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &plan.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Head/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes one response plan to the client.
///
/// In-memory bodies are serialized together with the head and go out in
/// a single adapted write; file bodies are streamed in chunks after it.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    file: Option<tokio::fs::File>,
}

impl ResponseWriter {
    pub fn new(plan: ResponsePlan) -> Self {
        let mut buffer = serialize_head(&plan);
        let mut file = None;

        match plan.body {
            Body::Empty => {}
            Body::Text(text) => buffer.extend_from_slice(text.as_bytes()),
            Body::File { file: handle, .. } => file = Some(handle),
        }

        Self { buffer, file }
    }

    pub async fn write_to_stream(
        &mut self,
        stream: &mut TcpStream,
        deadline: Instant,
    ) -> Outcome<(), Fault> {
        if let Outcome::Failure(fault) = ops::write_all(stream, &self.buffer, deadline).await {
            return Outcome::Failure(fault);
        }

        let Some(file) = self.file.as_mut() else {
            return Outcome::Success(());
        };

        let mut chunk = vec![0u8; CHUNK_SIZE];
        loop {
            match ops::read_file(file, &mut chunk).await {
                Outcome::Success(0) => return Outcome::Success(()),
                Outcome::Success(n) => {
                    if let Outcome::Failure(fault) =
                        ops::write_all(stream, &chunk[..n], deadline).await
                    {
                        return Outcome::Failure(fault);
                    }
                }
                Outcome::Failure(fault) => return Outcome::Failure(fault),
            }
        }
    }
}
