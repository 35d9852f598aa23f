use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpSocket;
use tracing::{info, warn};

use crate::config::Config;
use crate::http::connection::{Connection, DEFAULT_IDLE_TIMEOUT};
use crate::io::{Fault, Outcome, ops};

const LISTEN_BACKLOG: u32 = 1024;

/// Binds the endpoint and accepts connections forever.
///
/// Startup failures (bad address, port in use, missing permission) are
/// fatal and returned to the caller. Once listening, every accepted
/// connection gets its own task and its own fate; only a non-transient
/// accept failure stops the loop.
pub async fn serve(cfg: &Config) -> anyhow::Result<()> {
    let addr = SocketAddr::new(cfg.address, cfg.port);

    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    }
    .context("failed to open listening socket")?;
    socket
        .set_reuseaddr(true)
        .context("failed to set address reuse")?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {addr}"))?;
    let listener = socket
        .listen(LISTEN_BACKLOG)
        .with_context(|| format!("failed to listen on {addr}"))?;

    info!("Listening on {}", addr);

    let root: Arc<str> = Arc::from(cfg.root.as_str());

    loop {
        match ops::accept(&listener).await {
            Outcome::Success((stream, peer)) => {
                info!("Accepted connection from {}", peer);

                let root = Arc::clone(&root);
                tokio::spawn(async move {
                    Connection::new(stream, root, DEFAULT_IDLE_TIMEOUT).run().await;
                });
            }
            Outcome::Failure(fault) if is_transient(&fault) => {
                warn!(error = %fault, "accept failed, continuing");
            }
            Outcome::Failure(fault) => {
                return Err(fault).context("acceptor failed");
            }
        }
    }
}

/// Accept failures that concern only the connection being accepted, not
/// the listening socket itself.
fn is_transient(fault: &Fault) -> bool {
    match fault {
        Fault::Io(e) => matches!(
            e.kind(),
            std::io::ErrorKind::ConnectionAborted
                | std::io::ErrorKind::ConnectionReset
                | std::io::ErrorKind::Interrupted
                | std::io::ErrorKind::WouldBlock
        ),
        _ => false,
    }
}
