// Connection handling module
// One connection: single bounded read, one response, close

use std::net::SocketAddr;
use std::time::Instant;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler::FileStore;
use crate::logger::{self, AccessLogEntry};

/// Serve one accepted connection and contain any failure.
///
/// Errors are logged here and never reach the accept loop.
pub async fn serve_connection<S: FileStore>(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &AppState<S>,
) {
    logger::log_connection_accepted(&peer_addr);
    if let Err(e) = handle_connection(stream, peer_addr, state).await {
        logger::log_connection_error(&peer_addr, &e);
    }
}

/// Read the request, write the response, close the connection.
///
/// The request is read with a single call of at most
/// `http.max_request_bytes`; anything the client sends beyond that is
/// ignored. The stream is dropped on return, closing it.
pub async fn handle_connection<S: FileStore>(
    mut stream: TcpStream,
    peer_addr: SocketAddr,
    state: &AppState<S>,
) -> std::io::Result<()> {
    let started = Instant::now();
    let http = &state.config.http;

    let mut buf = vec![0u8; http.max_request_bytes];
    let n = stream.read(&mut buf).await?;
    let raw = &buf[..n];

    if state.config.logging.echo_requests {
        logger::log_request_echo(raw);
    }

    let exchange = state.site.respond(raw).await;
    if let Some(miss) = exchange.miss.as_ref().filter(|m| m.is_rejected()) {
        logger::log_warning(&format!("Rejected request from {peer_addr}: {miss}"));
    }
    let bytes = exchange.response.to_bytes(http.line_ending);

    let written = write_and_close(&mut stream, &bytes).await;

    if state.config.logging.access_log {
        let remote = peer_addr.ip().to_string();
        let mut entry = match &exchange.line {
            Some(line) => {
                let mut e = AccessLogEntry::new(remote, line.method.clone(), line.target.clone());
                e.version.clone_from(&line.version);
                e
            }
            None => AccessLogEntry::new(remote, "-".into(), "-".into()),
        };
        entry.status = exchange.response.status.as_u16();
        entry.body_bytes = exchange.response.body.len();
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    written
}

/// Send the whole response, then shut down the write half
async fn write_and_close(stream: &mut TcpStream, bytes: &[u8]) -> std::io::Result<()> {
    stream.write_all(bytes).await?;
    stream.flush().await?;
    stream.shutdown().await
}
