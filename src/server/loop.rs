// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::serve_connection;
use crate::config::AppState;
use crate::handler::FileStore;
use crate::logger;

/// Accept loop.
///
/// By default every connection is read, answered and closed before the
/// next `accept`, so connections are served in FIFO order. With
/// `server.concurrent` each connection becomes a `spawn_local` task on the
/// current thread; the caller must then run this inside a `LocalSet`.
///
/// Accept errors are logged and the loop keeps going. Only `shutdown`
/// ends it.
pub async fn serve<S, F>(listener: TcpListener, state: Arc<AppState<S>>, shutdown: F)
where
    S: FileStore + 'static,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                logger::log_shutdown();
                return;
            }

            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        if state.config.server.concurrent {
                            let state = Arc::clone(&state);
                            tokio::task::spawn_local(async move {
                                serve_connection(stream, peer_addr, &state).await;
                            });
                        } else {
                            serve_connection(stream, peer_addr, &state).await;
                        }
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }
        }
    }
}
