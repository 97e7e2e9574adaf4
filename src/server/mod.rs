// Server module entry point
// Listener setup, accept loop, per-connection handling and shutdown

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), use server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use connection::{handle_connection, serve_connection};
pub use listener::create_listener;
pub use server_loop::serve;
pub use signal::shutdown_signal;

use std::sync::Arc;

use crate::config::{AppState, Config};
use crate::error::ServerError;
use crate::logger;

/// Bind the configured address and serve until a shutdown signal.
///
/// Must run inside a `tokio::task::LocalSet`. A bind failure is returned
/// immediately; nothing after a successful bind is fatal.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let listener = create_listener(addr, config.server.backlog)
        .map_err(|source| ServerError::Bind { addr, source })?;

    let bound = listener.local_addr()?;
    logger::log_server_start(&bound, &config);

    let state = Arc::new(AppState::from_config(config));
    serve(listener, state, shutdown_signal()).await;
    Ok(())
}
