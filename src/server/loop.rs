// Server loop module
// Accepts connections until shutdown is requested, then drains active ones

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Poll interval while waiting for in-flight connections to finish
const DRAIN_POLL: Duration = Duration::from_millis(50);

/// Run the accept loop until `shutdown` is notified.
///
/// After the listener is closed, waits up to `performance.request_timeout`
/// seconds for active connections to complete.
pub async fn run_server(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown("Shutdown requested");
                break;
            }
        }
    }

    drop(listener);
    let drain_timeout = Duration::from_secs(state.config.performance.request_timeout);
    drain_connections(&active_connections, drain_timeout).await;
}

/// Wait until no connections are active or `timeout` elapses
async fn drain_connections(active: &AtomicUsize, timeout: Duration) {
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        let remaining = active.load(Ordering::SeqCst);
        if remaining == 0 {
            logger::log_info("All connections closed");
            return;
        }
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Drain timeout reached with {remaining} connection(s) still active"
            ));
            return;
        }
        tokio::time::sleep(DRAIN_POLL).await;
    }
}
