use tokio::sync::broadcast;
use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Shutdown signal types
#[derive(Debug, Clone, Copy)]
pub enum ShutdownSignal {
    /// Graceful shutdown (drain connections, clean up)
    Graceful,
}

/// Setup signal handlers for the server
///
/// Returns a broadcast sender for shutdown signals and a join handle for the signal task.
/// SIGTERM and SIGINT both trigger a graceful shutdown; if they cannot be
/// registered, Ctrl+C is used instead.
pub fn setup_signal_handlers() -> (
    broadcast::Sender<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
) {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        #[cfg(unix)]
        let received =
            wait_for_shutdown(signal(SignalKind::terminate()), signal(SignalKind::interrupt())).await;
        #[cfg(not(unix))]
        let received = wait_for_ctrl_c().await;

        info!("{} received, initiating graceful shutdown", received);
        let _ = tx_clone.send(ShutdownSignal::Graceful);
    });

    (shutdown_tx, handle)
}

/// Resolves with the name of the first shutdown signal received
#[cfg(unix)]
async fn wait_for_shutdown(
    sigterm: std::io::Result<Signal>,
    sigint: std::io::Result<Signal>,
) -> &'static str {
    match (sigterm, sigint) {
        (Ok(mut term), Ok(mut int)) => {
            tokio::select! {
                _ = term.recv() => "SIGTERM",
                _ = int.recv() => "SIGINT",
            }
        }
        (Err(e), _) | (_, Err(e)) => {
            error!("Failed to install signal handlers, falling back to Ctrl+C: {}", e);
            wait_for_ctrl_c().await
        }
    }
}

// Never resolves if Ctrl+C cannot be watched either: shutting down would be wrong.
async fn wait_for_ctrl_c() -> &'static str {
    match tokio::signal::ctrl_c().await {
        Ok(()) => "Ctrl+C",
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending().await
        }
    }
}
