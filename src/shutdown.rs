//! Coordinated graceful shutdown for the two protocol servers.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// Owns the server tasks and the channel that tells them to drain.
pub struct ShutdownCoordinator {
    shutdown_tx: broadcast::Sender<()>,
    tasks: JoinSet<()>,
}

/// One receiver end of the shutdown broadcast.
pub struct ShutdownSignal {
    rx: broadcast::Receiver<()>,
}

impl ShutdownSignal {
    /// Resolves when shutdown has been requested. A closed channel counts
    /// as a request; the coordinator is gone either way.
    pub async fn recv(mut self) {
        let _ = self.rx.recv().await;
    }
}

impl ShutdownCoordinator {
    /// A coordinator with no servers yet.
    pub fn new() -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            shutdown_tx,
            tasks: JoinSet::new(),
        }
    }

    /// A signal a server can select on for graceful drain.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.shutdown_tx.subscribe(),
        }
    }

    /// Runs a server future to completion on the task set, logging how it
    /// exited.
    pub fn spawn_server<F>(&mut self, name: &'static str, server: F)
    where
        F: std::future::Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.tasks.spawn(async move {
            match server.await {
                Ok(()) => info!(server = name, "server stopped"),
                Err(err) => error!(server = name, error = %err, "server failed"),
            }
        });
    }

    /// Broadcasts shutdown and waits up to `timeout` for the servers to
    /// drain, aborting whatever is still running afterwards.
    pub async fn shutdown(mut self, timeout: Duration) {
        info!("shutdown requested, draining servers");
        let _ = self.shutdown_tx.send(());

        let drained = tokio::time::timeout(timeout, async {
            while self.tasks.join_next().await.is_some() {}
        })
        .await;

        if drained.is_err() {
            warn!(timeout_secs = timeout.as_secs(), "drain window elapsed, aborting servers");
            self.tasks.abort_all();
            while self.tasks.join_next().await.is_some() {}
        }
        info!("shutdown complete");
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves on SIGINT or SIGTERM.
pub async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT"),
        _ = terminate => info!("received SIGTERM"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn servers_drain_on_broadcast() {
        let mut coordinator = ShutdownCoordinator::new();
        let signal = coordinator.subscribe();
        coordinator.spawn_server("test", async move {
            signal.recv().await;
            Ok(())
        });
        coordinator.shutdown(Duration::from_secs(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn stuck_server_is_aborted_after_the_window() {
        let mut coordinator = ShutdownCoordinator::new();
        coordinator.spawn_server("stuck", async {
            std::future::pending::<()>().await;
            Ok(())
        });
        coordinator.shutdown(Duration::from_secs(5)).await;
    }
}
