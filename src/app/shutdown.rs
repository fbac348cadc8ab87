//! Interrupt handling.

use std::io;

use log::{info, warn};
use tokio_util::sync::CancellationToken;

#[cfg(unix)]
type InterruptListener = tokio::signal::unix::Signal;
#[cfg(windows)]
type InterruptListener = tokio::signal::windows::CtrlC;

#[cfg(unix)]
fn listen_for_interrupt() -> io::Result<InterruptListener> {
    tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
}

#[cfg(windows)]
fn listen_for_interrupt() -> io::Result<InterruptListener> {
    tokio::signal::windows::ctrl_c()
}

/// Spawns a task that cancels `cancel` on the first Ctrl-C (SIGINT).
///
/// The handler is registered before this returns, so an interrupt arriving
/// before the task first runs still cancels the token instead of killing the
/// process. The scan loop races every blocking step (reading the next line,
/// waiting on a lookup) against this token, so an interrupt is noticed
/// immediately.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_interrupt_watcher(cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
    let listener = listen_for_interrupt();
    tokio::spawn(async move {
        let mut listener = match listener {
            Ok(listener) => listener,
            Err(e) => {
                warn!("Failed to listen for interrupt signal: {e}");
                return;
            }
        };
        tokio::select! {
            _ = listener.recv() => {
                info!("Interrupt received, shutting down");
                cancel.cancel();
            }
            // The run ended on its own; nothing left to watch
            _ = cancel.cancelled() => {}
        }
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_watcher_exits_when_token_cancelled_elsewhere() {
        let cancel = CancellationToken::new();
        let watcher = spawn_interrupt_watcher(cancel.clone());
        cancel.cancel();
        watcher.await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_interrupt_before_watcher_runs_cancels_token() {
        let cancel = CancellationToken::new();
        let watcher = spawn_interrupt_watcher(cancel.clone());

        // Current-thread runtime: the watcher task has not been polled yet
        let status = std::process::Command::new("sh")
            .arg("-c")
            .arg(format!("kill -INT {}", std::process::id()))
            .status()
            .unwrap();
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(5), cancel.cancelled())
            .await
            .expect("interrupt should cancel the token");
        watcher.await.unwrap();
    }
}
