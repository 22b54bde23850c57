use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::LazyLock;

use tokio::sync::broadcast;

static KILL: LazyLock<(broadcast::Sender<()>, broadcast::Receiver<()>)> =
    LazyLock::new(|| broadcast::channel(1));

static KILLED: AtomicBool = AtomicBool::new(false);

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        },
        Err(err) => {
            tracing::error!(err = ?err, "Cannot listen for SIGTERM");

            std::future::pending::<()>().await;
        },
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

/// Waits for SIGINT or SIGTERM and wakes up everyone waiting in [`ctrl_c`]
pub async fn listen_for_ctrl_c() {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {},
        _ = terminate() => {},
    }

    tracing::info!("Shutting down...");

    shutdown();
}

pub fn shutdown() {
    KILLED.store(true, Ordering::Relaxed);

    KILL.0.send(()).ok();
}

pub async fn ctrl_c() {
    let mut receiver = KILL.0.subscribe();

    if KILLED.load(Ordering::Relaxed) {
        return;
    }

    receiver.recv().await.ok();
}
