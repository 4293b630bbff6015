//! Shutdown coordination.
//!
//! `main` triggers on SIGINT/SIGTERM and integration tests trigger directly;
//! `UpstreamServer::run` holds the receiving end and stops accepting on the
//! first message, then drains in-flight requests.

use tokio::sync::broadcast;

/// One-shot stop signal shared by whoever needs to stop the server.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `UpstreamServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Stop every subscribed server. A no-op when none is running.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves once `rx` sees a trigger or every `Shutdown` handle is dropped.
pub async fn stopped(mut rx: broadcast::Receiver<()>) {
    let _ = rx.recv().await;
}
