//! Shared harness for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use test_upstream::faults::RandomSource;
use test_upstream::{Shutdown, UpstreamConfig, UpstreamServer};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A running upstream on an ephemeral local port.
pub struct TestUpstream {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestUpstream {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn stop(self) {
        self.shutdown.trigger();
        let _ = self.handle.await;
    }
}

fn local_config() -> UpstreamConfig {
    let mut config = UpstreamConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config
}

#[allow(dead_code)]
pub async fn start() -> TestUpstream {
    start_with(local_config()).await
}

#[allow(dead_code)]
pub async fn start_with(config: UpstreamConfig) -> TestUpstream {
    let server = UpstreamServer::new(config).unwrap();
    serve(server).await
}

#[allow(dead_code)]
pub async fn start_with_source(source: Arc<dyn RandomSource>) -> TestUpstream {
    let server = UpstreamServer::with_random_source(local_config(), source).unwrap();
    serve(server).await
}

#[allow(dead_code)]
pub fn local(mut config: UpstreamConfig) -> UpstreamConfig {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config
}

async fn serve(server: UpstreamServer) -> TestUpstream {
    let listener = TcpListener::bind(&server.config().listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        server.run(listener, rx).await.unwrap();
    });

    TestUpstream {
        addr,
        shutdown,
        handle,
    }
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

#[allow(dead_code)]
#[derive(Debug)]
pub struct Fixed(pub f64);

impl RandomSource for Fixed {
    fn next_f64(&self) -> f64 {
        self.0
    }
}
