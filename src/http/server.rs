//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the axum Router from the endpoint table
//! - Wire up middleware (access log, tracing, body limit)
//! - Serve a bound listener until shutdown is signalled
//! - Let in-flight requests finish before returning

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config::{validate_config, UpstreamConfig};
use crate::error::ServerError;
use crate::faults::{FailureInjector, RandomSource};
use crate::lifecycle::shutdown::stopped;
use crate::observability::logging::access_log;
use crate::routing::build_router;

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<UpstreamConfig>,
    pub failures: FailureInjector,
}

impl AppState {
    pub fn new(config: UpstreamConfig, failures: FailureInjector) -> Self {
        Self {
            config: Arc::new(config),
            failures,
        }
    }
}

/// HTTP server for the test upstream.
pub struct UpstreamServer {
    router: Router,
    config: Arc<UpstreamConfig>,
}

impl UpstreamServer {
    /// Create a server; `/random` draws from the source the config selects.
    pub fn new(config: UpstreamConfig) -> Result<Self, ServerError> {
        let failures = FailureInjector::from_config(&config.faults);
        Self::with_failures(config, failures)
    }

    /// Create a server whose `/random` endpoint draws from `source`.
    pub fn with_random_source(
        config: UpstreamConfig,
        source: Arc<dyn RandomSource>,
    ) -> Result<Self, ServerError> {
        let failures = FailureInjector::new(config.faults.failure_rate, source);
        Self::with_failures(config, failures)
    }

    fn with_failures(
        config: UpstreamConfig,
        failures: FailureInjector,
    ) -> Result<Self, ServerError> {
        validate_config(&config).map_err(ServerError::Config)?;

        let state = AppState::new(config, failures);
        let config = state.config.clone();
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Endpoint routes plus middleware layers.
    fn build_router(config: &UpstreamConfig, state: AppState) -> Router {
        build_router(state).layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(access_log))
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes)),
        )
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Serve `listener` until a shutdown message (or sender drop) arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                stopped(shutdown).await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
