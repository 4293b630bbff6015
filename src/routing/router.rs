//! Route table → axum Router.
//!
//! # Responsibilities
//! - Attach each table entry's GET handler
//! - Send POST on any path to the echo handler
//! - Answer unknown paths with 404 and unsupported methods with 501

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::http::handlers;
use crate::http::server::AppState;
use crate::routing::table::Endpoint;

/// Build the endpoint router. Middleware is layered on by the server.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new();
    for endpoint in Endpoint::ALL {
        router = router.route(endpoint.path(), method_router(endpoint));
    }
    router.fallback(handlers::fallback).with_state(state)
}

fn method_router(endpoint: Endpoint) -> MethodRouter<AppState> {
    let route = match endpoint {
        Endpoint::Hello => get(handlers::hello),
        Endpoint::Health => get(handlers::health),
        Endpoint::Delay => get(handlers::delay),
        Endpoint::Error => get(handlers::error),
        Endpoint::Random => get(handlers::random),
        Endpoint::Echo => get(handlers::echo),
    };
    route
        .post(handlers::echo_post)
        .fallback(handlers::unsupported_method)
}
